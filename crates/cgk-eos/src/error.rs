//! Equation-of-state errors.

use cgk_core::CoreError;
use thiserror::Error;

/// Result type for equation-of-state operations.
pub type EosResult<T> = Result<T, EosError>;

/// Errors that can occur while configuring or evaluating the equation of state.
#[derive(Error, Debug)]
pub enum EosError {
    /// Non-physical input (non-positive pressure, density, T1).
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },

    /// Physical constants that cannot describe a gas.
    #[error("Invalid constants: {what}")]
    InvalidConstants { what: &'static str },

    /// Batch inputs of different length.
    #[error("Length mismatch: {what} (expected {expected}, got {got})")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// A single cell of a batch evaluation failed.
    #[error("Cell {index} failed: {source}")]
    Cell {
        index: usize,
        #[source]
        source: Box<EosError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EosError {
    /// Map a core guard failure onto the physical-input variant.
    pub(crate) fn non_physical(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, value } | CoreError::NonPositive { what, value } => {
                EosError::NonPhysical { what, value }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EosError::NonPhysical {
            what: "density",
            value: -1.0,
        };
        assert!(err.to_string().contains("density"));

        let err = EosError::LengthMismatch {
            what: "densities",
            expected: 4,
            got: 3,
        };
        assert!(err.to_string().contains("expected 4"));
    }

    #[test]
    fn core_guard_maps_to_non_physical() {
        let err = EosError::non_physical(CoreError::NonPositive {
            what: "pressure",
            value: 0.0,
        });
        assert!(matches!(
            err,
            EosError::NonPhysical {
                what: "pressure",
                ..
            }
        ));

        let err = EosError::non_physical(CoreError::NonFinite {
            what: "T1",
            value: f64::NAN,
        });
        assert!(matches!(err, EosError::NonPhysical { what: "T1", .. }));
    }

    #[test]
    fn cell_error_keeps_source() {
        let inner = EosError::NonPhysical {
            what: "density",
            value: 0.0,
        };
        let err = EosError::Cell {
            index: 7,
            source: Box::new(inner),
        };
        let msg = err.to_string();
        assert!(msg.contains("Cell 7"));
        assert!(msg.contains("density"));
    }
}
