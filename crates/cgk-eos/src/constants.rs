//! Physical constants consumed by the inversion: mean molecular weight bounds
//! and the pressure/density → T1 conversion factor.

use std::path::Path;

use cgk_core::units::{Density, Pressure, constants::t1_factor_si, specific_energy_si};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{EosError, EosResult};

fn default_unit_t() -> f64 {
    1.0
}

/// Mean molecular weight bounds and the T1 unit conversion.
///
/// `mumax` is the fully-neutral limit and `mumin` the fully-ionized one, so
/// `mumin * T1 <= T <= mumax * T1` for every state of the gas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhysicalConstants {
    /// Minimum mean molecular weight (fully ionized).
    pub mumin: f64,
    /// Maximum mean molecular weight (fully neutral).
    pub mumax: f64,
    /// Converts pressure / density in code units to T1 [K].
    #[serde(default = "default_unit_t")]
    pub unit_t: f64,
}

impl PhysicalConstants {
    /// Validated constructor.
    pub fn new(mumin: f64, mumax: f64, unit_t: f64) -> EosResult<Self> {
        let constants = Self {
            mumin,
            mumax,
            unit_t,
        };
        constants.validate()?;
        Ok(constants)
    }

    /// Constants the reference table was generated with, T1 already in kelvin.
    pub const fn reference() -> Self {
        Self {
            mumin: 0.6182,
            mumax: 1.295,
            unit_t: 1.0,
        }
    }

    /// Derive `unit_t` from the code unit of pressure and density.
    ///
    /// ```text
    /// unit_t = (P_unit / ρ_unit) · m_H / k_B
    /// ```
    pub fn from_code_units(
        mumin: f64,
        mumax: f64,
        unit_pressure: Pressure,
        unit_density: Density,
    ) -> EosResult<Self> {
        let unit_t = specific_energy_si(unit_pressure, unit_density) * t1_factor_si();
        Self::new(mumin, mumax, unit_t)
    }

    /// Check finiteness, `0 < mumin < mumax` and `unit_t > 0`.
    pub fn validate(&self) -> EosResult<()> {
        let what = if !(self.mumin.is_finite() && self.mumax.is_finite() && self.unit_t.is_finite())
        {
            Some("all constants must be finite")
        } else if self.mumin <= 0.0 {
            Some("mumin must be positive")
        } else if self.mumin >= self.mumax {
            Some("mumin must be below mumax")
        } else if self.unit_t <= 0.0 {
            Some("unit_t must be positive")
        } else {
            None
        };

        match what {
            Some(what) => {
                warn!(
                    mumin = self.mumin,
                    mumax = self.mumax,
                    unit_t = self.unit_t,
                    "rejected physical constants: {what}"
                );
                Err(EosError::InvalidConstants { what })
            }
            None => Ok(()),
        }
    }

    /// Parse and validate constants from YAML text.
    pub fn from_yaml_str(content: &str) -> EosResult<Self> {
        let constants: Self = serde_yaml::from_str(content)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse and validate constants from JSON text.
    pub fn from_json_str(content: &str) -> EosResult<Self> {
        let constants: Self = serde_json::from_str(content)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Read and validate a YAML constants file.
    pub fn load_yaml(path: &Path) -> EosResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let constants = Self::from_yaml_str(&content)?;
        debug!(path = %path.display(), ?constants, "loaded physical constants");
        Ok(constants)
    }

    /// Read and validate a JSON constants file.
    pub fn load_json(path: &Path) -> EosResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let constants = Self::from_json_str(&content)?;
        debug!(path = %path.display(), ?constants, "loaded physical constants");
        Ok(constants)
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgk_core::units::{kg_per_m3, pa};

    #[test]
    fn reference_is_valid() {
        PhysicalConstants::reference().validate().unwrap();
        assert_eq!(PhysicalConstants::default(), PhysicalConstants::reference());
    }

    #[test]
    fn rejects_inverted_bounds() {
        let err = PhysicalConstants::new(1.3, 0.6, 1.0).unwrap_err();
        assert!(matches!(
            err,
            EosError::InvalidConstants {
                what: "mumin must be below mumax"
            }
        ));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(PhysicalConstants::new(0.0, 1.0, 1.0).is_err());
        assert!(PhysicalConstants::new(0.5, 1.0, 0.0).is_err());
        assert!(PhysicalConstants::new(0.5, f64::NAN, 1.0).is_err());
        assert!(PhysicalConstants::new(0.5, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn yaml_with_default_unit_t() {
        let c = PhysicalConstants::from_yaml_str("mumin: 0.5\nmumax: 2.0\n").unwrap();
        assert_eq!(c.mumin, 0.5);
        assert_eq!(c.mumax, 2.0);
        assert_eq!(c.unit_t, 1.0);
    }

    #[test]
    fn yaml_rejects_unknown_key() {
        let err = PhysicalConstants::from_yaml_str("mumin: 0.5\nmumax: 2.0\nmu: 1.0\n").unwrap_err();
        assert!(matches!(err, EosError::Yaml(_)));
    }

    #[test]
    fn json_is_validated() {
        let c = PhysicalConstants::from_json_str(r#"{"mumin": 0.6, "mumax": 1.3, "unit_t": 2.5}"#)
            .unwrap();
        assert_eq!(c.unit_t, 2.5);

        let err = PhysicalConstants::from_json_str(r#"{"mumin": 2.0, "mumax": 1.0}"#).unwrap_err();
        assert!(matches!(err, EosError::InvalidConstants { .. }));
    }

    #[test]
    fn code_units_give_hydrogen_factor() {
        // With SI code units unit_t reduces to m_H / k_B
        let c = PhysicalConstants::from_code_units(0.6, 1.3, pa(1.0), kg_per_m3(1.0)).unwrap();
        assert!((c.unit_t - t1_factor_si()).abs() < 1e-18);

        // Doubling the pressure unit doubles unit_t
        let c2 = PhysicalConstants::from_code_units(0.6, 1.3, pa(2.0), kg_per_m3(1.0)).unwrap();
        assert!((c2.unit_t / c.unit_t - 2.0).abs() < 1e-12);
    }

    #[test]
    fn file_roundtrip_yaml_and_json() {
        let dir = std::env::temp_dir();
        let original = PhysicalConstants::new(0.61, 1.27, 3.0).unwrap();

        let yaml_path = dir.join("cgk_eos_constants_roundtrip.yaml");
        std::fs::write(&yaml_path, serde_yaml::to_string(&original).unwrap()).unwrap();
        assert_eq!(PhysicalConstants::load_yaml(&yaml_path).unwrap(), original);

        let json_path = dir.join("cgk_eos_constants_roundtrip.json");
        std::fs::write(&json_path, serde_json::to_string_pretty(&original).unwrap()).unwrap();
        assert_eq!(PhysicalConstants::load_json(&json_path).unwrap(), original);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("cgk_eos_constants_does_not_exist.yaml");
        let err = PhysicalConstants::load_yaml(&path).unwrap_err();
        assert!(matches!(err, EosError::Io(_)));
    }
}
