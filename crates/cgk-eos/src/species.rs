//! Species label resolution for chemistry networks.

use thiserror::Error;

/// Why a species label could not be resolved to a single index.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpeciesError {
    #[error("Species {name} not found")]
    NotFound { name: String },

    #[error("Species {name} found more than once ({count})")]
    Duplicate { name: String, count: usize },
}

/// Index of the unique entry of `labels` equal to `name`.
pub fn find_index<S: AsRef<str>>(labels: &[S], name: &str) -> Result<usize, SpeciesError> {
    let mut hits = labels
        .iter()
        .enumerate()
        .filter(|(_, label)| label.as_ref() == name)
        .map(|(i, _)| i);

    match (hits.next(), hits.next()) {
        (Some(i), None) => Ok(i),
        (None, _) => Err(SpeciesError::NotFound {
            name: name.to_string(),
        }),
        (Some(_), Some(_)) => Err(SpeciesError::Duplicate {
            name: name.to_string(),
            count: 2 + hits.count(),
        }),
    }
}
