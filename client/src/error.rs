use thiserror::Error;
use wbc_units::DataError;

/// Why the unit dataset could not be loaded
#[derive(Error, Debug)]
pub enum LoadError {
    /// A document could not be fetched (network failure or error status)
    #[error("Dataset unavailable at {url}: {source}")]
    DataUnavailable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A document was fetched but does not describe a valid registry
    #[error("Dataset malformed: {0}")]
    DataMalformed(#[from] DataError),
}

impl LoadError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, LoadError::DataUnavailable { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, LoadError::DataMalformed(_))
    }
}
