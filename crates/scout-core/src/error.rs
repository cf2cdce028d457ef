//! Error types for Scout.
//!
//! Interpretation itself never fails; these cover rehydrating filters from
//! externally supplied parameters.

use thiserror::Error;

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Scout error types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A parameter value that does not parse for its key
    #[error("Invalid value for '{key}': {value}")]
    InvalidParam { key: String, value: String },

    /// A rehydrated range whose minimum exceeds its maximum
    #[error("Inconsistent range: {field} minimum exceeds maximum")]
    InconsistentRange { field: &'static str },
}

impl Error {
    pub(crate) fn invalid(key: &str, value: &str) -> Self {
        Error::InvalidParam {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}
