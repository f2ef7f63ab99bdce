//! Error taxonomy shared by every operation of the crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolicyError {
    /// The field name is not part of the policy catalog.
    #[error("Unknown field: {0}")]
    UnknownField(String),
    /// A generation request whose class counts cannot fit in its length.
    #[error("Invalid generation request: {0}")]
    InvalidRequest(String),
    /// The breach corpus could not be reached or answered with an error.
    ///
    /// This is never reported as a clean result.
    #[error("Breach service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl From<reqwest::Error> for PolicyError {
    fn from(err: reqwest::Error) -> Self {
        PolicyError::ServiceUnavailable(err.to_string())
    }
}
