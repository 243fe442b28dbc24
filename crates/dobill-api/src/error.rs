//! Error types for dobill-api

use thiserror::Error;

/// DigitalOcean API error type; messages are shown verbatim in the channel
#[derive(Debug, Error)]
pub enum Error {
    /// Non-success status returned by the API
    #[error("DigitalOcean API returned status {status} for /{endpoint}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Endpoint path that failed
        endpoint: String,
    },

    /// Transport-level failure
    #[error("network error: {0}")]
    Network(String),

    /// Response body did not match the expected shape
    #[error("failed to decode DigitalOcean response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
