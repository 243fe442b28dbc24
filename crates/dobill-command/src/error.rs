//! Error types for dobill-command

use thiserror::Error;

/// Command error type; the display string is shown verbatim in the channel
#[derive(Debug, Error)]
pub enum Error {
    /// Resource fetch failed
    #[error("{0}")]
    Fetch(#[from] dobill_api::Error),

    /// Cost estimation failed
    #[error("{0}")]
    Estimate(#[from] dobill_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
