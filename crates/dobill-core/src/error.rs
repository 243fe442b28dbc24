//! Error types for dobill-core

use thiserror::Error;

/// Cost estimation error type
#[derive(Debug, Error)]
pub enum Error {
    /// No published rate for a database size/node-count combination
    #[error("no hourly rate known for database size '{size}' with {num_nodes} node(s)")]
    UnknownDatabaseRate {
        /// Size slug reported by the API
        size: String,
        /// Number of nodes in the cluster
        num_nodes: u32,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
