//! Error types for QueryPad

use thiserror::Error;

/// Core error type for QueryPad operations.
///
/// Tokenization, rendering, word resolution, and indent computation are
/// total functions and never fail; errors only arise at the edges
/// (configuration parsing, persistence I/O).
#[derive(Error, Debug)]
pub enum QueryPadError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for QueryPad operations
pub type Result<T> = std::result::Result<T, QueryPadError>;
