//! Error types for memo-core

use thiserror::Error;

/// Result type alias using memo-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in memo-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Network failure or non-success HTTP response from the memo service
    #[error("{0}")]
    Transport(String),

    /// Required form field missing
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Stored memo blob could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Memo not found in the active collection
    #[error("Memo not found: {0}")]
    NotFound(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
