//! Storage error types

use thiserror::Error;

/// Errors that can occur while reading or writing persisted cards
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A persisted value could not be parsed
    #[error("Malformed data under {key:?}: {reason}")]
    Malformed { key: String, reason: String },

    /// The backend cannot be reached (no window, storage disabled, quota)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type alias for storage operations
pub type StoreResult<T> = Result<T, StoreError>;
