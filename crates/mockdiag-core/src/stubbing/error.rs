//! Registry and journal error types

use thiserror::Error;

/// Errors that can occur while reading or updating the stub registry or
/// the request journal
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Stub mapping with this ID already registered
    #[error("stub mapping already exists: {0}")]
    AlreadyExists(String),

    /// Stub mapping not found
    #[error("stub mapping not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Backing store error (remote registry, database, etc.)
    #[error("store backend error: {0}")]
    Backend(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type for registry and journal operations
pub type StoreResult<T> = Result<T, StoreError>;
