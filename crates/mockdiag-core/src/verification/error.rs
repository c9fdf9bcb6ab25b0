//! Diagnostic error types

use thiserror::Error;

use crate::matching::MatchError;
use crate::stubbing::StoreError;

/// Errors surfaced by near-miss diagnostics.
///
/// Nothing here is caught or retried: the first failing candidate aborts
/// the whole call and no partial ranking is returned.
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// A pattern could not be evaluated (e.g. malformed regex)
    #[error(transparent)]
    Match(#[from] MatchError),

    /// The registry or journal could not be read
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A report could not be serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for diagnostic operations
pub type DiagnosticResult<T> = Result<T, DiagnosticError>;
