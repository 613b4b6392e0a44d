//! Error types for design document handling.

use thiserror::Error;

/// Result type for design document operations.
pub type DesignResult<T> = Result<T, DesignError>;

/// Errors that can occur before conversion starts.
///
/// Conversion itself never fails; recoverable problems inside a tree are
/// reported as [`crate::Diagnostic`] values instead.
#[derive(Debug, Error)]
pub enum DesignError {
    /// Document JSON could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The document has nothing to convert.
    #[error("No content found in design file: {0}")]
    NoContent(String),
}
