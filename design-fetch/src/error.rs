//! Error types for the remote document fetcher.

use thiserror::Error;

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors that can occur when talking to the design service.
///
/// These are never retried; they are handed back to the caller unchanged.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No access token was configured.
    #[error("design service access token is required")]
    MissingToken,

    /// The API base URL is invalid.
    #[error("invalid design service URL: {0}")]
    InvalidUrl(String),

    /// No file key could be extracted from a file URL.
    #[error("could not extract a file key from {0:?}")]
    InvalidFileUrl(String),

    /// HTTP layer failed (connection, timeout, etc.).
    #[error("design service HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("design service returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// JSON parsing failed.
    #[error("failed to parse design service payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The response did not have the expected structure.
    #[error("unexpected design service response: {0}")]
    UnexpectedResponse(String),
}

impl FetchError {
    /// Whether the service rejected the credentials.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_auth() {
        let forbidden = FetchError::Status {
            status: 403,
            message: "Invalid token".into(),
        };
        assert!(forbidden.is_auth());

        let missing = FetchError::Status {
            status: 404,
            message: "Not found".into(),
        };
        assert!(!missing.is_auth());
        assert!(!FetchError::MissingToken.is_auth());
    }

    #[test]
    fn test_display() {
        let err = FetchError::Status {
            status: 429,
            message: "Rate limited".into(),
        };
        assert_eq!(err.to_string(), "design service returned 429: Rate limited");
    }
}
