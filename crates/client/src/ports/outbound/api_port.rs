//! Transport-level API errors
//!
//! `ApiError` is produced by `RawApiPort` adapters and describes what went
//! wrong at the HTTP boundary. The application layer maps it into
//! `ServiceError` before it reaches the UI.

use thiserror::Error;

/// Errors surfaced by the HTTP adapters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network failure, refused
    /// connection, malformed URL)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    /// The server answered with a non-success status code
    ///
    /// `message` carries the server's `error` body field when one was sent,
    /// otherwise the HTTP status text.
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded as JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The request body could not be encoded as JSON
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

impl ApiError {
    /// Check whether the server rejected the request as unauthenticated
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }

    /// Check whether the server reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_detected_by_status() {
        let err = ApiError::Status {
            status: 401,
            message: "Authentication required".to_string(),
        };
        assert!(err.is_unauthorized());
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_detected_by_status() {
        let err = ApiError::Status {
            status: 404,
            message: "Character not found".to_string(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn network_errors_are_neither() {
        let err = ApiError::RequestFailed("connection refused".to_string());
        assert!(!err.is_unauthorized());
        assert!(!err.is_not_found());
    }

    #[test]
    fn display_includes_status_and_message() {
        let err = ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (500): boom");
    }
}
