//! Service layer error types
//!
//! This module defines errors that can occur in the application service layer,
//! abstracting over transport-specific errors so the UI never sees raw HTTP
//! details.

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Request failed to send, was cancelled, or timed out
    Request(String),
    /// Server returned an error response
    ServerError { status: u16, message: String },
    /// The session is no longer valid, a fresh login is required
    SessionExpired,
    /// Failed to parse response data
    ParseError(String),
    /// Input was rejected before any request was made
    Validation(String),
    /// A local export artifact could not be produced
    Export(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Request(e) => write!(f, "Request error: {}", e),
            ServiceError::ServerError { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ServiceError::SessionExpired => write!(f, "Session expired, please sign in again"),
            ServiceError::ParseError(msg) => write!(f, "Failed to parse response: {}", msg),
            ServiceError::Validation(msg) => write!(f, "{}", msg),
            ServiceError::Export(msg) => write!(f, "Export failed: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<ApiError> for ServiceError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Status { status: 401, .. } => ServiceError::SessionExpired,
            ApiError::Status { status, message } => ServiceError::ServerError { status, message },
            ApiError::RequestFailed(msg) => ServiceError::Request(msg),
            ApiError::Timeout(ms) => ServiceError::Request(format!("timed out after {} ms", ms)),
            ApiError::ParseError(msg) | ApiError::SerializeError(msg) => {
                ServiceError::ParseError(msg)
            }
        }
    }
}

impl From<lorecrafter_domain::DomainError> for ServiceError {
    fn from(e: lorecrafter_domain::DomainError) -> Self {
        ServiceError::Validation(e.to_string())
    }
}

impl ServiceError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::ServerError { status: 404, .. })
    }

    /// Check if the caller should be sent back to the login screen
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ServiceError::SessionExpired)
    }
}

/// Default request timeout in milliseconds (2 minutes)
///
/// Generation endpoints block on an LLM backend, so the timeout is generous.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 120_000;

/// Get the request timeout from environment variable or use default
pub fn get_request_timeout_ms() -> u64 {
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var("LORECRAFTER_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS)
    }
    #[cfg(target_arch = "wasm32")]
    {
        DEFAULT_REQUEST_TIMEOUT_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod from_api_error {
        use super::*;

        #[test]
        fn unauthorized_becomes_session_expired() {
            let err = ServiceError::from(ApiError::Status {
                status: 401,
                message: "Authentication required".to_string(),
            });
            assert_eq!(err, ServiceError::SessionExpired);
            assert!(err.is_session_expired());
        }

        #[test]
        fn other_statuses_keep_code_and_message() {
            let err = ServiceError::from(ApiError::Status {
                status: 404,
                message: "Location not found".to_string(),
            });
            assert_eq!(
                err,
                ServiceError::ServerError {
                    status: 404,
                    message: "Location not found".to_string(),
                }
            );
            assert!(err.is_not_found());
        }

        #[test]
        fn timeout_becomes_request_error() {
            let err = ServiceError::from(ApiError::Timeout(5000));
            assert_eq!(err, ServiceError::Request("timed out after 5000 ms".to_string()));
        }

        #[test]
        fn serialize_and_parse_both_become_parse_error() {
            let a = ServiceError::from(ApiError::ParseError("bad json".to_string()));
            let b = ServiceError::from(ApiError::SerializeError("bad body".to_string()));
            assert_eq!(a, ServiceError::ParseError("bad json".to_string()));
            assert_eq!(b, ServiceError::ParseError("bad body".to_string()));
        }
    }

    mod display {
        use super::*;

        #[test]
        fn server_error_shows_status() {
            let err = ServiceError::ServerError {
                status: 500,
                message: "Generation failed".to_string(),
            };
            assert_eq!(err.to_string(), "Server error (500): Generation failed");
        }

        #[test]
        fn validation_shows_message_only() {
            let err = ServiceError::Validation("Prompt cannot be empty".to_string());
            assert_eq!(err.to_string(), "Prompt cannot be empty");
        }
    }
}
