//! Response bodies returned by the backend
//!
//! Mutating endpoints answer with a bare `{"message": ...}` object on
//! success and `{"error": ...}` with a non-success status on failure; the
//! error body is shared by every endpoint.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Human-readable API status line
    pub message: String,
    /// Database connectivity summary (e.g. "connected")
    pub database: String,
}

/// Success body of mutating endpoints (delete, link, set_coords, color)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of `POST /api/logout`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoutResponse {
    /// Where the client should navigate after the session ends; absent when
    /// the backend has no opinion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

/// Error body shared by all endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
