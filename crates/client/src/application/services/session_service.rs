//! Session Service - Server configuration, health banner, and logout
//!
//! Health is fetched once on entry to populate the status banner. Logout asks
//! the backend where to send the user; navigation itself is the UI's job.

use std::sync::Arc;

use lorecrafter_shared::responses::{HealthResponse, LogoutResponse};

use crate::application::{Api, ServiceError};
use crate::ports::outbound::RawApiPort;

/// Server base URL used when neither the environment nor storage has one
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Normalize a user-entered server URL.
///
/// Accepts bare hosts ("localhost:5000" gets an http scheme), requires
/// http/https, and strips any trailing slash so paths can be appended
/// verbatim.
pub fn normalize_server_url(input: &str) -> Result<String, ServiceError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Validation(
            "Server URL cannot be empty".to_string(),
        ));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    let parsed = url::Url::parse(&candidate)
        .map_err(|e| ServiceError::Validation(format!("Not a valid server URL: {}", e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ServiceError::Validation(format!(
            "Unsupported URL scheme: {}",
            parsed.scheme()
        )));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

#[derive(Clone)]
pub struct SessionService {
    api: Api,
    raw: Arc<dyn RawApiPort>,
}

impl SessionService {
    pub fn new(api: Api, raw: Arc<dyn RawApiPort>) -> Self {
        Self { api, raw }
    }

    /// Server base URL all requests currently go to
    pub fn server_url(&self) -> String {
        self.raw.base_url()
    }

    /// Validate `input` and point the HTTP adapter at it.
    ///
    /// Returns the normalized URL so the caller can persist it.
    pub fn configure_server(&self, input: &str) -> Result<String, ServiceError> {
        let normalized = normalize_server_url(input)?;
        self.raw.set_base_url(&normalized);
        tracing::info!("Server base URL set to {}", normalized);
        Ok(normalized)
    }

    /// Backend health probe
    pub async fn health(&self) -> Result<HealthResponse, ServiceError> {
        self.api.get("/api/health").await
    }

    /// End the session; returns where the backend wants the user sent
    pub async fn logout(&self) -> Result<LogoutResponse, ServiceError> {
        self.api.post_empty("/api/logout").await
    }
}
