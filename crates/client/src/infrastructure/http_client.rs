//! HTTP transport adapter
//!
//! Implements `RawApiPort` against the LoreCrafter backend REST API.
//! Desktop builds use reqwest; wasm builds go through the browser's fetch
//! API via gloo-net. Both speak JSON and map failures into `ApiError`.

use serde_json::Value;

use lorecrafter_shared::responses::ErrorBody;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::ApiAdapter;
#[cfg(target_arch = "wasm32")]
pub use wasm::ApiAdapter;

/// Best-effort error message from a failure body.
///
/// The backend reports failures as `{"error": ...}` and occasionally
/// `{"message": ...}`. Falls back to the HTTP status line.
fn error_message(body: &Value, status: u16) -> String {
    if let Ok(parsed) = serde_json::from_value::<ErrorBody>(body.clone()) {
        return parsed.error;
    }
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP error! Status: {}", status))
}

/// Join the configured base URL and an absolute API path.
fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(not(target_arch = "wasm32"))]
mod desktop {
    use std::sync::RwLock;
    use std::time::Duration;

    use serde_json::Value;

    use crate::application::get_request_timeout_ms;
    use crate::ports::outbound::{ApiError, RawApiPort};

    use super::{error_message, join_url};

    /// Desktop HTTP adapter backed by a shared reqwest client
    pub struct ApiAdapter {
        client: reqwest::Client,
        base_url: RwLock<String>,
        timeout_ms: u64,
    }

    impl ApiAdapter {
        /// Create an adapter pointed at the given server base URL.
        ///
        /// The request timeout comes from `LORECRAFTER_REQUEST_TIMEOUT_MS`
        /// and covers the whole request, generation calls included.
        pub fn new(base_url: &str) -> Self {
            let timeout_ms = get_request_timeout_ms();
            let client = reqwest::Client::builder()
                .timeout(Duration::from_millis(timeout_ms))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new());

            Self {
                client,
                base_url: RwLock::new(base_url.trim_end_matches('/').to_string()),
                timeout_ms,
            }
        }

        fn url(&self, path: &str) -> String {
            join_url(&RawApiPort::base_url(self), path)
        }

        fn map_send_error(&self, e: reqwest::Error) -> ApiError {
            if e.is_timeout() {
                ApiError::Timeout(self.timeout_ms)
            } else {
                ApiError::RequestFailed(e.to_string())
            }
        }
    }

    /// Read the response body, distinguishing server errors from bad JSON.
    async fn into_api_result(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            return Err(ApiError::Status {
                status,
                message: error_message(&body, status),
            });
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }

    #[async_trait::async_trait]
    impl RawApiPort for ApiAdapter {
        fn base_url(&self) -> String {
            match self.base_url.read() {
                Ok(guard) => guard.clone(),
                Err(e) => {
                    tracing::error!("Failed to acquire read lock for base URL: {}", e);
                    String::new()
                }
            }
        }

        fn set_base_url(&self, base_url: &str) {
            match self.base_url.write() {
                Ok(mut guard) => *guard = base_url.trim_end_matches('/').to_string(),
                Err(e) => {
                    tracing::error!("Failed to acquire write lock for base URL: {}", e);
                }
            }
        }

        async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
            let url = self.url(path);
            tracing::debug!("GET {}", url);
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| self.map_send_error(e))?;
            into_api_result(response).await
        }

        async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
            let url = self.url(path);
            tracing::debug!("POST {}", url);
            let response = self
                .client
                .post(&url)
                .json(body)
                .send()
                .await
                .map_err(|e| self.map_send_error(e))?;
            into_api_result(response).await
        }

        async fn post_empty(&self, path: &str) -> Result<Value, ApiError> {
            let url = self.url(path);
            tracing::debug!("POST {}", url);
            let response = self
                .client
                .post(&url)
                .send()
                .await
                .map_err(|e| self.map_send_error(e))?;
            into_api_result(response).await
        }

        async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
            let url = self.url(path);
            tracing::debug!("PUT {}", url);
            let response = self
                .client
                .put(&url)
                .json(body)
                .send()
                .await
                .map_err(|e| self.map_send_error(e))?;
            into_api_result(response).await
        }

        async fn delete_json(&self, path: &str) -> Result<Value, ApiError> {
            let url = self.url(path);
            tracing::debug!("DELETE {}", url);
            let response = self
                .client
                .delete(&url)
                .send()
                .await
                .map_err(|e| self.map_send_error(e))?;
            into_api_result(response).await
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::sync::RwLock;

    use gloo_net::http::{Request, Response};
    use serde_json::Value;

    use crate::ports::outbound::{ApiError, RawApiPort};

    use super::{error_message, join_url};

    /// Browser HTTP adapter over the fetch API
    ///
    /// Timeouts are left to the browser; there is no per-request override.
    pub struct ApiAdapter {
        base_url: RwLock<String>,
    }

    impl ApiAdapter {
        pub fn new(base_url: &str) -> Self {
            Self {
                base_url: RwLock::new(base_url.trim_end_matches('/').to_string()),
            }
        }

        fn url(&self, path: &str) -> String {
            join_url(&RawApiPort::base_url(self), path)
        }
    }

    async fn into_api_result(response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        if !response.ok() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            return Err(ApiError::Status {
                status,
                message: error_message(&body, status),
            });
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }

    #[async_trait::async_trait(?Send)]
    impl RawApiPort for ApiAdapter {
        fn base_url(&self) -> String {
            match self.base_url.read() {
                Ok(guard) => guard.clone(),
                Err(e) => {
                    tracing::error!("Failed to acquire read lock for base URL: {}", e);
                    String::new()
                }
            }
        }

        fn set_base_url(&self, base_url: &str) {
            match self.base_url.write() {
                Ok(mut guard) => *guard = base_url.trim_end_matches('/').to_string(),
                Err(e) => {
                    tracing::error!("Failed to acquire write lock for base URL: {}", e);
                }
            }
        }

        async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
            let url = self.url(path);
            tracing::debug!("GET {}", url);
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
            into_api_result(response).await
        }

        async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
            let url = self.url(path);
            tracing::debug!("POST {}", url);
            let response = Request::post(&url)
                .json(body)
                .map_err(|e| ApiError::SerializeError(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
            into_api_result(response).await
        }

        async fn post_empty(&self, path: &str) -> Result<Value, ApiError> {
            let url = self.url(path);
            tracing::debug!("POST {}", url);
            let response = Request::post(&url)
                .send()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
            into_api_result(response).await
        }

        async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
            let url = self.url(path);
            tracing::debug!("PUT {}", url);
            let response = Request::put(&url)
                .json(body)
                .map_err(|e| ApiError::SerializeError(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
            into_api_result(response).await
        }

        async fn delete_json(&self, path: &str) -> Result<Value, ApiError> {
            let url = self.url(path);
            tracing::debug!("DELETE {}", url);
            let response = Request::delete(&url)
                .send()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
            into_api_result(response).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    mod error_messages {
        use super::*;

        #[test]
        fn prefers_the_error_field() {
            let body = json!({"error": "Location not found", "message": "ignored"});
            assert_eq!(error_message(&body, 404), "Location not found");
        }

        #[test]
        fn falls_back_to_the_message_field() {
            let body = json!({"message": "Authentication required"});
            assert_eq!(error_message(&body, 401), "Authentication required");
        }

        #[test]
        fn falls_back_to_the_status_line_for_opaque_bodies() {
            assert_eq!(error_message(&Value::Null, 502), "HTTP error! Status: 502");
            assert_eq!(
                error_message(&json!({"detail": 3}), 500),
                "HTTP error! Status: 500"
            );
        }
    }

    mod urls {
        use super::*;

        #[test]
        fn joins_base_and_path() {
            assert_eq!(
                join_url("http://localhost:5000", "/api/health"),
                "http://localhost:5000/api/health"
            );
        }

        #[test]
        fn strips_a_trailing_slash_from_the_base() {
            assert_eq!(
                join_url("http://localhost:5000/", "/api/characters"),
                "http://localhost:5000/api/characters"
            );
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod adapter {
        use crate::ports::outbound::RawApiPort;

        use super::super::ApiAdapter;

        #[test]
        fn base_url_can_be_reconfigured() {
            let adapter = ApiAdapter::new("http://localhost:5000/");
            assert_eq!(adapter.base_url(), "http://localhost:5000");

            adapter.set_base_url("https://lore.example.com/");
            assert_eq!(adapter.base_url(), "https://lore.example.com");
        }
    }
}
