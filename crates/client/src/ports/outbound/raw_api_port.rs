//! Raw API Port - Object-safe HTTP boundary
//!
//! The composition root stores the HTTP adapter behind `Arc<dyn RawApiPort>`,
//! so the trait works on untyped `serde_json::Value` bodies. The application
//! layer wraps it in a typed `Api` that performs serde conversions.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    /// Current server base URL, without a trailing slash
    fn base_url(&self) -> String;

    /// Point the adapter at a different server; takes effect on the next call
    fn set_base_url(&self, base_url: &str);

    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// POST without a request body; the response body is still returned
    async fn post_empty(&self, path: &str) -> Result<Value, ApiError>;

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// DELETE; the server answers with a confirmation body
    async fn delete_json(&self, path: &str) -> Result<Value, ApiError>;
}

#[cfg(test)]
mockall::mock! {
    /// Mock implementation of RawApiPort for service tests.
    pub RawApiPort {}

    #[async_trait::async_trait]
    impl RawApiPort for RawApiPort {
        fn base_url(&self) -> String;
        fn set_base_url(&self, base_url: &str);
        async fn get_json(&self, path: &str) -> Result<Value, ApiError>;
        async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
        async fn post_empty(&self, path: &str) -> Result<Value, ApiError>;
        async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
        async fn delete_json(&self, path: &str) -> Result<Value, ApiError>;
    }
}
