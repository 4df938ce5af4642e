//! Typed API wrapper for application services
//!
//! The composition root stores an object-safe `Arc<dyn RawApiPort>` (so UI
//! and services don't depend on adapter types). `Api` wraps it and exposes
//! typed methods via serde_json conversions, mapping transport errors into
//! `ServiceError` on the way out.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::application::ServiceError;
use crate::ports::outbound::RawApiPort;

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let value = self.raw.get_json(path).await?;
        serde_json::from_value(value).map_err(|e| ServiceError::ParseError(e.to_string()))
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ServiceError> {
        let body_value =
            serde_json::to_value(body).map_err(|e| ServiceError::ParseError(e.to_string()))?;
        let value = self.raw.post_json(path, &body_value).await?;
        serde_json::from_value(value).map_err(|e| ServiceError::ParseError(e.to_string()))
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let value = self.raw.post_empty(path).await?;
        serde_json::from_value(value).map_err(|e| ServiceError::ParseError(e.to_string()))
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ServiceError> {
        let body_value =
            serde_json::to_value(body).map_err(|e| ServiceError::ParseError(e.to_string()))?;
        let value = self.raw.put_json(path, &body_value).await?;
        serde_json::from_value(value).map_err(|e| ServiceError::ParseError(e.to_string()))
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let value = self.raw.delete_json(path).await?;
        serde_json::from_value(value).map_err(|e| ServiceError::ParseError(e.to_string()))
    }
}
