//! Application layer - use cases and domain orchestration
//!
//! Depends on ports and domain only; no Dioxus, no HTTP, no platform code.

pub mod api;
pub mod error;
pub mod graph;
pub mod model;
pub mod report;
pub mod services;

pub use api::Api;
pub use error::{get_request_timeout_ms, ServiceError, DEFAULT_REQUEST_TIMEOUT_MS};
pub use services::{
    CharacterService, ExportFile, ExportService, GenerationService, LocationService,
    SessionService, WorldService, DEFAULT_SERVER_URL,
};
