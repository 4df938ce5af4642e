//! Service providers for the presentation layer
//!
//! This module provides Dioxus context providers for application services.
//! Components can use `use_context` to access services without depending
//! on infrastructure implementations.
//!
//! ## Architecture Note
//!
//! The presentation layer depends on application-level services and port traits.
//! It should not depend directly on infrastructure adapter types.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::{
    CharacterService, ExportService, GenerationService, LocationService, SessionService,
    WorldService,
};
use crate::application::{Api, ServiceError};
use crate::ports::outbound::RawApiPort;
use crate::ui::routes::Route;

use super::state::NoticeState;

/// All services wrapped for context provision
///
/// Every service is REST-based and shares the same `Api` handle. The session
/// service additionally holds the raw port so it can repoint the base URL
/// when the user switches servers.
#[derive(Clone)]
pub struct Services {
    pub world: Arc<WorldService>,
    pub generation: Arc<GenerationService>,
    pub character: Arc<CharacterService>,
    pub location: Arc<LocationService>,
    pub session: Arc<SessionService>,
    pub export: Arc<ExportService>,
}

impl Services {
    /// Create all services with the given ports
    ///
    /// # Arguments
    /// * `api` - The REST API handle shared by all services
    /// * `raw_api` - The raw API port, needed by the session service for
    ///   base URL management
    pub fn new(api: Api, raw_api: Arc<dyn RawApiPort>) -> Self {
        Self {
            world: Arc::new(WorldService::new(api.clone())),
            generation: Arc::new(GenerationService::new(api.clone())),
            character: Arc::new(CharacterService::new(api.clone())),
            location: Arc::new(LocationService::new(api.clone())),
            session: Arc::new(SessionService::new(api.clone(), raw_api)),
            export: Arc::new(ExportService::new(api)),
        }
    }
}

/// Hook to access the WorldService from context
pub fn use_world_service() -> Arc<WorldService> {
    let services = use_context::<Services>();
    services.world.clone()
}

/// Hook to access the GenerationService from context
pub fn use_generation_service() -> Arc<GenerationService> {
    let services = use_context::<Services>();
    services.generation.clone()
}

/// Hook to access the CharacterService from context
pub fn use_character_service() -> Arc<CharacterService> {
    let services = use_context::<Services>();
    services.character.clone()
}

/// Hook to access the LocationService from context
pub fn use_location_service() -> Arc<LocationService> {
    let services = use_context::<Services>();
    services.location.clone()
}

/// Hook to access the SessionService from context
pub fn use_session_service() -> Arc<SessionService> {
    let services = use_context::<Services>();
    services.session.clone()
}

/// Hook to access the ExportService from context
pub fn use_export_service() -> Arc<ExportService> {
    let services = use_context::<Services>();
    services.export.clone()
}

/// Surface a failed service call to the user.
///
/// Expired sessions get a dedicated toast and a redirect to the connect
/// screen. Server-side failures show the server's own message; everything
/// else falls back to the error's display form.
pub fn report_service_error(err: ServiceError, notices: &mut NoticeState, navigator: &Navigator) {
    match err {
        ServiceError::SessionExpired => {
            notices.error("Session expired. Please log in again.");
            navigator.push(Route::LoginRoute {});
        }
        ServiceError::ServerError { message, .. } => {
            notices.error(format!("Error: {}", message));
        }
        other => {
            notices.error(format!("Error: {}", other));
        }
    }
}
