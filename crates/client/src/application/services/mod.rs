//! Application services
//!
//! Each service wraps one slice of the backend surface behind the typed
//! `Api`. Services hold no UI state; the presentation layer owns signals and
//! calls in here.

pub mod character_service;
pub mod export_service;
pub mod generation_service;
pub mod location_service;
pub mod session_service;
pub mod world_service;

pub use character_service::CharacterService;
pub use export_service::{ExportFile, ExportService, JSON_EXPORT_FILE_NAME};
pub use generation_service::GenerationService;
pub use location_service::LocationService;
pub use session_service::{normalize_server_url, SessionService, DEFAULT_SERVER_URL};
pub use world_service::WorldService;
