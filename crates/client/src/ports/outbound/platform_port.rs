//! PlatformPort - Unified platform services interface
//!
//! This trait provides a unified interface for all platform-specific
//! operations needed by the UI layer. The concrete `Platform` struct in
//! `state::platform` implements it by delegating to the individual
//! providers.
//!
//! Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`

use std::{future::Future, pin::Pin};

/// Unified platform services port
pub trait PlatformPort: Send + Sync {
    // -------------------------------------------------------------------------
    // Storage operations
    // -------------------------------------------------------------------------

    /// Save a string value with the given key
    fn storage_save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn storage_load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn storage_remove(&self, key: &str);

    // -------------------------------------------------------------------------
    // Sleep operations
    // -------------------------------------------------------------------------

    /// Sleep for the given number of milliseconds
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);

    // -------------------------------------------------------------------------
    // File export operations
    // -------------------------------------------------------------------------

    /// Save `bytes` under `file_name`, returning the destination on success
    fn save_file(&self, file_name: &str, mime: &str, bytes: &[u8]) -> Result<String, String>;

    // -------------------------------------------------------------------------
    // Navigation operations
    // -------------------------------------------------------------------------

    /// Leave the app for an external URL (logout redirect)
    fn open_external(&self, url: &str);
}
