//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! The `Platform` struct that aggregates these traits lives in
//! `state::platform`. Ports layer contains only trait definitions.

use std::{future::Future, pin::Pin};

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Async sleep abstraction
///
/// Used to avoid `#[cfg]` branches in UI code (e.g. toast auto-dismiss).
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// Browser document operations (page title, etc.)
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}

/// File export abstraction
///
/// Browser targets trigger a download; desktop targets write to disk.
pub trait FileSaveProvider: Clone + 'static {
    /// Save `bytes` under `file_name` with the given MIME type
    ///
    /// Returns a human-readable destination (file name or full path) on
    /// success, an error message otherwise.
    fn save_file(&self, file_name: &str, mime: &str, bytes: &[u8]) -> Result<String, String>;
}

/// External navigation abstraction
///
/// Browser targets replace the current page; desktop targets hand the URL
/// to the system browser.
pub trait NavigationProvider: Clone + 'static {
    fn open_external(&self, url: &str);
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    pub const SERVER_URL: &str = "lorecrafter_server_url";
    pub const MAP_IMAGE_URL: &str = "lorecrafter_map_image_url";
    pub const TUTORIAL_SEEN: &str = "lorecrafter_tutorial_seen";
}
