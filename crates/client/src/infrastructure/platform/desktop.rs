//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using
//! standard library and native crates.

use crate::ports::outbound::platform::{
    DocumentProvider, FileSaveProvider, NavigationProvider, SleepProvider, StorageProvider,
};
use crate::state::Platform;
use directories::{ProjectDirs, UserDirs};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use std::{future::Future, pin::Pin, sync::Arc};

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/lorecrafter/storage.json
/// - macOS: ~/Library/Application Support/io.lorecrafter.lorecrafter/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\lorecrafter\lorecrafter\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Create a new desktop storage provider
    ///
    /// Loads existing data from the storage file if it exists.
    pub fn new() -> Self {
        // Get platform-specific config directory
        let storage_path = if let Some(dirs) = ProjectDirs::from("io", "lorecrafter", "lorecrafter")
        {
            dirs.config_dir().join("storage.json")
        } else {
            // Fallback to current directory if project dirs unavailable
            PathBuf::from("lorecrafter_storage.json")
        };

        // Load existing data from file
        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!("Failed to parse storage file: {}", e);
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read storage file: {}", e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Persist the cache to disk
    fn persist(&self) {
        // Ensure parent directory exists
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Failed to create storage directory: {}", e);
                return;
            }
        }

        // Write cache to file
        let cache = match self.cache.read() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                return;
            }
        };

        match serde_json::to_string_pretty(&*cache) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!("Failed to write storage file: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Failed to serialize storage data: {}", e);
            }
        }
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.remove(key);
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }
}

/// Desktop sleep provider using tokio timer
#[derive(Clone, Default)]
pub struct DesktopSleepProvider;

impl SleepProvider for DesktopSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        })
    }
}

/// Desktop document provider (no-op for page title)
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, _title: &str) {
        // No-op on desktop - window title is managed by OS/Dioxus desktop
    }
}

/// Desktop file save provider writing exports to the Downloads directory
#[derive(Clone, Default)]
pub struct DesktopFileSaveProvider;

impl DesktopFileSaveProvider {
    fn target_dir() -> PathBuf {
        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(|p| p.to_path_buf()))
            .unwrap_or_else(std::env::temp_dir)
    }
}

impl FileSaveProvider for DesktopFileSaveProvider {
    fn save_file(&self, file_name: &str, _mime: &str, bytes: &[u8]) -> Result<String, String> {
        let path = Self::target_dir().join(file_name);
        fs::write(&path, bytes).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        tracing::info!("Saved export to {}", path.display());
        Ok(path.display().to_string())
    }
}

/// Desktop navigation provider handing URLs to the system browser
#[derive(Clone, Default)]
pub struct DesktopNavigationProvider;

impl NavigationProvider for DesktopNavigationProvider {
    fn open_external(&self, url: &str) {
        let (program, args) = if cfg!(target_os = "macos") {
            ("open", vec![url.to_string()])
        } else if cfg!(target_os = "windows") {
            ("cmd", vec!["/C".to_string(), "start".to_string(), url.to_string()])
        } else {
            ("xdg-open", vec![url.to_string()])
        };

        if let Err(e) = std::process::Command::new(program).args(&args).spawn() {
            tracing::error!("Failed to open external URL {}: {}", url, e);
        }
    }
}

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(
        DesktopStorageProvider::new(),
        DesktopSleepProvider,
        DesktopDocumentProvider,
        DesktopFileSaveProvider,
        DesktopNavigationProvider,
    )
}
