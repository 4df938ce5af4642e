//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection
//! container that aggregates all platform-specific service implementations
//! behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in `infrastructure/platform/desktop.rs`
//!   or `infrastructure/platform/wasm.rs`
//! - Injected into Dioxus context by the composition root
//! - Accessed in UI via `use_context::<Arc<dyn PlatformPort>>()`

use std::{future::Future, pin::Pin, sync::Arc};

use crate::ports::outbound::{
    DocumentProvider, FileSaveProvider, NavigationProvider, PlatformPort, SleepProvider,
    StorageProvider,
};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    storage: Arc<dyn StorageProviderDyn>,
    sleep: Arc<dyn SleepProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
    file_save: Arc<dyn FileSaveProviderDyn>,
    navigation: Arc<dyn NavigationProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait StorageProviderDyn: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

trait SleepProviderDyn: Send + Sync {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
}

trait FileSaveProviderDyn: Send + Sync {
    fn save_file(&self, file_name: &str, mime: &str, bytes: &[u8]) -> Result<String, String>;
}

trait NavigationProviderDyn: Send + Sync {
    fn open_external(&self, url: &str);
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
    fn save(&self, key: &str, value: &str) {
        StorageProvider::save(self, key, value)
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn remove(&self, key: &str) {
        StorageProvider::remove(self, key)
    }
}

impl<T: SleepProvider + Send + Sync> SleepProviderDyn for T {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        SleepProvider::sleep_ms(self, ms)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

impl<T: FileSaveProvider + Send + Sync> FileSaveProviderDyn for T {
    fn save_file(&self, file_name: &str, mime: &str, bytes: &[u8]) -> Result<String, String> {
        FileSaveProvider::save_file(self, file_name, mime, bytes)
    }
}

impl<T: NavigationProvider + Send + Sync> NavigationProviderDyn for T {
    fn open_external(&self, url: &str) {
        NavigationProvider::open_external(self, url)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<S, Sl, D, F, N>(storage: S, sleep: Sl, document: D, file_save: F, navigation: N) -> Self
    where
        S: StorageProvider + Send + Sync,
        Sl: SleepProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
        F: FileSaveProvider + Send + Sync,
        N: NavigationProvider + Send + Sync,
    {
        Self {
            storage: Arc::new(storage),
            sleep: Arc::new(sleep),
            document: Arc::new(document),
            file_save: Arc::new(file_save),
            navigation: Arc::new(navigation),
        }
    }
}

impl PlatformPort for Platform {
    fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    fn storage_remove(&self, key: &str) {
        self.storage.remove(key)
    }

    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }

    fn save_file(&self, file_name: &str, mime: &str, bytes: &[u8]) -> Result<String, String> {
        self.file_save.save_file(file_name, mime, bytes)
    }

    fn open_external(&self, url: &str) {
        self.navigation.open_external(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockPlatform;

    fn port(mock: &MockPlatform) -> Arc<dyn PlatformPort> {
        Arc::new(mock.platform())
    }

    #[test]
    fn storage_calls_reach_the_provider() {
        let mock = MockPlatform::new();
        let platform = port(&mock);

        platform.storage_save("lorecrafter_server_url", "http://localhost:5000");
        assert_eq!(
            platform.storage_load("lorecrafter_server_url").as_deref(),
            Some("http://localhost:5000")
        );

        platform.storage_remove("lorecrafter_server_url");
        assert!(platform.storage_load("lorecrafter_server_url").is_none());
    }

    #[test]
    fn saved_files_are_recorded_with_name_and_mime() {
        let mock = MockPlatform::new();
        let platform = port(&mock);

        let destination = platform
            .save_file("lorecrafter-world.json", "application/json", b"{}")
            .unwrap();
        assert_eq!(destination, "lorecrafter-world.json");

        let saved = mock.files.saved_files();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].mime, "application/json");
        assert_eq!(saved[0].bytes, b"{}");
    }

    #[test]
    fn external_navigation_is_recorded() {
        let mock = MockPlatform::new();
        let platform = port(&mock);

        platform.open_external("http://localhost:5000/login");
        assert_eq!(
            mock.navigation.visited_urls(),
            vec!["http://localhost:5000/login".to_string()]
        );
    }

    #[test]
    fn page_title_is_recorded() {
        let mock = MockPlatform::new();
        let platform = port(&mock);

        platform.set_page_title("LoreCrafter");
        assert_eq!(mock.document.last_title().as_deref(), Some("LoreCrafter"));
    }
}
