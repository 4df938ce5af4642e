//! In-memory platform for tests
//!
//! Provides a `Platform` whose storage, file saves, and navigation are
//! captured in memory so tests can assert on them. Sleeps resolve
//! immediately.

use crate::ports::outbound::platform::{
    DocumentProvider, FileSaveProvider, NavigationProvider, SleepProvider, StorageProvider,
};
use crate::state::Platform;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::{future::Future, pin::Pin};

/// In-memory storage provider
#[derive(Clone, Default)]
pub struct MockStorageProvider {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl StorageProvider for MockStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.values.lock() {
            guard.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut guard) = self.values.lock() {
            guard.remove(key);
        }
    }
}

/// Sleep provider whose futures resolve immediately
#[derive(Clone, Default)]
pub struct MockSleepProvider;

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async {})
    }
}

/// Document provider recording the last title set
#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    title: Arc<Mutex<Option<String>>>,
}

impl MockDocumentProvider {
    pub fn last_title(&self) -> Option<String> {
        self.title.lock().ok()?.clone()
    }
}

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut guard) = self.title.lock() {
            *guard = Some(title.to_string());
        }
    }
}

/// A file captured by [`MockFileSaveProvider`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// File save provider that records saves instead of touching disk
#[derive(Clone, Default)]
pub struct MockFileSaveProvider {
    saved: Arc<Mutex<Vec<SavedFile>>>,
}

impl MockFileSaveProvider {
    pub fn saved_files(&self) -> Vec<SavedFile> {
        self.saved.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl FileSaveProvider for MockFileSaveProvider {
    fn save_file(&self, file_name: &str, mime: &str, bytes: &[u8]) -> Result<String, String> {
        if let Ok(mut guard) = self.saved.lock() {
            guard.push(SavedFile {
                file_name: file_name.to_string(),
                mime: mime.to_string(),
                bytes: bytes.to_vec(),
            });
        }
        Ok(file_name.to_string())
    }
}

/// Navigation provider that records visited URLs
#[derive(Clone, Default)]
pub struct MockNavigationProvider {
    visited: Arc<Mutex<Vec<String>>>,
}

impl MockNavigationProvider {
    pub fn visited_urls(&self) -> Vec<String> {
        self.visited.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl NavigationProvider for MockNavigationProvider {
    fn open_external(&self, url: &str) {
        if let Ok(mut guard) = self.visited.lock() {
            guard.push(url.to_string());
        }
    }
}

/// Handles to the mock providers backing a test `Platform`.
///
/// Keep the handle around to assert on storage, saved files, or visited
/// URLs after exercising the code under test.
#[derive(Clone, Default)]
pub struct MockPlatform {
    pub storage: MockStorageProvider,
    pub document: MockDocumentProvider,
    pub files: MockFileSaveProvider,
    pub navigation: MockNavigationProvider,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a `Platform` backed by this mock's providers.
    pub fn platform(&self) -> Platform {
        Platform::new(
            self.storage.clone(),
            MockSleepProvider,
            self.document.clone(),
            self.files.clone(),
            self.navigation.clone(),
        )
    }
}
