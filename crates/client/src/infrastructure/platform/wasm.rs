//! WASM platform implementations
//!
//! Provides platform-specific implementations for browsers using
//! web-sys and gloo.

use crate::ports::outbound::platform::{
    DocumentProvider, FileSaveProvider, NavigationProvider, SleepProvider, StorageProvider,
};
use crate::state::Platform;
use std::{future::Future, pin::Pin};
use wasm_bindgen::{JsCast, JsValue};

/// Browser storage provider backed by `window.localStorage`
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::error!("Failed to write localStorage key {}: {:?}", key, e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!("Failed to remove localStorage key {}: {:?}", key, e);
            }
        }
    }
}

/// Browser sleep provider using gloo timers
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let capped = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(async move {
            gloo_timers::future::TimeoutFuture::new(capped).await;
        })
    }
}

/// Browser document provider
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Browser file save provider triggering a download via a blob URL
#[derive(Clone, Default)]
pub struct WasmFileSaveProvider;

fn download_via_anchor(file_name: &str, mime: &str, bytes: &[u8]) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

impl FileSaveProvider for WasmFileSaveProvider {
    fn save_file(&self, file_name: &str, mime: &str, bytes: &[u8]) -> Result<String, String> {
        download_via_anchor(file_name, mime, bytes)
            .map_err(|e| format!("Download failed: {:?}", e))?;
        Ok(file_name.to_string())
    }
}

/// Browser navigation provider replacing the current page
#[derive(Clone, Default)]
pub struct WasmNavigationProvider;

impl NavigationProvider for WasmNavigationProvider {
    fn open_external(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("Failed to navigate to {}: {:?}", url, e);
            }
        }
    }
}

/// Create platform services for WASM
pub fn create_platform() -> Platform {
    Platform::new(
        WasmStorageProvider,
        WasmSleepProvider,
        WasmDocumentProvider,
        WasmFileSaveProvider,
        WasmNavigationProvider,
    )
}
