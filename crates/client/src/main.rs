//! LoreCrafter client - unified composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lorecrafter_client::application::services::{normalize_server_url, DEFAULT_SERVER_URL};
use lorecrafter_client::ports::outbound::{storage_keys, PlatformPort};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lorecrafter_client=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting LoreCrafter client");

    // Platform
    let platform = lorecrafter_client::infrastructure::platform::create_platform();
    let platform: std::sync::Arc<dyn PlatformPort> = std::sync::Arc::new(platform);

    // HTTP, pointed at the last server this install talked to
    let server_url = initial_server_url(platform.as_ref());
    let raw_api = std::sync::Arc::new(
        lorecrafter_client::infrastructure::http_client::ApiAdapter::new(&server_url),
    );
    let api = lorecrafter_client::application::api::Api::new(raw_api.clone());

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_client_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(lorecrafter_client::ui::presentation::Services::new(
            api, raw_api,
        ))
        .launch(lorecrafter_client::ui::app);
}

/// Pick the server base URL for this run.
///
/// Precedence: `LORECRAFTER_SERVER_URL` environment variable (desktop only),
/// then the URL persisted from the login screen, then the default. Whatever
/// wins is normalized; unusable values fall back to the default.
fn initial_server_url(platform: &dyn PlatformPort) -> String {
    #[cfg(not(target_arch = "wasm32"))]
    let from_env = std::env::var("LORECRAFTER_SERVER_URL").ok();
    #[cfg(target_arch = "wasm32")]
    let from_env: Option<String> = None;

    let candidate = from_env
        .or_else(|| platform.storage_load(storage_keys::SERVER_URL))
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

    match normalize_server_url(&candidate) {
        Ok(url) => url,
        Err(err) => {
            tracing::warn!("Ignoring unusable server URL {:?}: {}", candidate, err);
            DEFAULT_SERVER_URL.to_string()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_client_css() -> String {
    const FALLBACK_CSS: &str = "";

    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    let css_path = repo_root.join("crates/client/assets/css/lorecrafter.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
