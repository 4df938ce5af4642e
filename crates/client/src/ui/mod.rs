use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;
pub mod routes;

pub use routes::Route;

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // These must be created inside an active Dioxus runtime.
    use_context_provider(presentation::state::WorldState::new);
    use_context_provider(presentation::state::MapState::new);
    use_context_provider(presentation::state::TutorialState::new);
    use_context_provider(presentation::state::NoticeState::new);

    rsx! {
        document::Stylesheet {
            href: asset!("assets/css/lorecrafter.css"),
        }

        div {
            style: "width: 100vw; height: 100vh; overflow-y: auto;",
            Router::<routes::Route> {}
        }
    }
}
