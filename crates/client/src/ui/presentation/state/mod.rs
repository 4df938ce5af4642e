//! UI state containers shared via Dioxus context
//!
//! Each state struct wraps its fields in `Signal`s and is provided once at
//! the application root (see `ui::AppRoot`). Components fetch them with the
//! `use_*_state` hooks below.

use dioxus::prelude::*;

pub mod map_state;
pub mod notice_state;
pub mod tutorial_state;
pub mod world_state;

pub use map_state::{MapState, PlacementMode, DEFAULT_MAP_IMAGE_URL, FALLBACK_MAP_IMAGE_URL};
pub use notice_state::{
    ConfirmAction, ConfirmRequest, NoticeState, Toast, ToastKind, TOAST_AUTO_DISMISS_MS,
};
pub use tutorial_state::{TutorialState, TutorialStep, TutorialTarget, TUTORIAL_STEPS};
pub use world_state::{WorldState, CHARACTERS_LOAD_ERROR, LOCATIONS_LOAD_ERROR};

/// Hook to access the WorldState from Dioxus context
pub fn use_world_state() -> WorldState {
    use_context::<WorldState>()
}

/// Hook to access the MapState from Dioxus context
pub fn use_map_state() -> MapState {
    use_context::<MapState>()
}

/// Hook to access the TutorialState from Dioxus context
pub fn use_tutorial_state() -> TutorialState {
    use_context::<TutorialState>()
}

/// Hook to access the NoticeState from Dioxus context
pub fn use_notice_state() -> NoticeState {
    use_context::<NoticeState>()
}
