//! In-list loading placeholder

use dioxus::prelude::*;

/// Spinner card shown in a listing while its generation request runs
#[component]
pub fn LoadingCard() -> Element {
    rsx! {
        div {
            class: "loading-card",
            div { class: "loading-spinner" }
            p { "Loading..." }
        }
    }
}
