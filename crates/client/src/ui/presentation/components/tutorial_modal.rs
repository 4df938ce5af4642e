//! Guided tour overlay
//!
//! Walks through the six tour steps. The workshop route decides nothing
//! here; opening and first-visit logic live on [`TutorialState`].

use dioxus::prelude::*;

use crate::ui::presentation::state::use_tutorial_state;
use crate::ui::use_platform;

#[component]
pub fn TutorialModal() -> Element {
    let tutorial = use_tutorial_state();
    let platform = use_platform();

    if !*tutorial.open.read() {
        return rsx! {};
    }

    let step = tutorial.current_step();
    let progress = tutorial.step_label();
    let first = tutorial.is_first_step();
    let last = tutorial.is_last_step();

    let on_close = {
        let mut tutorial = tutorial.clone();
        let platform = platform.clone();
        move |_| tutorial.close(platform.as_ref())
    };
    let on_previous = {
        let mut tutorial = tutorial.clone();
        move |_| tutorial.previous()
    };
    let on_next = {
        let mut tutorial = tutorial.clone();
        let platform = platform.clone();
        move |_| tutorial.next(platform.as_ref())
    };

    rsx! {
        div {
            class: "modal-overlay",
            div {
                class: "modal-box tutorial-box",
                button {
                    class: "modal-close",
                    onclick: on_close,
                    "\u{00d7}"
                }
                div { class: "tutorial-emoji", "\u{1f9d9}" }
                h3 { class: "modal-title glow", {step.title} }
                p { class: "modal-message", {step.body} }
                div {
                    class: "tutorial-footer",
                    span { class: "tutorial-progress", {progress} }
                    div {
                        class: "modal-actions",
                        button {
                            class: "btn btn-muted",
                            // Kept in the layout so the footer does not shift
                            // between the first and later steps.
                            style: if first { "visibility: hidden;" } else { "" },
                            onclick: on_previous,
                            "Previous"
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: on_next,
                            if last { "Finish" } else { "Next" }
                        }
                    }
                }
            }
        }
    }
}
