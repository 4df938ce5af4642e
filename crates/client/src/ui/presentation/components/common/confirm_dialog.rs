//! Generic confirmation dialog
//!
//! Modal overlay used before destructive actions. The requesting component
//! queues a `ConfirmRequest` in `NoticeState`; this dialog shows it and
//! hands the typed action back through `on_confirm`.

use dioxus::prelude::*;

use crate::ui::presentation::state::{ConfirmAction, ConfirmRequest};

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDialogProps {
    pub request: ConfirmRequest,
    pub on_confirm: EventHandler<ConfirmAction>,
    pub on_cancel: EventHandler<()>,
}

#[component]
pub fn ConfirmDialog(props: ConfirmDialogProps) -> Element {
    let ConfirmDialogProps {
        request,
        on_confirm,
        on_cancel,
    } = props;
    let action = request.action.clone();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal-box",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "{request.title}" }
                p { class: "modal-message", "{request.message}" }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-muted",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm.call(action.clone()),
                        "Confirm"
                    }
                }
            }
        }
    }
}
