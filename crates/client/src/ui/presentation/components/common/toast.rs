//! Toast notifications
//!
//! Transient status messages stacked above the page content. Each toast
//! dismisses itself after a few seconds and can be clicked away early.

use dioxus::prelude::*;

use crate::infrastructure::spawn_task;
use crate::ui::presentation::state::{use_notice_state, Toast, ToastKind, TOAST_AUTO_DISMISS_MS};
use crate::ui::use_platform;

/// Toast container, rendered once near the app root
#[component]
pub fn ToastHost() -> Element {
    let notices = use_notice_state();
    let toasts = notices.toasts.read().clone();

    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast }
            }
        }
    }
}

/// One toast card with its own dismiss timer
#[component]
fn ToastItem(toast: Toast) -> Element {
    let platform = use_platform();
    let notices = use_notice_state();

    let toast_id = toast.id;
    let platform_for_timer = platform.clone();
    let notices_for_timer = notices.clone();
    use_effect(move || {
        let platform = platform_for_timer.clone();
        let mut notices = notices_for_timer.clone();
        spawn_task(async move {
            platform.sleep_ms(TOAST_AUTO_DISMISS_MS).await;
            notices.dismiss(toast_id);
        });
    });

    let color = match toast.kind {
        ToastKind::Info => "bg-blue-500",
        ToastKind::Success => "bg-green-500",
        ToastKind::Error => "bg-red-500",
    };

    let mut notices_for_click = notices.clone();
    rsx! {
        div {
            class: "toast {color}",
            onclick: move |_| notices_for_click.dismiss(toast_id),
            "{toast.message}"
        }
    }
}
