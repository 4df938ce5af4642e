//! Workshop header
//!
//! Title block with the backend health line, the help control that reopens
//! the tutorial, and the user menu holding the logout action.

use dioxus::prelude::*;

use crate::infrastructure::spawn_task;
use crate::ui::presentation::format::health_line;
use crate::ui::presentation::services::use_session_service;
use crate::ui::presentation::state::{use_notice_state, use_tutorial_state};
use crate::ui::routes::Route;
use crate::ui::use_platform;

const HEALTH_FAILED: &str = "API Status: Connection Failed";

#[component]
pub fn Header() -> Element {
    let session = use_session_service();
    let platform = use_platform();
    let tutorial = use_tutorial_state();
    let notices = use_notice_state();
    let navigator = use_navigator();

    // None while the startup probe is in flight, then (line, healthy)
    let mut health = use_signal(|| None::<(String, bool)>);
    let mut menu_open = use_signal(|| false);

    let session_for_probe = session.clone();
    use_effect(move || {
        let session = session_for_probe.clone();
        spawn_task(async move {
            match session.health().await {
                Ok(response) => health.set(Some((health_line(&response), true))),
                Err(err) => {
                    tracing::warn!("Health check failed: {}", err);
                    health.set(Some((HEALTH_FAILED.to_string(), false)));
                }
            }
        });
    });

    let session_for_logout = session.clone();
    let platform_for_logout = platform.clone();
    let notices_for_logout = notices.clone();
    let on_logout = move |_| {
        menu_open.set(false);
        let session = session_for_logout.clone();
        let platform = platform_for_logout.clone();
        let notices = notices_for_logout.clone();
        spawn_task(async move {
            match session.logout().await {
                Ok(response) => {
                    // The backend decides where a signed-out user lands.
                    if let Some(url) = response.redirect_url {
                        platform.open_external(&url);
                    }
                    navigator.push(Route::LoginRoute {});
                }
                Err(err) => {
                    tracing::error!("Logout failed: {}", err);
                    let mut notices = notices;
                    notices.error("Logout failed. Please try again.");
                }
            }
        });
    };

    rsx! {
        header {
            class: "app-header",
            div {
                class: "header-title-block",
                h1 { class: "app-title glow", "LoreCrafter" }
                p { class: "app-subtitle", "Forge characters and chart the realms of your world" }
                {
                    match health.read().clone() {
                        Some((line, healthy)) => rsx! {
                            p {
                                class: if healthy { "api-status api-status-ok" } else { "api-status api-status-down" },
                                "{line}"
                            }
                        },
                        None => rsx! {
                            p { class: "api-status", "Checking API..." }
                        },
                    }
                }
            }
            div {
                class: "header-actions",
                button {
                    class: "btn-icon help-btn",
                    title: "Help & Tutorial",
                    onclick: {
                        let tutorial = tutorial.clone();
                        move |_| {
                            let mut tutorial = tutorial.clone();
                            tutorial.open();
                        }
                    },
                    "?"
                }
                div {
                    class: "user-menu",
                    button {
                        class: "btn-icon",
                        title: "Account",
                        onclick: move |_| {
                            let open = *menu_open.read();
                            menu_open.set(!open);
                        },
                        "☰"
                    }
                    if *menu_open.read() {
                        div {
                            class: "user-menu-dropdown",
                            button {
                                class: "user-menu-item",
                                onclick: on_logout,
                                "Logout"
                            }
                        }
                    }
                }
            }
        }
    }
}
