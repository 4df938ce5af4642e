//! Login - server connection screen
//!
//! Sign-in itself happens in the system browser against the backend's OAuth
//! flow; cookies live there too. This screen only points the client at a
//! server, verifies it answers, and hands off to the workshop.

use dioxus::prelude::*;

use crate::infrastructure::spawn_task;
use crate::ports::outbound::storage_keys;
use crate::ui::presentation::format::health_line;
use crate::ui::presentation::services::use_session_service;
use crate::ui::use_platform;

use super::Route;

const PROBE_FAILED: &str = "Could not reach the server. Check the URL and try again.";

#[component]
pub fn LoginRoute() -> Element {
    let session = use_session_service();
    let platform = use_platform();
    let navigator = use_navigator();

    let session_for_input = session.clone();
    let mut server_input = use_signal(move || session_for_input.server_url());
    let mut status: Signal<Option<(String, bool)>> = use_signal(|| None);
    let mut checking = use_signal(|| false);

    let platform_for_title = platform.clone();
    use_effect(move || {
        platform_for_title.set_page_title("LoreCrafter - Connect");
    });

    let on_check = {
        let session = session.clone();
        let platform = platform.clone();
        move |_| {
            let input = server_input.read().clone();
            match session.configure_server(&input) {
                Ok(normalized) => {
                    platform.storage_save(storage_keys::SERVER_URL, &normalized);
                    server_input.set(normalized);
                    let session = session.clone();
                    spawn_task(async move {
                        checking.set(true);
                        match session.health().await {
                            Ok(response) => status.set(Some((health_line(&response), true))),
                            Err(err) => {
                                tracing::warn!("Health probe failed: {}", err);
                                status.set(Some((PROBE_FAILED.to_string(), false)));
                            }
                        }
                        checking.set(false);
                    });
                }
                Err(err) => status.set(Some((err.to_string(), false))),
            }
        }
    };

    let on_open_sign_in = {
        let session = session.clone();
        let platform = platform.clone();
        move |_| {
            let url = format!("{}/login", session.server_url());
            platform.open_external(&url);
        }
    };

    let on_enter = move |_| {
        navigator.push(Route::WorkshopRoute {});
    };

    rsx! {
        div {
            class: "login-screen",
            div {
                class: "login-card",
                h1 { class: "app-title glow", "LoreCrafter" }
                p {
                    class: "app-subtitle",
                    "Forge characters and chart the realms of your world"
                }

                label { class: "field-label", r#for: "server-url", "Server" }
                input {
                    id: "server-url",
                    class: "input-field",
                    r#type: "text",
                    placeholder: "http://localhost:5000",
                    value: "{server_input}",
                    oninput: move |evt| server_input.set(evt.value()),
                }

                if let Some((line, ok)) = status.read().clone() {
                    p {
                        class: if ok { "api-status api-status-ok" } else { "api-status api-status-down" },
                        "{line}"
                    }
                }

                div {
                    class: "login-actions",
                    button {
                        class: "btn btn-muted",
                        disabled: *checking.read(),
                        onclick: on_check,
                        if *checking.read() { "Checking..." } else { "Check Connection" }
                    }
                    button {
                        class: "btn btn-muted",
                        onclick: on_open_sign_in,
                        "Open Sign-In Page"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: on_enter,
                        "Enter the Workshop"
                    }
                }
            }
        }
    }
}
