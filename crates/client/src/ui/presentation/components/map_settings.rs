//! World map settings
//!
//! Lets the user repoint the map background: paste an image URL, upload a
//! local image (inlined as a data URL so it needs no serving origin), or
//! reset back to the default map. The chosen URL persists across sessions.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use dioxus::prelude::*;

use crate::infrastructure::spawn_task;
use crate::ui::presentation::state::{
    use_map_state, use_notice_state, use_tutorial_state, TutorialTarget,
};
use crate::ui::use_platform;

/// Build a `data:` URL for an uploaded image, keyed off the file extension.
///
/// Returns None when the extension is not a known image type.
fn data_url_for_image(file_name: &str, bytes: &[u8]) -> Option<String> {
    let extension = file_name.rsplit('.').next()?.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => return None,
    };
    Some(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

#[component]
pub fn MapSettingsPanel() -> Element {
    let map = use_map_state();
    let notices = use_notice_state();
    let tutorial = use_tutorial_state();
    let platform = use_platform();

    let mut url_input = use_signal(String::new);
    let highlighted = tutorial.highlights(TutorialTarget::MapSettings);

    let map_for_set = map.clone();
    let platform_for_set = platform.clone();
    let on_set_url = move |_| {
        let url = url_input.read().trim().to_string();
        if url.is_empty() {
            return;
        }
        let mut map = map_for_set.clone();
        map.set_image(url, platform_for_set.as_ref());
    };

    let map_for_upload = map.clone();
    let notices_for_upload = notices.clone();
    let platform_for_upload = platform.clone();
    let on_upload = move |evt: Event<FormData>| {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let mut map = map_for_upload.clone();
        let mut notices = notices_for_upload.clone();
        let platform = platform_for_upload.clone();
        spawn_task(async move {
            let name = file.name();
            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes,
                Err(err) => {
                    tracing::warn!("Map upload could not be read: {:?}", err);
                    notices.error("Please select a valid image file.");
                    return;
                }
            };
            match data_url_for_image(&name, bytes.as_ref()) {
                Some(url) => map.set_image(url, platform.as_ref()),
                None => notices.error("Please select a valid image file."),
            }
        });
    };

    let map_for_reset = map.clone();
    let platform_for_reset = platform.clone();
    let on_reset = move |_| {
        let mut map = map_for_reset.clone();
        map.reset_image(platform_for_reset.as_ref());
        url_input.set(String::new());
    };

    rsx! {
        section {
            class: if highlighted { "panel tutorial-highlight" } else { "panel" },
            h2 { class: "panel-title", "World Map Settings" }
            div {
                class: "settings-row",
                input {
                    class: "input-field",
                    r#type: "text",
                    placeholder: "Paste an image URL for your map",
                    value: "{url_input}",
                    oninput: move |evt| url_input.set(evt.value()),
                }
                button {
                    class: "btn btn-muted",
                    onclick: on_set_url,
                    "Set Map Image"
                }
            }
            div {
                class: "settings-row",
                label {
                    class: "upload-label",
                    "Upload an image:"
                    input {
                        r#type: "file",
                        accept: "image/*",
                        onchange: on_upload,
                    }
                }
                button {
                    class: "btn btn-muted",
                    onclick: on_reset,
                    "Reset View"
                }
            }
        }
    }
}
