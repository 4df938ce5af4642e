//! Export panel
//!
//! JSON and PDF downloads of the whole world. Both fetch fresh data at
//! click time; the finished file goes through the platform's file saver.

use dioxus::prelude::*;

use crate::application::ServiceError;
use crate::infrastructure::spawn_task;
use crate::ui::presentation::services::{report_service_error, use_export_service};
use crate::ui::presentation::state::{use_notice_state, use_tutorial_state, TutorialTarget};
use crate::ui::use_platform;

#[component]
pub fn ExportPanel() -> Element {
    let export = use_export_service();
    let notices = use_notice_state();
    let tutorial = use_tutorial_state();
    let platform = use_platform();
    let navigator = use_navigator();

    let mut exporting_json = use_signal(|| false);
    let mut exporting_pdf = use_signal(|| false);
    let highlighted = tutorial.highlights(TutorialTarget::Export);

    let export_for_json = export.clone();
    let notices_for_json = notices.clone();
    let platform_for_json = platform.clone();
    let on_export_json = move |_| {
        let export = export_for_json.clone();
        let mut notices = notices_for_json.clone();
        let platform = platform_for_json.clone();
        spawn_task(async move {
            exporting_json.set(true);
            match export.export_json().await {
                Ok(file) => match platform.save_file(&file.file_name, &file.mime, &file.bytes) {
                    Ok(destination) => notices.success(format!("World saved to {}", destination)),
                    Err(message) => notices.error(format!("Error: {}", message)),
                },
                Err(err) => report_service_error(err, &mut notices, &navigator),
            }
            exporting_json.set(false);
        });
    };

    let export_for_pdf = export.clone();
    let notices_for_pdf = notices.clone();
    let platform_for_pdf = platform.clone();
    let on_export_pdf = move |_| {
        let export = export_for_pdf.clone();
        let mut notices = notices_for_pdf.clone();
        let platform = platform_for_pdf.clone();
        spawn_task(async move {
            exporting_pdf.set(true);
            match export.export_pdf().await {
                Ok(file) => match platform.save_file(&file.file_name, &file.mime, &file.bytes) {
                    Ok(destination) => notices.success(format!("World saved to {}", destination)),
                    Err(message) => {
                        tracing::error!("PDF save failed: {}", message);
                        notices.error("Failed to generate PDF.");
                    }
                },
                // Expired sessions still go through the login redirect;
                // everything else collapses into the one PDF error line.
                Err(ServiceError::SessionExpired) => {
                    report_service_error(ServiceError::SessionExpired, &mut notices, &navigator);
                }
                Err(err) => {
                    tracing::error!("PDF export failed: {}", err);
                    notices.error("Failed to generate PDF.");
                }
            }
            exporting_pdf.set(false);
        });
    };

    rsx! {
        section {
            class: if highlighted { "panel tutorial-highlight" } else { "panel" },
            h2 { class: "panel-title", "Export Your World" }
            p {
                class: "panel-hint",
                "Download your world as raw JSON data or as a formatted PDF to share."
            }
            div {
                class: "export-actions",
                button {
                    class: "btn btn-primary",
                    disabled: *exporting_json.read(),
                    onclick: on_export_json,
                    "Download as JSON"
                }
                button {
                    class: "btn btn-primary",
                    disabled: *exporting_pdf.read(),
                    onclick: on_export_pdf,
                    if *exporting_pdf.read() { "Generating..." } else { "Download as PDF" }
                }
            }
        }
    }
}
