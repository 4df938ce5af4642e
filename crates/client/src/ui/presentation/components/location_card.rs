//! Location listing and cards
//!
//! Mirrors the character listing: summary row with a colored pin disc and
//! the coordinate readout, details panel with the description plus the
//! place, recolor and delete controls.

use dioxus::prelude::*;

use lorecrafter_domain::{EntityColor, Location};

use crate::infrastructure::spawn_task;
use crate::ui::presentation::components::common::LoadingCard;
use crate::ui::presentation::format::coords_label;
use crate::ui::presentation::services::{report_service_error, use_location_service};
use crate::ui::presentation::state::{
    use_map_state, use_notice_state, use_tutorial_state, use_world_state, ConfirmRequest,
    TutorialTarget,
};

#[derive(Props, Clone, PartialEq)]
pub struct LocationsPanelProps {
    pub on_mutated: EventHandler<()>,
}

#[component]
pub fn LocationsPanel(props: LocationsPanelProps) -> Element {
    let world = use_world_state();
    let tutorial = use_tutorial_state();

    let locations = world.locations.read().clone();
    let error = world.locations_error.read().clone();
    let generating = *world.generating_location.read();
    let highlighted = tutorial.highlights(TutorialTarget::Collections);

    let body = if generating {
        rsx! { LoadingCard {} }
    } else if let Some(message) = error {
        rsx! { p { class: "list-error", "{message}" } }
    } else if locations.is_empty() {
        rsx! { p { class: "list-empty", "No locations generated yet." } }
    } else {
        rsx! {
            for location in locations {
                LocationCard {
                    key: "{location.id()}",
                    location,
                    on_mutated: props.on_mutated,
                }
            }
        }
    };

    rsx! {
        section {
            class: if highlighted { "panel tutorial-highlight" } else { "panel" },
            h2 { class: "panel-title", "Locations" }
            div {
                class: "card-list",
                {body}
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct LocationCardProps {
    pub location: Location,
    pub on_mutated: EventHandler<()>,
}

#[component]
pub fn LocationCard(props: LocationCardProps) -> Element {
    let locations = use_location_service();
    let map = use_map_state();
    let notices = use_notice_state();
    let navigator = use_navigator();

    let location = props.location;
    let on_mutated = props.on_mutated;
    let location_id = location.id().clone();

    let mut expanded = use_signal(|| false);

    let color = location.display_color().to_string();
    let coords_line = coords_label(location.coords());

    let map_for_place = map.clone();
    let notices_for_place = notices.clone();
    let id_for_place = location_id.clone();
    let on_place = move |_| {
        let mut map = map_for_place.clone();
        let mut notices = notices_for_place.clone();
        map.arm_placement(id_for_place.clone());
        notices.info("Placement Mode Activated: Click on the map to place this location.");
    };

    let service_for_color = locations.clone();
    let notices_for_color = notices.clone();
    let id_for_color = location_id.clone();
    let on_color = move |evt: Event<FormData>| {
        let picked = match EntityColor::new(evt.value()) {
            Ok(color) => color,
            Err(err) => {
                tracing::warn!("Rejected color value: {}", err);
                return;
            }
        };
        let service = service_for_color.clone();
        let mut notices = notices_for_color.clone();
        let location_id = id_for_color.clone();
        spawn_task(async move {
            match service.set_color(&location_id, &picked).await {
                Ok(()) => on_mutated.call(()),
                Err(err) => report_service_error(err, &mut notices, &navigator),
            }
        });
    };

    let notices_for_delete = notices.clone();
    let id_for_delete = location_id.clone();
    let on_delete = move |_| {
        let mut notices = notices_for_delete.clone();
        notices.request_confirm(ConfirmRequest::delete_location(id_for_delete.clone()));
    };

    rsx! {
        div {
            class: "entity-card",
            style: "--entity-color: {color};",
            div {
                class: "entity-card-head",
                div {
                    class: "entity-card-identity",
                    div {
                        class: "pin-disc",
                        style: "background-color: {color};",
                        svg {
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z",
                            }
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M15 11a3 3 0 11-6 0 3 3 0 016 0z",
                            }
                        }
                    }
                    div {
                        h4 {
                            class: "entity-name",
                            style: "color: {color};",
                            "{location.name()}"
                        }
                        p { class: "entity-line", "{coords_line}" }
                    }
                }
                button {
                    class: "details-btn",
                    onclick: move |_| {
                        let open = *expanded.read();
                        expanded.set(!open);
                    },
                    if *expanded.read() { "Hide <" } else { "Details >" }
                }
            }
            if *expanded.read() {
                div {
                    class: "entity-details",
                    p { "{location.description()}" }
                    div {
                        class: "entity-actions",
                        button {
                            class: "btn btn-muted",
                            onclick: on_place,
                            "Place on Map"
                        }
                        label {
                            class: "color-row",
                            "Color:"
                            input {
                                r#type: "color",
                                value: "{color}",
                                onchange: on_color,
                            }
                        }
                        button {
                            class: "btn btn-danger",
                            onclick: on_delete,
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
