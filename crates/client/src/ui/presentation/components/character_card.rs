//! Character listing and cards
//!
//! Each card shows the avatar, name and role up front; the details panel
//! behind the toggle carries the long-form fields plus the assignment,
//! recolor and delete controls. Every mutation ends with `on_mutated` so
//! the owner refetches the world.

use dioxus::prelude::*;

use lorecrafter_domain::{Character, EntityColor, LocationId};

use crate::infrastructure::spawn_task;
use crate::ui::presentation::components::common::LoadingCard;
use crate::ui::presentation::format::{initials, role_label, text_or_na};
use crate::ui::presentation::services::{report_service_error, use_character_service};
use crate::ui::presentation::state::{
    use_notice_state, use_tutorial_state, use_world_state, ConfirmRequest, TutorialTarget,
};

#[derive(Props, Clone, PartialEq)]
pub struct CharactersPanelProps {
    pub on_mutated: EventHandler<()>,
}

#[component]
pub fn CharactersPanel(props: CharactersPanelProps) -> Element {
    let world = use_world_state();
    let tutorial = use_tutorial_state();

    let characters = world.characters.read().clone();
    let error = world.characters_error.read().clone();
    let generating = *world.generating_character.read();
    let highlighted = tutorial.highlights(TutorialTarget::Collections);

    let body = if generating {
        rsx! { LoadingCard {} }
    } else if let Some(message) = error {
        rsx! { p { class: "list-error", "{message}" } }
    } else if characters.is_empty() {
        rsx! { p { class: "list-empty", "No characters generated yet." } }
    } else {
        rsx! {
            for character in characters {
                CharacterCard {
                    key: "{character.id()}",
                    character,
                    on_mutated: props.on_mutated,
                }
            }
        }
    };

    rsx! {
        section {
            class: if highlighted { "panel tutorial-highlight" } else { "panel" },
            h2 { class: "panel-title", "Characters" }
            div {
                class: "card-list",
                {body}
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CharacterCardProps {
    pub character: Character,
    pub on_mutated: EventHandler<()>,
}

#[component]
pub fn CharacterCard(props: CharacterCardProps) -> Element {
    let characters = use_character_service();
    let world = use_world_state();
    let notices = use_notice_state();
    let navigator = use_navigator();

    let character = props.character;
    let on_mutated = props.on_mutated;
    let character_id = character.id().clone();

    let mut expanded = use_signal(|| false);
    let initial_selection = character
        .location_id()
        .map(|id| id.as_str().to_string())
        .unwrap_or_default();
    let mut selected_location = use_signal(move || initial_selection);

    let assigned_label = character
        .location_id()
        .and_then(|id| world.location_name(id))
        .unwrap_or_else(|| "Not Assigned".to_string());
    let location_options = world.location_options();
    let color = character.display_color().to_string();
    let avatar_initials = initials(character.name().as_str());

    let service_for_assign = characters.clone();
    let notices_for_assign = notices.clone();
    let id_for_assign = character_id.clone();
    let on_assign = move |_| {
        let value = selected_location.read().clone();
        if value.is_empty() {
            return;
        }
        let Ok(location_id) = LocationId::new(value) else {
            return;
        };
        let service = service_for_assign.clone();
        let mut notices = notices_for_assign.clone();
        let character_id = id_for_assign.clone();
        spawn_task(async move {
            match service.assign_location(&character_id, &location_id).await {
                Ok(()) => on_mutated.call(()),
                Err(err) => report_service_error(err, &mut notices, &navigator),
            }
        });
    };

    let service_for_color = characters.clone();
    let notices_for_color = notices.clone();
    let id_for_color = character_id.clone();
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
        let character_id = id_for_color.clone();
        spawn_task(async move {
            match service.set_color(&character_id, &picked).await {
                Ok(()) => on_mutated.call(()),
                Err(err) => report_service_error(err, &mut notices, &navigator),
            }
        });
    };

    let notices_for_delete = notices.clone();
    let id_for_delete = character_id.clone();
    let on_delete = move |_| {
        let mut notices = notices_for_delete.clone();
        notices.request_confirm(ConfirmRequest::delete_character(id_for_delete.clone()));
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
                        class: "avatar",
                        "{avatar_initials}"
                    }
                    div {
                        h4 {
                            class: "entity-name",
                            style: "color: {color};",
                            "{character.name()}"
                        }
                        p { class: "entity-line", "{role_label(character.role())}" }
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
                    p {
                        b { "Physical: " }
                        "{text_or_na(character.physical_description())}"
                    }
                    p {
                        b { "Personality: " }
                        "{text_or_na(character.personality_traits())}"
                    }
                    p {
                        b { "Backstory: " }
                        "{character.backstory()}"
                    }
                    p {
                        b { "Location: " }
                        "{assigned_label}"
                    }
                    div {
                        class: "entity-actions",
                        select {
                            class: "input-field",
                            value: "{selected_location}",
                            onchange: move |evt| selected_location.set(evt.value()),
                            option { value: "", "-- Assign Location --" }
                            for (id, name) in location_options {
                                option { value: "{id}", "{name}" }
                            }
                        }
                        button {
                            class: "btn btn-muted",
                            onclick: on_assign,
                            "Assign"
                        }
                    }
                    div {
                        class: "entity-actions",
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
