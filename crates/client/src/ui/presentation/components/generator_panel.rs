//! Generation cards
//!
//! Two prompt cards that ask the backend to invent a character or a
//! location for the described world. The clicked button is disabled while
//! its request is in flight; the destination list shows a placeholder.

use dioxus::prelude::*;

use crate::infrastructure::spawn_task;
use crate::ui::presentation::services::{report_service_error, use_generation_service};
use crate::ui::presentation::state::{
    use_notice_state, use_tutorial_state, use_world_state, TutorialTarget,
};

#[derive(Props, Clone, PartialEq)]
pub struct GeneratorPanelProps {
    /// Fired after a successful generation so the owner can refetch
    pub on_mutated: EventHandler<()>,
}

#[component]
pub fn GeneratorPanel(props: GeneratorPanelProps) -> Element {
    let generation = use_generation_service();
    let world = use_world_state();
    let notices = use_notice_state();
    let tutorial = use_tutorial_state();
    let navigator = use_navigator();
    let on_mutated = props.on_mutated;

    let mut character_prompt = use_signal(String::new);
    let mut location_prompt = use_signal(String::new);

    let generating_character = *world.generating_character.read();
    let generating_location = *world.generating_location.read();
    let highlighted = tutorial.highlights(TutorialTarget::Generators);

    let generation_for_character = generation.clone();
    let world_for_character = world.clone();
    let notices_for_character = notices.clone();
    let on_generate_character = move |_| {
        let prompt = character_prompt.read().trim().to_string();
        let mut notices = notices_for_character.clone();
        if prompt.is_empty() {
            notices.error("Please provide a prompt.");
            return;
        }
        let generation = generation_for_character.clone();
        let mut world = world_for_character.clone();
        spawn_task(async move {
            world.set_generating_character(true);
            match generation.generate_character(&prompt).await {
                Ok(_) => on_mutated.call(()),
                Err(err) => report_service_error(err, &mut notices, &navigator),
            }
            world.set_generating_character(false);
        });
    };

    let generation_for_location = generation.clone();
    let world_for_location = world.clone();
    let notices_for_location = notices.clone();
    let on_generate_location = move |_| {
        let prompt = location_prompt.read().trim().to_string();
        let mut notices = notices_for_location.clone();
        if prompt.is_empty() {
            notices.error("Please provide a prompt.");
            return;
        }
        let generation = generation_for_location.clone();
        let mut world = world_for_location.clone();
        spawn_task(async move {
            world.set_generating_location(true);
            match generation.generate_location(&prompt).await {
                Ok(_) => on_mutated.call(()),
                Err(err) => report_service_error(err, &mut notices, &navigator),
            }
            world.set_generating_location(false);
        });
    };

    rsx! {
        section {
            class: if highlighted { "generator-row tutorial-highlight" } else { "generator-row" },
            div {
                class: "panel",
                h2 { class: "panel-title", "Craft a Character" }
                p { class: "panel-hint", "Describe your world and let the AI forge someone who lives in it." }
                textarea {
                    class: "input-field",
                    rows: 3,
                    placeholder: "e.g. A rain-soaked port city ruled by rival smuggler families",
                    value: "{character_prompt}",
                    oninput: move |evt| character_prompt.set(evt.value()),
                }
                button {
                    class: if generating_character { "btn btn-primary shimmer-animation" } else { "btn btn-primary" },
                    disabled: generating_character,
                    onclick: on_generate_character,
                    if generating_character { "Generating..." } else { "Generate Character" }
                }
            }
            div {
                class: "panel",
                h2 { class: "panel-title", "Chart a Location" }
                p { class: "panel-hint", "Describe your world and let the AI map out a place worth visiting." }
                textarea {
                    class: "input-field",
                    rows: 3,
                    placeholder: "e.g. A mountain pass where the old empire buried its dead",
                    value: "{location_prompt}",
                    oninput: move |evt| location_prompt.set(evt.value()),
                }
                button {
                    class: if generating_location { "btn btn-primary shimmer-animation" } else { "btn btn-primary" },
                    disabled: generating_location,
                    onclick: on_generate_location,
                    if generating_location { "Generating..." } else { "Generate Location" }
                }
            }
        }
    }
}
