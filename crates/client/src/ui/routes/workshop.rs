//! Workshop - the single-page world builder
//!
//! Lays out every panel, owns the refresh-after-mutation cycle, and turns
//! pending confirmations into delete calls. Panels report mutations through
//! `on_mutated` instead of refetching themselves, so there is exactly one
//! code path that talks to the listing endpoints.

use dioxus::prelude::*;

use crate::application::{ServiceError, WorldService};
use crate::infrastructure::spawn_task;
use crate::ui::presentation::components::common::{ConfirmDialog, ToastHost};
use crate::ui::presentation::components::{
    CharactersPanel, ExportPanel, GeneratorPanel, Header, LocationsPanel, MapSettingsPanel,
    RelationshipGraphPanel, TutorialModal, WorldMapPanel,
};
use crate::ui::presentation::services::{
    report_service_error, use_character_service, use_location_service, use_world_service,
};
use crate::ui::presentation::state::{
    use_map_state, use_notice_state, use_tutorial_state, use_world_state, ConfirmAction,
    NoticeState, WorldState, CHARACTERS_LOAD_ERROR, LOCATIONS_LOAD_ERROR,
};
use crate::ui::use_platform;

/// Refetch both collections and land them in [`WorldState`].
///
/// The two fetches run concurrently and fail independently: one broken
/// listing shows its own error message while the other still renders. An
/// expired session short-circuits straight to the login redirect.
async fn refresh_world(
    world_service: &WorldService,
    world: &mut WorldState,
    notices: &mut NoticeState,
    navigator: &Navigator,
) {
    world.set_loading(true);
    let (characters, locations) =
        futures_util::future::join(world_service.characters(), world_service.locations()).await;

    match characters {
        Ok(list) => world.set_characters(list),
        Err(ServiceError::SessionExpired) => {
            world.set_loading(false);
            report_service_error(ServiceError::SessionExpired, notices, navigator);
            return;
        }
        Err(err) => {
            tracing::warn!("Character refresh failed: {}", err);
            world.set_characters_error(CHARACTERS_LOAD_ERROR);
        }
    }

    match locations {
        Ok(list) => world.set_locations(list),
        Err(ServiceError::SessionExpired) => {
            world.set_loading(false);
            report_service_error(ServiceError::SessionExpired, notices, navigator);
            return;
        }
        Err(err) => {
            tracing::warn!("Location refresh failed: {}", err);
            world.set_locations_error(LOCATIONS_LOAD_ERROR);
        }
    }

    world.set_loading(false);
}

#[component]
pub fn WorkshopRoute() -> Element {
    let platform = use_platform();
    let navigator = use_navigator();
    let world_service = use_world_service();
    let character_service = use_character_service();
    let location_service = use_location_service();
    let world = use_world_state();
    let map = use_map_state();
    let tutorial = use_tutorial_state();
    let notices = use_notice_state();

    // Initial load: restore persisted map settings, maybe open the tour,
    // then fetch both collections.
    let platform_for_mount = platform.clone();
    let world_service_for_mount = world_service.clone();
    let world_for_mount = world.clone();
    let mut map_for_mount = map.clone();
    let mut tutorial_for_mount = tutorial.clone();
    let notices_for_mount = notices.clone();
    use_effect(move || {
        platform_for_mount.set_page_title("LoreCrafter");
        map_for_mount.restore(platform_for_mount.as_ref());
        tutorial_for_mount.open_if_first_visit(platform_for_mount.as_ref());

        let world_service = world_service_for_mount.clone();
        let mut world = world_for_mount.clone();
        let mut notices = notices_for_mount.clone();
        spawn_task(async move {
            refresh_world(&world_service, &mut world, &mut notices, &navigator).await;
        });
    });

    // Every panel funnels mutations through this one handler.
    let on_mutated = {
        let world_service = world_service.clone();
        let world = world.clone();
        let notices = notices.clone();
        move |_| {
            let world_service = world_service.clone();
            let mut world = world.clone();
            let mut notices = notices.clone();
            spawn_task(async move {
                refresh_world(&world_service, &mut world, &mut notices, &navigator).await;
            });
        }
    };

    let pending_confirm = notices.confirm.read().clone();

    let on_confirm = {
        let character_service = character_service.clone();
        let location_service = location_service.clone();
        let world_service = world_service.clone();
        let world = world.clone();
        let mut notices_for_clear = notices.clone();
        let notices = notices.clone();
        move |action: ConfirmAction| {
            notices_for_clear.clear_confirm();
            let character_service = character_service.clone();
            let location_service = location_service.clone();
            let world_service = world_service.clone();
            let mut world = world.clone();
            let mut notices = notices.clone();
            spawn_task(async move {
                let result = match &action {
                    ConfirmAction::DeleteCharacter(id) => character_service.delete(id).await,
                    ConfirmAction::DeleteLocation(id) => location_service.delete(id).await,
                };
                match result {
                    Ok(()) => {
                        refresh_world(&world_service, &mut world, &mut notices, &navigator).await;
                    }
                    Err(err) => report_service_error(err, &mut notices, &navigator),
                }
            });
        }
    };

    let on_cancel = {
        let mut notices = notices.clone();
        move |_| notices.clear_confirm()
    };

    rsx! {
        div {
            class: "workshop",
            Header {}
            main {
                class: "workshop-main",
                GeneratorPanel { on_mutated: on_mutated.clone() }
                div {
                    class: "collections-row",
                    CharactersPanel { on_mutated: on_mutated.clone() }
                    LocationsPanel { on_mutated: on_mutated.clone() }
                }
                RelationshipGraphPanel {}
                WorldMapPanel { on_mutated: on_mutated.clone() }
                MapSettingsPanel {}
                ExportPanel {}
            }

            ToastHost {}
            TutorialModal {}
            if let Some(request) = pending_confirm {
                ConfirmDialog {
                    request: request,
                    on_confirm: on_confirm,
                    on_cancel: on_cancel,
                }
            }
        }
    }
}
