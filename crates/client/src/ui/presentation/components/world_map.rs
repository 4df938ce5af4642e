//! World map panel
//!
//! Square planar canvas drawn over the configured background image.
//! Locations with coordinates render as colored markers with hover popups.
//! A click is a no-op unless Placement Mode is armed; an armed click
//! projects the cursor onto the coordinate plane and stores the result.
//!
//! The plane runs 0..=1000 on both axes with the origin in the bottom-left
//! corner, so the vertical axis flips relative to client coordinates.

use std::rc::Rc;

use dioxus::prelude::*;

use lorecrafter_domain::{Location, MapPoint, MAP_EXTENT};

use crate::infrastructure::spawn_task;
use crate::ui::presentation::format::popup_excerpt;
use crate::ui::presentation::services::{report_service_error, use_location_service};
use crate::ui::presentation::state::{
    use_map_state, use_notice_state, use_tutorial_state, use_world_state, TutorialTarget,
};

/// Project a viewport click onto the map plane.
///
/// Returns None for degenerate rects or non-finite positions. Clicks on the
/// fractional edge of the widget clamp into the plane.
fn click_to_map_point(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
    rect_width: f64,
    rect_height: f64,
) -> Option<MapPoint> {
    if rect_width <= 0.0 || rect_height <= 0.0 {
        return None;
    }
    let fx = (client_x - rect_left) / rect_width;
    let fy = (client_y - rect_top) / rect_height;
    MapPoint::clamped(fx * MAP_EXTENT, (1.0 - fy) * MAP_EXTENT).ok()
}

/// Per-marker view data, precomputed so the render loop stays declarative
struct MarkerView {
    id: String,
    name: String,
    excerpt: String,
    color: String,
    left_pct: f64,
    bottom_pct: f64,
}

fn marker_view(location: &Location) -> Option<MarkerView> {
    let point = location.coords()?;
    Some(MarkerView {
        id: location.id().as_str().to_string(),
        name: location.name().as_str().to_string(),
        excerpt: popup_excerpt(location.description()),
        color: location.display_color().to_string(),
        left_pct: point.x() / MAP_EXTENT * 100.0,
        bottom_pct: point.y() / MAP_EXTENT * 100.0,
    })
}

#[derive(Props, Clone, PartialEq)]
pub struct WorldMapPanelProps {
    pub on_mutated: EventHandler<()>,
}

#[component]
pub fn WorldMapPanel(props: WorldMapPanelProps) -> Element {
    let locations = use_location_service();
    let world = use_world_state();
    let map = use_map_state();
    let notices = use_notice_state();
    let tutorial = use_tutorial_state();
    let navigator = use_navigator();
    let on_mutated = props.on_mutated;

    let mut surface = use_signal(|| None::<Rc<MountedData>>);
    let mut hovered = use_signal(|| None::<String>);

    let image_url = map.display_image_url();
    let armed = map.armed_location().is_some();
    let highlighted = tutorial.highlights(TutorialTarget::WorldViews);

    let markers: Vec<MarkerView> = world.locations.read().iter().filter_map(marker_view).collect();

    let map_for_error = map.clone();
    let on_image_error = move |_| {
        let mut map = map_for_error.clone();
        map.mark_image_failed();
    };

    let map_for_click = map.clone();
    let service_for_click = locations.clone();
    let notices_for_click = notices.clone();
    let on_surface_click = move |evt: Event<MouseData>| {
        let Some(location_id) = map_for_click.armed_location() else {
            return;
        };
        let Some(node) = surface.read().clone() else {
            return;
        };
        let client = evt.client_coordinates();
        let service = service_for_click.clone();
        let mut notices = notices_for_click.clone();
        let mut map = map_for_click.clone();
        spawn_task(async move {
            let rect = match node.get_client_rect().await {
                Ok(rect) => rect,
                Err(err) => {
                    tracing::warn!("Map surface measurements unavailable: {:?}", err);
                    return;
                }
            };
            let Some(point) = click_to_map_point(
                client.x,
                client.y,
                rect.origin.x,
                rect.origin.y,
                rect.size.width,
                rect.size.height,
            ) else {
                return;
            };
            match service.set_coords(&location_id, point).await {
                Ok(()) => {
                    notices.success("Location placed successfully!");
                    map.disarm();
                    on_mutated.call(());
                }
                // A failed placement keeps the mode armed so the user can
                // try another click.
                Err(err) => report_service_error(err, &mut notices, &navigator),
            }
        });
    };

    rsx! {
        section {
            class: if highlighted { "panel tutorial-highlight" } else { "panel" },
            h2 { class: "panel-title", "World Map" }
            div {
                class: if armed { "map-surface cursor-crosshair" } else { "map-surface" },
                onmounted: move |evt| surface.set(Some(evt.data())),
                onclick: on_surface_click,
                img {
                    class: "map-image",
                    src: "{image_url}",
                    alt: "World map",
                    draggable: "false",
                    onerror: on_image_error,
                }
                for marker in markers {
                    div {
                        key: "{marker.id}",
                        class: "map-marker",
                        style: "left: {marker.left_pct}%; bottom: {marker.bottom_pct}%; background-color: {marker.color};",
                        onmouseenter: {
                            let id = marker.id.clone();
                            move |_| hovered.set(Some(id.clone()))
                        },
                        onmouseleave: move |_| hovered.set(None),
                        if hovered.read().as_deref() == Some(marker.id.as_str()) {
                            div {
                                class: "map-popup",
                                h3 { "{marker.name}" }
                                p { "{marker.excerpt}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lorecrafter_domain::{Description, LocationId, LocationName};

    fn create_test_location(id: &str, name: &str) -> Location {
        Location::new(
            LocationId::new(id).unwrap(),
            LocationName::new(name).unwrap(),
        )
    }

    #[test]
    fn center_click_lands_mid_plane() {
        let point = click_to_map_point(500.0, 400.0, 100.0, 100.0, 800.0, 600.0).unwrap();
        assert!((point.x() - 500.0).abs() < 1e-9);
        assert!((point.y() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn vertical_axis_flips() {
        // Top edge of the widget is the top of the plane
        let top = click_to_map_point(100.0, 100.0, 100.0, 100.0, 800.0, 600.0).unwrap();
        assert!((top.y() - 1000.0).abs() < 1e-9);
        assert!((top.x() - 0.0).abs() < 1e-9);

        let bottom = click_to_map_point(900.0, 700.0, 100.0, 100.0, 800.0, 600.0).unwrap();
        assert!((bottom.y() - 0.0).abs() < 1e-9);
        assert!((bottom.x() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn edge_overshoot_clamps_into_plane() {
        let point = click_to_map_point(903.0, 98.0, 100.0, 100.0, 800.0, 600.0).unwrap();
        assert!((point.x() - 1000.0).abs() < 1e-9);
        assert!((point.y() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_rect_is_rejected() {
        assert!(click_to_map_point(10.0, 10.0, 0.0, 0.0, 0.0, 600.0).is_none());
    }

    #[test]
    fn placed_locations_become_markers() {
        let location = create_test_location("l1", "Harbor")
            .with_description(Description::new("A sheltered bay").unwrap())
            .with_coords(MapPoint::new(250.0, 400.0).unwrap());
        let view = marker_view(&location).unwrap();
        assert!((view.left_pct - 25.0).abs() < 1e-9);
        assert!((view.bottom_pct - 40.0).abs() < 1e-9);
        assert_eq!(view.name, "Harbor");
    }

    #[test]
    fn unplaced_locations_have_no_marker() {
        assert!(marker_view(&create_test_location("l2", "Keep")).is_none());
    }
}
