//! Relationship graph panel
//!
//! SVG rendering of the world graph: characters as discs, locations as
//! rounded rectangles, one directed edge per location assignment. The
//! layout comes from the deterministic force simulation in the application
//! layer, so markers stay put between renders of the same world. Hovering
//! a node thickens its border and darkens its incident edges.

use dioxus::prelude::*;

use crate::application::graph::{
    build_world_graph, layout_world_graph, LayoutPoint, NodeKind, WorldGraph,
};
use crate::ui::presentation::state::{use_tutorial_state, use_world_state, TutorialTarget};

const GRAPH_WIDTH: f64 = 1000.0;
const GRAPH_HEIGHT: f64 = 600.0;

const CHARACTER_RADIUS: f64 = 18.0;
const LOCATION_HALF_WIDTH: f64 = 24.0;
const LOCATION_HALF_HEIGHT: f64 = 15.0;
const LABEL_OFFSET: f64 = 34.0;

/// Edge endpoints stop this far short of the target center so the
/// arrowhead is not swallowed by the node glyph
const ARROW_TARGET_OFFSET: f64 = 26.0;
const ARROW_LENGTH: f64 = 10.0;
const ARROW_HALF_WIDTH: f64 = 4.5;

const EDGE_STROKE: &str = "rgba(78, 52, 46, 0.33)";
const EDGE_STROKE_ACTIVE: &str = "#4e342e";

/// `points` attribute of the arrowhead triangle at the target end.
///
/// None when the nodes sit too close for an arrow to fit.
fn edge_arrow_points(from: LayoutPoint, to: LayoutPoint) -> Option<String> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len < ARROW_TARGET_OFFSET + ARROW_LENGTH {
        return None;
    }
    let (ux, uy) = (dx / len, dy / len);
    let tip_x = to.x - ux * ARROW_TARGET_OFFSET;
    let tip_y = to.y - uy * ARROW_TARGET_OFFSET;
    let base_x = tip_x - ux * ARROW_LENGTH;
    let base_y = tip_y - uy * ARROW_LENGTH;
    let (px, py) = (-uy, ux);
    Some(format!(
        "{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}",
        tip_x,
        tip_y,
        base_x + px * ARROW_HALF_WIDTH,
        base_y + py * ARROW_HALF_WIDTH,
        base_x - px * ARROW_HALF_WIDTH,
        base_y - py * ARROW_HALF_WIDTH,
    ))
}

struct EdgeView {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    stroke: &'static str,
    arrow: Option<String>,
}

struct NodeView {
    index: usize,
    kind: NodeKind,
    key: String,
    label: String,
    color: String,
    x: f64,
    y: f64,
    rect_x: f64,
    rect_y: f64,
    label_y: f64,
    stroke_width: &'static str,
}

fn edge_views(graph: &WorldGraph, points: &[LayoutPoint], hovered: Option<usize>) -> Vec<EdgeView> {
    graph
        .edges()
        .iter()
        .map(|edge| {
            let from = points[edge.from];
            let to = points[edge.to];
            let active = hovered == Some(edge.from) || hovered == Some(edge.to);
            EdgeView {
                x1: from.x,
                y1: from.y,
                x2: to.x,
                y2: to.y,
                stroke: if active { EDGE_STROKE_ACTIVE } else { EDGE_STROKE },
                arrow: edge_arrow_points(from, to),
            }
        })
        .collect()
}

fn node_views(graph: &WorldGraph, points: &[LayoutPoint], hovered: Option<usize>) -> Vec<NodeView> {
    graph
        .nodes()
        .iter()
        .zip(points.iter())
        .enumerate()
        .map(|(index, (node, point))| NodeView {
            index,
            kind: node.kind(),
            key: node.key(),
            label: node.label().to_string(),
            color: node.color().to_string(),
            x: point.x,
            y: point.y,
            rect_x: point.x - LOCATION_HALF_WIDTH,
            rect_y: point.y - LOCATION_HALF_HEIGHT,
            label_y: point.y + LABEL_OFFSET,
            stroke_width: if hovered == Some(index) { "3" } else { "0" },
        })
        .collect()
}

#[component]
pub fn RelationshipGraphPanel() -> Element {
    let world = use_world_state();
    let tutorial = use_tutorial_state();

    let mut hovered = use_signal(|| None::<usize>);
    let highlighted = tutorial.highlights(TutorialTarget::WorldViews);

    let world_for_memo = world.clone();
    let layout = use_memo(move || {
        let characters = world_for_memo.characters.read();
        let locations = world_for_memo.locations.read();
        let graph = build_world_graph(&characters, &locations);
        let points = layout_world_graph(&graph, GRAPH_WIDTH, GRAPH_HEIGHT);
        (graph, points)
    });

    let (graph, points) = layout.read().clone();
    let hovered_index = *hovered.read();

    let body = if graph.is_empty() {
        rsx! {
            p {
                class: "list-empty",
                "Generate characters and locations to see their relationships."
            }
        }
    } else {
        let edges = edge_views(&graph, &points, hovered_index);
        let nodes = node_views(&graph, &points, hovered_index);
        rsx! {
            svg {
                class: "graph-canvas",
                view_box: "0 0 1000 600",
                for edge in edges {
                    line {
                        x1: "{edge.x1}",
                        y1: "{edge.y1}",
                        x2: "{edge.x2}",
                        y2: "{edge.y2}",
                        stroke: "{edge.stroke}",
                        stroke_width: "2",
                    }
                    if let Some(arrow) = edge.arrow {
                        polygon {
                            points: "{arrow}",
                            fill: "{edge.stroke}",
                        }
                    }
                }
                for node in nodes {
                    g {
                        key: "{node.key}",
                        onmouseenter: move |_| hovered.set(Some(node.index)),
                        onmouseleave: move |_| hovered.set(None),
                        if node.kind == NodeKind::Character {
                            circle {
                                cx: "{node.x}",
                                cy: "{node.y}",
                                r: "{CHARACTER_RADIUS}",
                                fill: "{node.color}",
                                stroke: "{EDGE_STROKE_ACTIVE}",
                                stroke_width: "{node.stroke_width}",
                            }
                        } else {
                            rect {
                                x: "{node.rect_x}",
                                y: "{node.rect_y}",
                                width: "48",
                                height: "30",
                                rx: "6",
                                fill: "{node.color}",
                                stroke: "{EDGE_STROKE_ACTIVE}",
                                stroke_width: "{node.stroke_width}",
                            }
                        }
                        text {
                            x: "{node.x}",
                            y: "{node.label_y}",
                            text_anchor: "middle",
                            font_size: "12",
                            fill: "#4e342e",
                            "{node.label}"
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section {
            class: if highlighted { "panel tutorial-highlight" } else { "panel" },
            h2 { class: "panel-title", "World Graph" }
            div {
                class: "graph-shell",
                {body}
            }
        }
    }
}
