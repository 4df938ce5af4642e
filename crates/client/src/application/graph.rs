//! World graph construction and layout
//!
//! The relationship graph is derived entirely on the client: every character
//! and location becomes a node, and each character with a valid location
//! assignment contributes one edge. An assignment pointing at a location that
//! is not in the current listing produces no edge.
//!
//! Layout is a small force-directed simulation (Fruchterman-Reingold style)
//! seeded with a fixed RNG so the same world always lays out the same way.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashMap;

use lorecrafter_domain::{Character, Location};

/// What a graph node represents, used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Character,
    Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    kind: NodeKind,
    id: String,
    label: String,
    color: String,
}

impl GraphNode {
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Stable key unique across both node kinds
    pub fn key(&self) -> String {
        match self.kind {
            NodeKind::Character => format!("character:{}", self.id),
            NodeKind::Location => format!("location:{}", self.id),
        }
    }
}

/// Edge between node indices in `WorldGraph::nodes`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphEdge {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

impl WorldGraph {
    #[inline]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    #[inline]
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Build the relationship graph for the current world
///
/// Character nodes come first, then location nodes, so edge indices stay
/// stable for a given input order.
pub fn build_world_graph(characters: &[Character], locations: &[Location]) -> WorldGraph {
    let mut nodes = Vec::with_capacity(characters.len() + locations.len());

    for character in characters {
        nodes.push(GraphNode {
            kind: NodeKind::Character,
            id: character.id().as_str().to_string(),
            label: character.name().as_str().to_string(),
            color: character.display_color().to_string(),
        });
    }

    let location_index: HashMap<&str, usize> = locations
        .iter()
        .enumerate()
        .map(|(i, location)| (location.id().as_str(), characters.len() + i))
        .collect();

    for location in locations {
        nodes.push(GraphNode {
            kind: NodeKind::Location,
            id: location.id().as_str().to_string(),
            label: location.name().as_str().to_string(),
            color: location.display_color().to_string(),
        });
    }

    let mut edges = Vec::new();
    for (i, character) in characters.iter().enumerate() {
        let Some(location_id) = character.location_id() else {
            continue;
        };
        // Assignments to locations missing from the listing draw no edge
        if let Some(&j) = location_index.get(location_id.as_str()) {
            edges.push(GraphEdge { from: i, to: j });
        }
    }

    WorldGraph { nodes, edges }
}

/// Node position produced by the layout, in viewbox coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

const LAYOUT_SEED: u64 = 0x10_7e_c4_af;
const LAYOUT_ITERATIONS: usize = 300;
const LAYOUT_PADDING: f64 = 40.0;

/// Lay out the graph inside a `width` x `height` viewbox
///
/// Deterministic: the initial scatter uses a fixed seed, so repeated calls
/// with the same graph yield identical positions.
pub fn layout_world_graph(graph: &WorldGraph, width: f64, height: f64) -> Vec<LayoutPoint> {
    let n = graph.nodes.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![LayoutPoint {
            x: width / 2.0,
            y: height / 2.0,
        }];
    }

    let mut rng = StdRng::seed_from_u64(LAYOUT_SEED);
    let mut positions: Vec<LayoutPoint> = (0..n)
        .map(|_| LayoutPoint {
            x: LAYOUT_PADDING + rng.gen::<f64>() * (width - 2.0 * LAYOUT_PADDING),
            y: LAYOUT_PADDING + rng.gen::<f64>() * (height - 2.0 * LAYOUT_PADDING),
        })
        .collect();

    // Ideal pairwise distance for the available area
    let k = (width * height / n as f64).sqrt();
    let mut temperature = width / 10.0;
    let cooling = temperature / (LAYOUT_ITERATIONS as f64 + 1.0);

    let mut displacement = vec![(0.0_f64, 0.0_f64); n];

    for _ in 0..LAYOUT_ITERATIONS {
        for d in displacement.iter_mut() {
            *d = (0.0, 0.0);
        }

        // Repulsion between every pair, applied symmetrically
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = positions[i].x - positions[j].x;
                let dy = positions[i].y - positions[j].y;
                let dist = (dx * dx + dy * dy).sqrt().max(0.01);
                let force = k * k / dist;
                let (fx, fy) = (dx / dist * force, dy / dist * force);
                displacement[i].0 += fx;
                displacement[i].1 += fy;
                displacement[j].0 -= fx;
                displacement[j].1 -= fy;
            }
        }

        // Attraction along edges
        for edge in &graph.edges {
            let dx = positions[edge.from].x - positions[edge.to].x;
            let dy = positions[edge.from].y - positions[edge.to].y;
            let dist = (dx * dx + dy * dy).sqrt().max(0.01);
            let force = dist * dist / k;
            let (fx, fy) = (dx / dist * force, dy / dist * force);
            displacement[edge.from].0 -= fx;
            displacement[edge.from].1 -= fy;
            displacement[edge.to].0 += fx;
            displacement[edge.to].1 += fy;
        }

        // Move by at most the current temperature, then keep inside the box
        for (pos, &(dx, dy)) in positions.iter_mut().zip(displacement.iter()) {
            let len = (dx * dx + dy * dy).sqrt();
            if len > 0.0 {
                let capped = len.min(temperature);
                pos.x += dx / len * capped;
                pos.y += dy / len * capped;
            }
            pos.x = pos.x.clamp(LAYOUT_PADDING, width - LAYOUT_PADDING);
            pos.y = pos.y.clamp(LAYOUT_PADDING, height - LAYOUT_PADDING);
        }

        temperature -= cooling;
        if temperature <= 0.0 {
            break;
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use lorecrafter_domain::{
        Character, CharacterId, CharacterName, EntityColor, Location, LocationId, LocationName,
    };

    fn create_test_character(id: &str, name: &str) -> Character {
        Character::new(
            CharacterId::new(id).unwrap(),
            CharacterName::new(name).unwrap(),
        )
    }

    fn create_test_location(id: &str, name: &str) -> Location {
        Location::new(
            LocationId::new(id).unwrap(),
            LocationName::new(name).unwrap(),
        )
    }

    mod build {
        use super::*;

        #[test]
        fn characters_come_before_locations() {
            let characters = vec![create_test_character("c1", "Mira")];
            let locations = vec![create_test_location("l1", "Harbor")];
            let graph = build_world_graph(&characters, &locations);

            assert_eq!(graph.nodes().len(), 2);
            assert_eq!(graph.nodes()[0].kind(), NodeKind::Character);
            assert_eq!(graph.nodes()[0].label(), "Mira");
            assert_eq!(graph.nodes()[1].kind(), NodeKind::Location);
            assert_eq!(graph.nodes()[1].label(), "Harbor");
        }

        #[test]
        fn assignment_produces_an_edge() {
            let characters = vec![create_test_character("c1", "Mira")
                .with_location(LocationId::new("l1").unwrap())];
            let locations = vec![create_test_location("l1", "Harbor")];
            let graph = build_world_graph(&characters, &locations);

            assert_eq!(graph.edges(), &[GraphEdge { from: 0, to: 1 }]);
        }

        #[test]
        fn dangling_assignment_produces_no_edge() {
            let characters = vec![create_test_character("c1", "Mira")
                .with_location(LocationId::new("gone").unwrap())];
            let locations = vec![create_test_location("l1", "Harbor")];
            let graph = build_world_graph(&characters, &locations);

            assert!(graph.edges().is_empty());
            assert_eq!(graph.nodes().len(), 2);
        }

        #[test]
        fn node_colors_fall_back_to_kind_defaults() {
            let characters = vec![create_test_character("c1", "Mira")];
            let locations = vec![create_test_location("l1", "Harbor")
                .with_color(EntityColor::new("#112233").unwrap())];
            let graph = build_world_graph(&characters, &locations);

            assert_eq!(graph.nodes()[0].color(), lorecrafter_domain::DEFAULT_CHARACTER_COLOR);
            assert_eq!(graph.nodes()[1].color(), "#112233");
        }

        #[test]
        fn keys_are_unique_across_kinds() {
            let characters = vec![create_test_character("same", "Mira")];
            let locations = vec![create_test_location("same", "Harbor")];
            let graph = build_world_graph(&characters, &locations);

            assert_ne!(graph.nodes()[0].key(), graph.nodes()[1].key());
        }

        #[test]
        fn empty_world_builds_empty_graph() {
            let graph = build_world_graph(&[], &[]);
            assert!(graph.is_empty());
            assert!(graph.edges().is_empty());
        }
    }

    mod layout {
        use super::*;

        fn sample_graph(with_edge: bool) -> WorldGraph {
            let characters = if with_edge {
                vec![create_test_character("c1", "Mira")
                    .with_location(LocationId::new("l1").unwrap())]
            } else {
                vec![create_test_character("c1", "Mira")]
            };
            let locations = vec![create_test_location("l1", "Harbor")];
            build_world_graph(&characters, &locations)
        }

        fn distance(a: LayoutPoint, b: LayoutPoint) -> f64 {
            ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
        }

        #[test]
        fn empty_graph_lays_out_empty() {
            assert!(layout_world_graph(&WorldGraph::default(), 1000.0, 600.0).is_empty());
        }

        #[test]
        fn single_node_is_centered() {
            let graph = build_world_graph(&[create_test_character("c1", "Mira")], &[]);
            let points = layout_world_graph(&graph, 1000.0, 600.0);
            assert_eq!(points, vec![LayoutPoint { x: 500.0, y: 300.0 }]);
        }

        #[test]
        fn layout_is_deterministic() {
            let graph = sample_graph(true);
            let a = layout_world_graph(&graph, 1000.0, 600.0);
            let b = layout_world_graph(&graph, 1000.0, 600.0);
            assert_eq!(a, b);
        }

        #[test]
        fn all_points_stay_inside_the_viewbox() {
            let characters: Vec<Character> = (0..8)
                .map(|i| create_test_character(&format!("c{}", i), &format!("C{}", i)))
                .collect();
            let locations: Vec<Location> = (0..4)
                .map(|i| create_test_location(&format!("l{}", i), &format!("L{}", i)))
                .collect();
            let graph = build_world_graph(&characters, &locations);

            for point in layout_world_graph(&graph, 1000.0, 600.0) {
                assert!(point.x >= 0.0 && point.x <= 1000.0);
                assert!(point.y >= 0.0 && point.y <= 600.0);
            }
        }

        #[test]
        fn connected_nodes_end_up_closer_than_unconnected_ones() {
            // Same node count and seed, so both runs start from the same
            // scatter; only the edge attraction differs.
            let connected = layout_world_graph(&sample_graph(true), 1000.0, 600.0);
            let apart = layout_world_graph(&sample_graph(false), 1000.0, 600.0);

            assert!(distance(connected[0], connected[1]) < distance(apart[0], apart[1]));
        }
    }
}
