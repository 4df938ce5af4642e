//! Workshop UI components.
//!
//! One module per panel of the single-page workshop, plus shared chrome
//! under [`common`].

pub mod common;

mod character_card;
pub use character_card::CharactersPanel;

mod export_panel;
pub use export_panel::ExportPanel;

mod generator_panel;
pub use generator_panel::GeneratorPanel;

mod header;
pub use header::Header;

mod location_card;
pub use location_card::LocationsPanel;

mod map_settings;
pub use map_settings::MapSettingsPanel;

mod relationship_graph;
pub use relationship_graph::RelationshipGraphPanel;

mod tutorial_modal;
pub use tutorial_modal::TutorialModal;

mod world_map;
pub use world_map::WorldMapPanel;
