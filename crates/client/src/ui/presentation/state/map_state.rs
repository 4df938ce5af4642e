//! Map display and placement state
//!
//! The map image choice survives restarts via platform storage; placement
//! mode is transient and armed from a location card.

use dioxus::prelude::*;

use lorecrafter_domain::LocationId;

use crate::ports::outbound::{storage_keys, PlatformPort};

/// Stock map shown until the user configures their own
pub const DEFAULT_MAP_IMAGE_URL: &str = "https://i.imgur.com/gD5A8H5.jpeg";

/// Stand-in shown when the configured image fails to load
pub const FALLBACK_MAP_IMAGE_URL: &str =
    "https://placehold.co/1000x1000/fdf6e3/5d4037?text=Map+Not+Found";

/// Whether the next map click should place a location
#[derive(Clone, Debug, PartialEq)]
pub enum PlacementMode {
    Idle,
    /// Coordinates from the next map click go to this location
    Armed(LocationId),
}

/// Map state shared between the map panel, its settings card, and the
/// location cards that arm placement
#[derive(Clone)]
pub struct MapState {
    /// Configured map image: a URL or a data URL from an upload
    pub image_url: Signal<String>,
    /// Set when the configured image failed to load
    pub image_failed: Signal<bool>,
    /// Placement mode for click-to-place
    pub placement: Signal<PlacementMode>,
}

impl MapState {
    /// Create a new MapState showing the stock map
    pub fn new() -> Self {
        Self {
            image_url: Signal::new(DEFAULT_MAP_IMAGE_URL.to_string()),
            image_failed: Signal::new(false),
            placement: Signal::new(PlacementMode::Idle),
        }
    }

    /// Load the image choice persisted by a previous session, if any
    pub fn restore(&mut self, platform: &dyn PlatformPort) {
        if let Some(url) = platform.storage_load(storage_keys::MAP_IMAGE_URL) {
            self.image_failed.set(false);
            self.image_url.set(url);
        }
    }

    /// Switch the map image and remember the choice
    pub fn set_image(&mut self, url: impl Into<String>, platform: &dyn PlatformPort) {
        let url = url.into();
        platform.storage_save(storage_keys::MAP_IMAGE_URL, &url);
        self.image_failed.set(false);
        self.image_url.set(url);
    }

    /// Back to the stock map
    pub fn reset_image(&mut self, platform: &dyn PlatformPort) {
        self.set_image(DEFAULT_MAP_IMAGE_URL, platform);
    }

    /// Record that the configured image did not load
    pub fn mark_image_failed(&mut self) {
        self.image_failed.set(true);
    }

    /// URL the map `img` element should actually show
    pub fn display_image_url(&self) -> String {
        if *self.image_failed.read() {
            FALLBACK_MAP_IMAGE_URL.to_string()
        } else {
            self.image_url.read().clone()
        }
    }

    /// Arm placement mode for a location
    pub fn arm_placement(&mut self, location: LocationId) {
        self.placement.set(PlacementMode::Armed(location));
    }

    /// Leave placement mode
    pub fn disarm(&mut self) {
        self.placement.set(PlacementMode::Idle);
    }

    /// The location waiting for a map click, if any
    pub fn armed_location(&self) -> Option<LocationId> {
        match &*self.placement.read() {
            PlacementMode::Armed(id) => Some(id.clone()),
            PlacementMode::Idle => None,
        }
    }
}

impl Default for MapState {
    fn default() -> Self {
        Self::new()
    }
}
