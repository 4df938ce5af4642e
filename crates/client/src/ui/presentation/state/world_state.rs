//! World collections state
//!
//! Holds the character and location listings the workshop renders. Every
//! mutation elsewhere in the app finishes with a full refetch that lands
//! here. Fetch errors are tracked per collection, so a failing character
//! listing does not blank the locations panel (and vice versa).

use dioxus::prelude::*;

use lorecrafter_domain::{Character, Location, LocationId};

/// Shown in place of the character listing when its fetch fails
pub const CHARACTERS_LOAD_ERROR: &str = "Failed to load characters. Is the API running?";
/// Shown in place of the location listing when its fetch fails
pub const LOCATIONS_LOAD_ERROR: &str = "Failed to load locations. Check API connection.";

/// World collections for the workshop view
#[derive(Clone)]
pub struct WorldState {
    /// Characters, newest first
    pub characters: Signal<Vec<Character>>,
    /// Locations, newest first
    pub locations: Signal<Vec<Location>>,
    /// Error shown in place of the character listing
    pub characters_error: Signal<Option<String>>,
    /// Error shown in place of the location listing
    pub locations_error: Signal<Option<String>>,
    /// True while a refresh is in flight
    pub loading: Signal<bool>,
    /// True while a character generation request is in flight
    pub generating_character: Signal<bool>,
    /// True while a location generation request is in flight
    pub generating_location: Signal<bool>,
}

impl WorldState {
    /// Create a new WorldState with empty collections
    pub fn new() -> Self {
        Self {
            characters: Signal::new(Vec::new()),
            locations: Signal::new(Vec::new()),
            characters_error: Signal::new(None),
            locations_error: Signal::new(None),
            loading: Signal::new(false),
            generating_character: Signal::new(false),
            generating_location: Signal::new(false),
        }
    }

    /// Replace the character listing and clear its error
    pub fn set_characters(&mut self, characters: Vec<Character>) {
        self.characters.set(characters);
        self.characters_error.set(None);
    }

    /// Replace the character listing with an error message
    pub fn set_characters_error(&mut self, message: impl Into<String>) {
        self.characters.write().clear();
        self.characters_error.set(Some(message.into()));
    }

    /// Replace the location listing and clear its error
    pub fn set_locations(&mut self, locations: Vec<Location>) {
        self.locations.set(locations);
        self.locations_error.set(None);
    }

    /// Replace the location listing with an error message
    pub fn set_locations_error(&mut self, message: impl Into<String>) {
        self.locations.write().clear();
        self.locations_error.set(Some(message.into()));
    }

    /// Mark a refresh as started or finished
    pub fn set_loading(&mut self, loading: bool) {
        self.loading.set(loading);
    }

    /// Mark a character generation request as started or finished
    pub fn set_generating_character(&mut self, generating: bool) {
        self.generating_character.set(generating);
    }

    /// Mark a location generation request as started or finished
    pub fn set_generating_location(&mut self, generating: bool) {
        self.generating_location.set(generating);
    }

    /// Name of a location in the current listing
    ///
    /// Returns None when the id refers to a location that has been deleted
    /// since the assignment was made.
    pub fn location_name(&self, id: &LocationId) -> Option<String> {
        location_label(&self.locations.read(), id)
    }

    /// `(id, name)` pairs for the assignment dropdown
    pub fn location_options(&self) -> Vec<(LocationId, String)> {
        self.locations
            .read()
            .iter()
            .map(|location| (location.id().clone(), location.name().as_str().to_string()))
            .collect()
    }

    /// Drop everything (e.g. when switching servers)
    pub fn clear(&mut self) {
        self.characters.write().clear();
        self.locations.write().clear();
        self.characters_error.set(None);
        self.locations_error.set(None);
        self.loading.set(false);
        self.generating_character.set(false);
        self.generating_location.set(false);
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up a location's display name in a listing
pub fn location_label(locations: &[Location], id: &LocationId) -> Option<String> {
    locations
        .iter()
        .find(|location| location.id() == id)
        .map(|location| location.name().as_str().to_string())
}
