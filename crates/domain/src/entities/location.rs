//! Location entity - Places that can be pinned to the world map
//!
//! Follows the same Rustic DDD shape as [`Character`](super::Character):
//! private fields, validated newtypes, builder methods for optional fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::LocationId;
use crate::value_objects::{Description, EntityColor, LocationName, MapPoint, DEFAULT_LOCATION_COLOR};

/// A location in the world
///
/// # Invariants
///
/// - `name` is always non-empty and <= 200 characters (enforced by `LocationName`)
/// - `description` is always <= 5000 characters (enforced by `Description`)
/// - `coords` is either absent or a complete in-bounds point (enforced by
///   `MapPoint`); a location without coords is "not placed" and renders no
///   marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    id: LocationId,
    name: LocationName,
    description: Description,
    color: Option<EntityColor>,
    coords: Option<MapPoint>,
    created_at: Option<DateTime<Utc>>,
}

impl Location {
    /// Create a new location view with the given identity and name.
    pub fn new(id: LocationId, name: LocationName) -> Self {
        Self {
            id,
            name,
            description: Description::empty(),
            color: None,
            coords: None,
            created_at: None,
        }
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    /// Returns the location's unique identifier.
    #[inline]
    pub fn id(&self) -> &LocationId {
        &self.id
    }

    /// Returns the location's name.
    #[inline]
    pub fn name(&self) -> &LocationName {
        &self.name
    }

    /// Returns the location's description.
    #[inline]
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the location's explicit color, if one was ever picked.
    #[inline]
    pub fn color(&self) -> Option<&EntityColor> {
        self.color.as_ref()
    }

    /// Returns the color to render this location's marker with, falling back
    /// to the stock marker color.
    pub fn display_color(&self) -> &str {
        self.color
            .as_ref()
            .map(EntityColor::as_str)
            .unwrap_or(DEFAULT_LOCATION_COLOR)
    }

    /// Returns the map placement, if the location has been placed.
    #[inline]
    pub fn coords(&self) -> Option<MapPoint> {
        self.coords
    }

    /// Returns true if the location has been placed on the map.
    #[inline]
    pub fn is_placed(&self) -> bool {
        self.coords.is_some()
    }

    /// Returns the creation timestamp, if the backend supplied one.
    #[inline]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    // =========================================================================
    // Builder Methods (for construction)
    // =========================================================================

    /// Set the location's description.
    pub fn with_description(mut self, description: Description) -> Self {
        self.description = description;
        self
    }

    /// Set the location's display color.
    pub fn with_color(mut self, color: EntityColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the location's map placement.
    pub fn with_coords(mut self, coords: MapPoint) -> Self {
        self.coords = Some(coords);
        self
    }

    /// Set the creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_location(id: &str, name: &str) -> Location {
        Location::new(
            LocationId::new(id).unwrap(),
            LocationName::new(name).unwrap(),
        )
    }

    mod constructor {
        use super::*;

        #[test]
        fn new_location_is_unplaced() {
            let location = create_test_location("l1", "Saltmarsh");
            assert_eq!(location.id().as_str(), "l1");
            assert_eq!(location.name().as_str(), "Saltmarsh");
            assert!(location.description().is_empty());
            assert!(!location.is_placed());
            assert!(location.coords().is_none());
        }
    }

    mod builder {
        use super::*;

        #[test]
        fn with_coords_places_location() {
            let point = MapPoint::new(250.0, 400.0).unwrap();
            let location = create_test_location("l1", "Saltmarsh").with_coords(point);
            assert!(location.is_placed());
            assert_eq!(location.coords(), Some(point));
        }

        #[test]
        fn with_description_sets_text() {
            let location = create_test_location("l1", "Saltmarsh")
                .with_description(Description::new("Quiet docks.").unwrap());
            assert_eq!(location.description().as_str(), "Quiet docks.");
        }
    }

    mod display_color {
        use super::*;

        #[test]
        fn falls_back_to_default() {
            let location = create_test_location("l1", "Saltmarsh");
            assert_eq!(location.display_color(), DEFAULT_LOCATION_COLOR);
        }

        #[test]
        fn uses_explicit_color() {
            let location =
                create_test_location("l1", "Saltmarsh").with_color(EntityColor::new("#aabb00").unwrap());
            assert_eq!(location.display_color(), "#aabb00");
        }
    }
}
