//! Character entity - People inhabiting the world
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: All fields are encapsulated
//! - **Newtypes**: `CharacterName` and `Description` for validated strings
//! - **Valid by construction**: `new()` takes pre-validated types
//! - **Builder pattern**: Fluent API for optional fields
//!
//! The backend owns these records; the client holds them as read-only views
//! during a render pass. Mutations go through the API and are observed on
//! the next refresh.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, LocationId};
use crate::value_objects::{CharacterName, Description, EntityColor, DEFAULT_CHARACTER_COLOR};

/// A character in the world
///
/// # Invariants
///
/// - `name` is always non-empty and <= 200 characters (enforced by `CharacterName`)
/// - free-text fields are always <= 5000 characters (enforced by `Description`)
/// - `location_id`, if present, names a location the backend knew at write
///   time; the referenced location may have been deleted since, so lookups
///   must tolerate a miss
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    id: CharacterId,
    name: CharacterName,
    role: Description,
    physical_description: Description,
    personality_traits: Description,
    backstory: Description,
    color: Option<EntityColor>,
    location_id: Option<LocationId>,
    created_at: Option<DateTime<Utc>>,
}

impl Character {
    /// Create a new character view with the given identity and name.
    ///
    /// All free-text fields start empty; use the builder methods to fill
    /// them in.
    pub fn new(id: CharacterId, name: CharacterName) -> Self {
        Self {
            id,
            name,
            role: Description::empty(),
            physical_description: Description::empty(),
            personality_traits: Description::empty(),
            backstory: Description::empty(),
            color: None,
            location_id: None,
            created_at: None,
        }
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    /// Returns the character's unique identifier.
    #[inline]
    pub fn id(&self) -> &CharacterId {
        &self.id
    }

    /// Returns the character's name.
    #[inline]
    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    /// Returns the character's role in the world.
    #[inline]
    pub fn role(&self) -> &Description {
        &self.role
    }

    /// Returns the character's physical description.
    #[inline]
    pub fn physical_description(&self) -> &Description {
        &self.physical_description
    }

    /// Returns the character's personality traits.
    #[inline]
    pub fn personality_traits(&self) -> &Description {
        &self.personality_traits
    }

    /// Returns the character's backstory.
    #[inline]
    pub fn backstory(&self) -> &Description {
        &self.backstory
    }

    /// Returns the character's explicit color, if one was ever picked.
    #[inline]
    pub fn color(&self) -> Option<&EntityColor> {
        self.color.as_ref()
    }

    /// Returns the color to render this character with, falling back to the
    /// stock character color.
    pub fn display_color(&self) -> &str {
        self.color
            .as_ref()
            .map(EntityColor::as_str)
            .unwrap_or(DEFAULT_CHARACTER_COLOR)
    }

    /// Returns the location this character is assigned to, if any.
    #[inline]
    pub fn location_id(&self) -> Option<&LocationId> {
        self.location_id.as_ref()
    }

    /// Returns the creation timestamp, if the backend supplied one.
    #[inline]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    // =========================================================================
    // Builder Methods (for construction)
    // =========================================================================

    /// Set the character's role.
    pub fn with_role(mut self, role: Description) -> Self {
        self.role = role;
        self
    }

    /// Set the character's physical description.
    pub fn with_physical_description(mut self, text: Description) -> Self {
        self.physical_description = text;
        self
    }

    /// Set the character's personality traits.
    pub fn with_personality_traits(mut self, text: Description) -> Self {
        self.personality_traits = text;
        self
    }

    /// Set the character's backstory.
    pub fn with_backstory(mut self, text: Description) -> Self {
        self.backstory = text;
        self
    }

    /// Set the character's display color.
    pub fn with_color(mut self, color: EntityColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the character's assigned location.
    pub fn with_location(mut self, location_id: LocationId) -> Self {
        self.location_id = Some(location_id);
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

    fn create_test_character(id: &str, name: &str) -> Character {
        Character::new(
            CharacterId::new(id).unwrap(),
            CharacterName::new(name).unwrap(),
        )
    }

    mod constructor {
        use super::*;

        #[test]
        fn new_character_has_empty_optional_fields() {
            let character = create_test_character("c1", "Jonas");
            assert_eq!(character.id().as_str(), "c1");
            assert_eq!(character.name().as_str(), "Jonas");
            assert!(character.role().is_empty());
            assert!(character.backstory().is_empty());
            assert!(character.color().is_none());
            assert!(character.location_id().is_none());
            assert!(character.created_at().is_none());
        }
    }

    mod builder {
        use super::*;

        #[test]
        fn with_location_sets_reference() {
            let location_id = LocationId::new("l1").unwrap();
            let character = create_test_character("c1", "Jonas").with_location(location_id.clone());
            assert_eq!(character.location_id(), Some(&location_id));
        }

        #[test]
        fn with_fields_sets_text() {
            let character = create_test_character("c1", "Jonas")
                .with_role(Description::new("Sailor").unwrap())
                .with_backstory(Description::new("Lost at sea twice.").unwrap());
            assert_eq!(character.role().as_str(), "Sailor");
            assert_eq!(character.backstory().as_str(), "Lost at sea twice.");
        }
    }

    mod display_color {
        use super::*;

        #[test]
        fn falls_back_to_default() {
            let character = create_test_character("c1", "Jonas");
            assert_eq!(character.display_color(), DEFAULT_CHARACTER_COLOR);
        }

        #[test]
        fn uses_explicit_color() {
            let character = create_test_character("c1", "Jonas")
                .with_color(EntityColor::new("#ff0000").unwrap());
            assert_eq!(character.display_color(), "#ff0000");
        }
    }
}
