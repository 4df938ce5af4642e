//! Wire-to-domain conversion
//!
//! The shared DTOs carry raw strings exactly as the backend sends them.
//! This module turns them into validated domain entities:
//!
//! - Identity and names are strict: a record the client cannot trust is a
//!   protocol problem and fails the whole list.
//! - Presentation extras (color, coordinates, timestamps) are lenient: a bad
//!   value degrades to "not set" instead of hiding the record.
//!
//! Lists are sorted newest first; records without a creation timestamp sort
//! to the end.

use chrono::{DateTime, NaiveDateTime, Utc};

use lorecrafter_domain::{
    Character, CharacterId, CharacterName, Description, EntityColor, Location, LocationId,
    LocationName, MapPoint,
};
use lorecrafter_shared::dto::{CharacterData, CoordsData, LocationData};

use crate::application::ServiceError;

/// Parse a backend timestamp
///
/// The backend emits naive UTC ISO 8601 strings (no offset); RFC 3339 with
/// an offset is accepted too.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>()
        .ok()
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

fn parse_color(raw: Option<String>, entity_id: &str) -> Option<EntityColor> {
    let raw = raw?;
    match EntityColor::new(&raw) {
        Ok(color) => Some(color),
        Err(e) => {
            tracing::debug!("Ignoring invalid color {:?} on {}: {}", raw, entity_id, e);
            None
        }
    }
}

fn parse_coords(raw: Option<CoordsData>) -> Option<MapPoint> {
    let raw = raw?;
    MapPoint::new(raw.x, raw.y).ok()
}

fn description_field(raw: Option<String>) -> Result<Description, ServiceError> {
    match raw {
        None => Ok(Description::empty()),
        Some(text) => Description::new(text).map_err(|e| ServiceError::ParseError(e.to_string())),
    }
}

/// Convert one character record; strict on id and name
pub fn character_from_data(data: CharacterData) -> Result<Character, ServiceError> {
    let id = CharacterId::new(data.id).map_err(|e| ServiceError::ParseError(e.to_string()))?;
    let name =
        CharacterName::new(data.name).map_err(|e| ServiceError::ParseError(e.to_string()))?;

    let color = parse_color(data.color, id.as_str());
    let location_id = match data.location_id {
        None => None,
        Some(raw) => Some(LocationId::new(raw).map_err(|e| ServiceError::ParseError(e.to_string()))?),
    };
    let created_at = data.created_at.as_deref().and_then(parse_timestamp);

    let mut character = Character::new(id, name)
        .with_role(description_field(data.role)?)
        .with_physical_description(description_field(data.physical_description)?)
        .with_personality_traits(description_field(data.personality_traits)?)
        .with_backstory(description_field(data.backstory)?);
    if let Some(color) = color {
        character = character.with_color(color);
    }
    if let Some(location_id) = location_id {
        character = character.with_location(location_id);
    }
    if let Some(created_at) = created_at {
        character = character.with_created_at(created_at);
    }
    Ok(character)
}

/// Convert one location record; strict on id and name
pub fn location_from_data(data: LocationData) -> Result<Location, ServiceError> {
    let id = LocationId::new(data.id).map_err(|e| ServiceError::ParseError(e.to_string()))?;
    let name = LocationName::new(data.name).map_err(|e| ServiceError::ParseError(e.to_string()))?;

    let color = parse_color(data.color, id.as_str());
    let coords = parse_coords(data.coords);
    let created_at = data.created_at.as_deref().and_then(parse_timestamp);

    let mut location = Location::new(id, name).with_description(description_field(data.description)?);
    if let Some(color) = color {
        location = location.with_color(color);
    }
    if let Some(coords) = coords {
        location = location.with_coords(coords);
    }
    if let Some(created_at) = created_at {
        location = location.with_created_at(created_at);
    }
    Ok(location)
}

/// Newest first; records without a timestamp sort last
pub fn sort_characters_newest_first(characters: &mut [Character]) {
    characters.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
}

/// Newest first; records without a timestamp sort last
pub fn sort_locations_newest_first(locations: &mut [Location]) {
    locations.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
}

/// Convert and sort a full character listing
pub fn characters_from_wire(list: Vec<CharacterData>) -> Result<Vec<Character>, ServiceError> {
    let mut characters = list
        .into_iter()
        .map(character_from_data)
        .collect::<Result<Vec<_>, _>>()?;
    sort_characters_newest_first(&mut characters);
    Ok(characters)
}

/// Convert and sort a full location listing
pub fn locations_from_wire(list: Vec<LocationData>) -> Result<Vec<Location>, ServiceError> {
    let mut locations = list
        .into_iter()
        .map(location_from_data)
        .collect::<Result<Vec<_>, _>>()?;
    sort_locations_newest_first(&mut locations);
    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_character_data(id: &str, name: &str) -> CharacterData {
        CharacterData {
            id: id.to_string(),
            name: name.to_string(),
            role: None,
            physical_description: None,
            personality_traits: None,
            backstory: None,
            color: None,
            location_id: None,
            created_at: None,
        }
    }

    fn create_test_location_data(id: &str, name: &str) -> LocationData {
        LocationData {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            color: None,
            coords: None,
            created_at: None,
        }
    }

    mod timestamps {
        use super::*;

        #[test]
        fn parses_naive_utc_timestamps() {
            let ts = parse_timestamp("2024-05-01T12:30:00.123456");
            assert!(ts.is_some());
        }

        #[test]
        fn parses_rfc3339_timestamps() {
            let ts = parse_timestamp("2024-05-01T12:30:00Z");
            assert!(ts.is_some());
        }

        #[test]
        fn rejects_garbage() {
            assert!(parse_timestamp("yesterday").is_none());
            assert!(parse_timestamp("").is_none());
        }
    }

    mod character_conversion {
        use super::*;

        #[test]
        fn converts_full_record() {
            let mut data = create_test_character_data("c1", "Mira Thorn");
            data.role = Some("Smuggler".to_string());
            data.backstory = Some("Raised on the docks.".to_string());
            data.color = Some("#AABBCC".to_string());
            data.location_id = Some("l1".to_string());
            data.created_at = Some("2024-05-01T12:30:00.123456".to_string());

            let character = character_from_data(data).unwrap();
            assert_eq!(character.id().as_str(), "c1");
            assert_eq!(character.name().as_str(), "Mira Thorn");
            assert_eq!(character.role().as_str(), "Smuggler");
            assert_eq!(character.display_color(), "#aabbcc");
            assert_eq!(character.location_id().map(|l| l.as_str()), Some("l1"));
            assert!(character.created_at().is_some());
        }

        #[test]
        fn minimal_record_gets_empty_fields() {
            let character =
                character_from_data(create_test_character_data("c1", "Mira")).unwrap();
            assert!(character.role().is_empty());
            assert!(character.backstory().is_empty());
            assert!(character.color().is_none());
            assert!(character.location_id().is_none());
            assert!(character.created_at().is_none());
        }

        #[test]
        fn invalid_color_degrades_to_none() {
            let mut data = create_test_character_data("c1", "Mira");
            data.color = Some("blue".to_string());
            let character = character_from_data(data).unwrap();
            assert!(character.color().is_none());
        }

        #[test]
        fn invalid_timestamp_degrades_to_none() {
            let mut data = create_test_character_data("c1", "Mira");
            data.created_at = Some("not-a-date".to_string());
            let character = character_from_data(data).unwrap();
            assert!(character.created_at().is_none());
        }

        #[test]
        fn empty_name_is_rejected() {
            let data = create_test_character_data("c1", "   ");
            let err = character_from_data(data).unwrap_err();
            assert!(matches!(err, ServiceError::ParseError(_)));
        }

        #[test]
        fn empty_id_is_rejected() {
            let data = create_test_character_data("", "Mira");
            assert!(character_from_data(data).is_err());
        }
    }

    mod location_conversion {
        use super::*;

        #[test]
        fn converts_coords() {
            let mut data = create_test_location_data("l1", "Harbor");
            data.coords = Some(CoordsData { x: 120.0, y: 640.5 });
            let location = location_from_data(data).unwrap();
            let point = location.coords().unwrap();
            assert_eq!(point.x(), 120.0);
            assert_eq!(point.y(), 640.5);
            assert!(location.is_placed());
        }

        #[test]
        fn out_of_bounds_coords_degrade_to_unplaced() {
            let mut data = create_test_location_data("l1", "Harbor");
            data.coords = Some(CoordsData { x: -5.0, y: 640.5 });
            let location = location_from_data(data).unwrap();
            assert!(location.coords().is_none());
            assert!(!location.is_placed());
        }

        #[test]
        fn non_finite_coords_degrade_to_unplaced() {
            let mut data = create_test_location_data("l1", "Harbor");
            data.coords = Some(CoordsData {
                x: f64::NAN,
                y: 10.0,
            });
            let location = location_from_data(data).unwrap();
            assert!(location.coords().is_none());
        }
    }

    mod sorting {
        use super::*;

        #[test]
        fn newest_first_with_missing_timestamps_last() {
            let mut old = create_test_character_data("old", "Old");
            old.created_at = Some("2024-01-01T00:00:00".to_string());
            let mut newer = create_test_character_data("new", "New");
            newer.created_at = Some("2024-06-01T00:00:00".to_string());
            let undated = create_test_character_data("undated", "Undated");

            let characters = characters_from_wire(vec![old, undated, newer]).unwrap();
            let ids: Vec<&str> = characters.iter().map(|c| c.id().as_str()).collect();
            assert_eq!(ids, vec!["new", "old", "undated"]);
        }

        #[test]
        fn locations_sort_the_same_way() {
            let mut a = create_test_location_data("a", "A");
            a.created_at = Some("2024-01-02T00:00:00".to_string());
            let mut b = create_test_location_data("b", "B");
            b.created_at = Some("2024-01-03T00:00:00".to_string());

            let locations = locations_from_wire(vec![a, b]).unwrap();
            let ids: Vec<&str> = locations.iter().map(|l| l.id().as_str()).collect();
            assert_eq!(ids, vec!["b", "a"]);
        }

        #[test]
        fn one_bad_record_fails_the_list() {
            let good = create_test_character_data("c1", "Mira");
            let bad = create_test_character_data("c2", "");
            assert!(characters_from_wire(vec![good, bad]).is_err());
        }
    }
}
