//! Entity DTOs as the backend serializes them
//!
//! Field names match the wire exactly (`_id` included). Everything except
//! the identifier and name is optional: older records predate some fields
//! and the generation model does not always emit every key. Parsing must
//! therefore tolerate missing fields rather than reject whole collections.

use serde::{Deserialize, Serialize};

/// A character record as returned by `/api/characters`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterData {
    /// Backend-issued identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name
    pub name: String,
    /// Role in the world (e.g. "Sailor")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Physical description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_description: Option<String>,
    /// Personality traits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality_traits: Option<String>,
    /// Backstory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backstory: Option<String>,
    /// Display color as `#rrggbb`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Identifier of the assigned location (may dangle after a delete)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// Creation timestamp (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// A location record as returned by `/api/locations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    /// Backend-issued identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name
    pub name: String,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Marker color as `#rrggbb`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Map placement; absent until the location is placed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<CoordsData>,
    /// Creation timestamp (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Planar coordinates as stored by the backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordsData {
    pub x: f64,
    pub y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    mod character_data {
        use super::*;

        #[test]
        fn parses_full_record() {
            let json = r##"{
                "_id": "c1",
                "name": "Jonas",
                "role": "Sailor",
                "physical_description": "Weathered",
                "personality_traits": "Gruff",
                "backstory": "Lost at sea twice.",
                "color": "#ff0000",
                "location_id": "l1",
                "created_at": "2024-05-01T12:00:00Z"
            }"##;
            let data: CharacterData = serde_json::from_str(json).unwrap();
            assert_eq!(data.id, "c1");
            assert_eq!(data.name, "Jonas");
            assert_eq!(data.role.as_deref(), Some("Sailor"));
            assert_eq!(data.location_id.as_deref(), Some("l1"));
        }

        #[test]
        fn parses_minimal_record() {
            let json = r#"{"_id": "c1", "name": "Jonas"}"#;
            let data: CharacterData = serde_json::from_str(json).unwrap();
            assert_eq!(data.id, "c1");
            assert!(data.role.is_none());
            assert!(data.location_id.is_none());
            assert!(data.created_at.is_none());
        }

        #[test]
        fn null_location_id_parses_as_none() {
            let json = r#"{"_id": "c1", "name": "Jonas", "location_id": null}"#;
            let data: CharacterData = serde_json::from_str(json).unwrap();
            assert!(data.location_id.is_none());
        }

        #[test]
        fn serializes_id_as_underscore_id() {
            let data = CharacterData {
                id: "c1".to_string(),
                name: "Jonas".to_string(),
                role: None,
                physical_description: None,
                personality_traits: None,
                backstory: None,
                color: None,
                location_id: None,
                created_at: None,
            };
            let json = serde_json::to_value(&data).unwrap();
            assert_eq!(json["_id"], "c1");
            assert!(json.get("role").is_none());
        }
    }

    mod location_data {
        use super::*;

        #[test]
        fn parses_placed_location() {
            let json = r#"{
                "_id": "l1",
                "name": "Saltmarsh",
                "description": "Quiet docks",
                "coords": {"x": 250, "y": 400}
            }"#;
            let data: LocationData = serde_json::from_str(json).unwrap();
            let coords = data.coords.unwrap();
            assert_eq!(coords.x, 250.0);
            assert_eq!(coords.y, 400.0);
        }

        #[test]
        fn parses_unplaced_location() {
            let json = r#"{"_id": "l1", "name": "Saltmarsh"}"#;
            let data: LocationData = serde_json::from_str(json).unwrap();
            assert!(data.coords.is_none());
        }
    }
}
