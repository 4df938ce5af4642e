//! Request payloads sent by the client

use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate/{character|location}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratePayload {
    /// World prompt the generation model should riff on
    pub prompt: String,
}

impl GeneratePayload {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Body of `PUT /api/characters/{id}/link_location`
///
/// The backend rejects a missing or empty `location_id`; there is no
/// unassign variant of this call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkLocationPayload {
    pub location_id: String,
}

impl LinkLocationPayload {
    pub fn new(location_id: impl Into<String>) -> Self {
        Self {
            location_id: location_id.into(),
        }
    }
}

/// Body of `PUT /api/locations/{id}/set_coords`
///
/// Both axes are required together; the backend rejects a lone coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetCoordsPayload {
    pub x: f64,
    pub y: f64,
}

impl SetCoordsPayload {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Body of `PUT /api/{characters|locations}/{id}/color`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPayload {
    /// `#rrggbb` hex color
    pub color: String,
}

impl ColorPayload {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_payload_shape() {
        let payload = GeneratePayload::new("A grizzled sailor");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"prompt": "A grizzled sailor"}));
    }

    #[test]
    fn link_location_carries_id() {
        let payload = LinkLocationPayload::new("l1");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"location_id": "l1"}));
    }

    #[test]
    fn set_coords_payload_shape() {
        let payload = SetCoordsPayload::new(250.0, 400.0);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["x"], 250.0);
        assert_eq!(json["y"], 400.0);
    }

    #[test]
    fn color_payload_shape() {
        let payload = ColorPayload::new("#58a6ff");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"color": "#58a6ff"}));
    }
}
