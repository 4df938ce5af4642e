//! World Service - Collection fetches
//!
//! Every mutation in the app is followed by a refetch of both collections
//! instead of an incremental patch, so the UI converges on backend state
//! after each action. The two collections load independently; a failure on
//! one side leaves the other list usable.

use lorecrafter_domain::{Character, Location};
use lorecrafter_shared::dto::{CharacterData, LocationData};

use crate::application::model::{characters_from_wire, locations_from_wire};
use crate::application::{Api, ServiceError};

#[derive(Clone)]
pub struct WorldService {
    api: Api,
}

impl WorldService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Fetch the character collection, newest first
    pub async fn characters(&self) -> Result<Vec<Character>, ServiceError> {
        let characters = self.api.get::<Vec<CharacterData>>("/api/characters").await?;
        characters_from_wire(characters)
    }

    /// Fetch the location collection, newest first
    pub async fn locations(&self) -> Result<Vec<Location>, ServiceError> {
        let locations = self.api.get::<Vec<LocationData>>("/api/locations").await?;
        locations_from_wire(locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Api;
    use crate::ports::outbound::{ApiError, MockRawApiPort};
    use serde_json::json;
    use std::sync::Arc;

    fn service_with(mock: MockRawApiPort) -> WorldService {
        WorldService::new(Api::new(Arc::new(mock)))
    }

    #[tokio::test]
    async fn characters_convert_from_wire() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .withf(|path| path == "/api/characters")
            .returning(|_| {
                Ok(json!([
                    {"_id": "c1", "name": "Mira", "location_id": "l1"}
                ]))
            });

        let characters = service_with(mock).characters().await.unwrap();
        assert_eq!(characters.len(), 1);
        assert_eq!(characters[0].name().as_str(), "Mira");
    }

    #[tokio::test]
    async fn characters_sort_newest_first() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .withf(|path| path == "/api/characters")
            .returning(|_| {
                Ok(json!([
                    {"_id": "old", "name": "Old", "created_at": "2024-01-01T00:00:00"},
                    {"_id": "new", "name": "New", "created_at": "2024-06-01T00:00:00"}
                ]))
            });

        let characters = service_with(mock).characters().await.unwrap();
        let ids: Vec<&str> = characters.iter().map(|c| c.id().as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[tokio::test]
    async fn locations_convert_from_wire() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .withf(|path| path == "/api/locations")
            .returning(|_| {
                Ok(json!([
                    {"_id": "l1", "name": "Harbor", "coords": {"x": 300.0, "y": 700.0}}
                ]))
            });

        let locations = service_with(mock).locations().await.unwrap();
        assert_eq!(locations.len(), 1);
        let point = locations[0].coords().unwrap();
        assert_eq!(point.x(), 300.0);
        assert_eq!(point.y(), 700.0);
    }

    #[tokio::test]
    async fn when_unauthorized_then_session_expired() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json().returning(|_| {
            Err(ApiError::Status {
                status: 401,
                message: "Authentication required".to_string(),
            })
        });

        let err = service_with(mock).characters().await.unwrap_err();
        assert!(err.is_session_expired());
    }

    #[tokio::test]
    async fn when_record_is_malformed_then_parse_error() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .withf(|path| path == "/api/characters")
            .returning(|_| Ok(json!([{"_id": "c1", "name": ""}])));

        let err = service_with(mock).characters().await.unwrap_err();
        assert!(matches!(err, ServiceError::ParseError(_)));
    }
}
