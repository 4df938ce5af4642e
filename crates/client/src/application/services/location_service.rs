//! Location Service - Mutations on existing locations
//!
//! Coordinate placement, recolor, and delete. Deleting a location the backend
//! still has characters pointing at leaves those characters unassigned on the
//! next refresh; nothing here cascades.

use lorecrafter_domain::{EntityColor, LocationId, MapPoint};
use lorecrafter_shared::requests::{ColorPayload, SetCoordsPayload};
use lorecrafter_shared::responses::MessageResponse;

use crate::application::{Api, ServiceError};

#[derive(Clone)]
pub struct LocationService {
    api: Api,
}

impl LocationService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Store map coordinates for a location
    pub async fn set_coords(
        &self,
        location: &LocationId,
        point: MapPoint,
    ) -> Result<(), ServiceError> {
        let _: MessageResponse = self
            .api
            .put(
                &format!("/api/locations/{}/set_coords", location),
                &SetCoordsPayload::new(point.x(), point.y()),
            )
            .await?;
        Ok(())
    }

    /// Set a location's display color
    pub async fn set_color(
        &self,
        location: &LocationId,
        color: &EntityColor,
    ) -> Result<(), ServiceError> {
        let _: MessageResponse = self
            .api
            .put(
                &format!("/api/locations/{}/color", location),
                &ColorPayload::new(color.as_str()),
            )
            .await?;
        Ok(())
    }

    /// Permanently delete a location
    pub async fn delete(&self, location: &LocationId) -> Result<(), ServiceError> {
        let _: MessageResponse = self
            .api
            .delete(&format!("/api/locations/{}", location))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Api;
    use crate::ports::outbound::{ApiError, MockRawApiPort};
    use serde_json::json;
    use std::sync::Arc;

    fn service_with(mock: MockRawApiPort) -> LocationService {
        LocationService::new(Api::new(Arc::new(mock)))
    }

    fn location_id(raw: &str) -> LocationId {
        LocationId::new(raw).unwrap()
    }

    #[tokio::test]
    async fn set_coords_puts_both_axes() {
        let mut mock = MockRawApiPort::new();
        mock.expect_put_json()
            .withf(|path, body| {
                path == "/api/locations/l1/set_coords"
                    && body["x"] == 250.0
                    && body["y"] == 400.0
            })
            .returning(|_, _| Ok(json!({"message": "Location coordinates updated successfully"})));

        service_with(mock)
            .set_coords(&location_id("l1"), MapPoint::new(250.0, 400.0).unwrap())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn set_color_puts_hex_value() {
        let mut mock = MockRawApiPort::new();
        mock.expect_put_json()
            .withf(|path, body| path == "/api/locations/l1/color" && body["color"] == "#112233")
            .returning(|_, _| Ok(json!({"message": "Location updated successfully"})));

        service_with(mock)
            .set_color(&location_id("l1"), &EntityColor::new("#112233").unwrap())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_targets_the_location_resource() {
        let mut mock = MockRawApiPort::new();
        mock.expect_delete_json()
            .withf(|path| path == "/api/locations/l1")
            .returning(|_| Ok(json!({"message": "Location deleted successfully"})));

        service_with(mock).delete(&location_id("l1")).await.unwrap();
    }

    #[tokio::test]
    async fn transport_failure_surfaces_as_request_error() {
        let mut mock = MockRawApiPort::new();
        mock.expect_put_json()
            .returning(|_, _| Err(ApiError::RequestFailed("connection reset".to_string())));

        let err = service_with(mock)
            .set_coords(&location_id("l1"), MapPoint::new(1.0, 2.0).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Request(_)));
    }
}
