//! Export Service - World downloads
//!
//! Both exports fetch fresh data at click time instead of reusing whatever
//! the UI currently shows. JSON passes the backend snapshot through verbatim
//! (pretty-printed); PDF converts to domain entities and runs the report
//! planner.

use lorecrafter_shared::dto::{CharacterData, LocationData};

use crate::application::model::{characters_from_wire, locations_from_wire};
use crate::application::report::{plan_world_report, render_pdf, REPORT_FILE_NAME};
use crate::application::{Api, ServiceError};

pub const JSON_EXPORT_FILE_NAME: &str = "lorecrafter-world.json";

/// A finished export, ready to hand to the platform's file saver
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
pub struct ExportService {
    api: Api,
}

impl ExportService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Download the backend's world snapshot as pretty-printed JSON
    pub async fn export_json(&self) -> Result<ExportFile, ServiceError> {
        let snapshot: serde_json::Value = self.api.get("/api/export/json").await?;
        let bytes = serde_json::to_vec_pretty(&snapshot)
            .map_err(|e| ServiceError::Export(e.to_string()))?;
        Ok(ExportFile {
            file_name: JSON_EXPORT_FILE_NAME.to_string(),
            mime: "application/json".to_string(),
            bytes,
        })
    }

    /// Build the paginated PDF report from a fresh fetch of both collections
    pub async fn export_pdf(&self) -> Result<ExportFile, ServiceError> {
        let (characters, locations) = futures_util::future::try_join(
            self.api.get::<Vec<CharacterData>>("/api/characters"),
            self.api.get::<Vec<LocationData>>("/api/locations"),
        )
        .await?;

        let characters = characters_from_wire(characters)?;
        let locations = locations_from_wire(locations)?;
        let plan = plan_world_report(&characters, &locations);
        let bytes = render_pdf(&plan)?;

        Ok(ExportFile {
            file_name: REPORT_FILE_NAME.to_string(),
            mime: "application/pdf".to_string(),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Api;
    use crate::ports::outbound::{ApiError, MockRawApiPort};
    use serde_json::json;
    use std::sync::Arc;

    fn service_with(mock: MockRawApiPort) -> ExportService {
        ExportService::new(Api::new(Arc::new(mock)))
    }

    #[tokio::test]
    async fn json_export_passes_the_snapshot_through() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .withf(|path| path == "/api/export/json")
            .returning(|_| {
                Ok(json!({
                    "characters": [{"_id": "c1", "name": "Mira"}],
                    "locations": []
                }))
            });

        let export = service_with(mock).export_json().await.unwrap();
        assert_eq!(export.file_name, "lorecrafter-world.json");
        assert_eq!(export.mime, "application/json");

        let round_trip: serde_json::Value = serde_json::from_slice(&export.bytes).unwrap();
        assert_eq!(round_trip["characters"][0]["name"], "Mira");
    }

    #[tokio::test]
    async fn pdf_export_fetches_both_collections_fresh() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .withf(|path| path == "/api/characters")
            .times(1)
            .returning(|_| Ok(json!([{"_id": "c1", "name": "Mira"}])));
        mock.expect_get_json()
            .withf(|path| path == "/api/locations")
            .times(1)
            .returning(|_| Ok(json!([{"_id": "l1", "name": "Harbor"}])));

        let export = service_with(mock).export_pdf().await.unwrap();
        assert_eq!(export.file_name, "lorecrafter-world.pdf");
        assert_eq!(export.mime, "application/pdf");
        assert_eq!(&export.bytes[..5], b"%PDF-");
    }

    #[tokio::test]
    async fn when_snapshot_fetch_fails_then_no_file_is_produced() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .returning(|_| Err(ApiError::RequestFailed("connection refused".to_string())));

        let err = service_with(mock).export_json().await.unwrap_err();
        assert!(matches!(err, ServiceError::Request(_)));
    }
}
