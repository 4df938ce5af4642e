//! Generation Service - Prompt-driven content creation
//!
//! Wraps the backend generation endpoints. The prompt is validated before any
//! request goes out, so an empty prompt never reaches the network.

use lorecrafter_domain::PromptText;
use lorecrafter_shared::dto::{CharacterData, LocationData};
use lorecrafter_shared::requests::GeneratePayload;

use crate::application::{Api, ServiceError};

#[derive(Clone)]
pub struct GenerationService {
    api: Api,
}

impl GenerationService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Generate a new character from a world prompt
    ///
    /// Returns the created record as the backend sent it; callers refresh the
    /// full snapshot afterwards rather than patching it in.
    pub async fn generate_character(
        &self,
        prompt: &str,
    ) -> Result<CharacterData, ServiceError> {
        let prompt = PromptText::new(prompt).map_err(|e| ServiceError::Validation(e.to_string()))?;
        self.api
            .post("/api/generate/character", &GeneratePayload::new(prompt))
            .await
    }

    /// Generate a new location from a world prompt
    pub async fn generate_location(&self, prompt: &str) -> Result<LocationData, ServiceError> {
        let prompt = PromptText::new(prompt).map_err(|e| ServiceError::Validation(e.to_string()))?;
        self.api
            .post("/api/generate/location", &GeneratePayload::new(prompt))
            .await
    }
}
