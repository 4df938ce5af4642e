//! Character Service - Mutations on existing characters
//!
//! Assignment, recolor, and delete. Each call targets one character; callers
//! run a full snapshot refresh afterwards.

use lorecrafter_domain::{CharacterId, EntityColor, LocationId};
use lorecrafter_shared::requests::{ColorPayload, LinkLocationPayload};
use lorecrafter_shared::responses::MessageResponse;

use crate::application::{Api, ServiceError};

#[derive(Clone)]
pub struct CharacterService {
    api: Api,
}

impl CharacterService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Link a character to a location
    pub async fn assign_location(
        &self,
        character: &CharacterId,
        location: &LocationId,
    ) -> Result<(), ServiceError> {
        let _: MessageResponse = self
            .api
            .put(
                &format!("/api/characters/{}/link_location", character),
                &LinkLocationPayload::new(location.as_str()),
            )
            .await?;
        Ok(())
    }

    /// Set a character's display color
    pub async fn set_color(
        &self,
        character: &CharacterId,
        color: &EntityColor,
    ) -> Result<(), ServiceError> {
        let _: MessageResponse = self
            .api
            .put(
                &format!("/api/characters/{}/color", character),
                &ColorPayload::new(color.as_str()),
            )
            .await?;
        Ok(())
    }

    /// Permanently delete a character
    pub async fn delete(&self, character: &CharacterId) -> Result<(), ServiceError> {
        let _: MessageResponse = self
            .api
            .delete(&format!("/api/characters/{}", character))
            .await?;
        Ok(())
    }
}
