//! LoreCrafter domain layer
//!
//! Validated ids, value objects, and the client-side views of the two
//! backend-owned entities (characters and locations). No I/O and no UI
//! types live here.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{Character, Location};
pub use error::DomainError;
pub use ids::{CharacterId, LocationId};
pub use value_objects::{
    CharacterName, Description, EntityColor, LocationName, MapPoint, PromptText,
    DEFAULT_CHARACTER_COLOR, DEFAULT_LOCATION_COLOR, MAP_EXTENT,
};
