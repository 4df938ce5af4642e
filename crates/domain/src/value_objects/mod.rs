//! Value objects - Immutable objects defined by their attributes

mod color;
mod map_point;
mod names;

pub use color::{EntityColor, DEFAULT_CHARACTER_COLOR, DEFAULT_LOCATION_COLOR};
pub use map_point::{MapPoint, MAP_EXTENT};
pub use names::{CharacterName, Description, LocationName, PromptText};
