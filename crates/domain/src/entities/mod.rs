//! Domain entities - Core business objects with identity

mod character;
mod location;

pub use character::Character;
pub use location::Location;
