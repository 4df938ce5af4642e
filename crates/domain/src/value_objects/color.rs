//! Display color value object
//!
//! Entity colors travel on the wire as CSS hex strings. The newtype accepts
//! only the `#rrggbb` form and normalizes to lowercase so comparisons are
//! stable.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Fallback display color for characters without an explicit one.
pub const DEFAULT_CHARACTER_COLOR: &str = "#58a6ff";

/// Fallback display color for location markers without an explicit one.
pub const DEFAULT_LOCATION_COLOR: &str = "#00d1ff";

/// A validated `#rrggbb` hex color
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityColor(String);

impl EntityColor {
    /// Create a new validated color.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Parse` unless the input is `#` followed by
    /// exactly six hex digits.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| DomainError::parse(format!("Color must start with '#': {trimmed}")))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DomainError::parse(format!(
                "Color must be #rrggbb: {trimmed}"
            )));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Returns the color as a `#rrggbb` string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for EntityColor {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<EntityColor> for String {
    fn from(color: EntityColor) -> String {
        color.0
    }
}

impl AsRef<str> for EntityColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_color() {
        let color = EntityColor::new("#58a6ff").unwrap();
        assert_eq!(color.as_str(), "#58a6ff");
    }

    #[test]
    fn uppercase_is_normalized() {
        let color = EntityColor::new("#FF00AA").unwrap();
        assert_eq!(color.as_str(), "#ff00aa");
    }

    #[test]
    fn input_is_trimmed() {
        let color = EntityColor::new("  #00d1ff ").unwrap();
        assert_eq!(color.as_str(), "#00d1ff");
    }

    #[test]
    fn missing_hash_rejected() {
        let result = EntityColor::new("58a6ff");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), DomainError::Parse(_)));
    }

    #[test]
    fn short_form_rejected() {
        assert!(EntityColor::new("#fff").is_err());
    }

    #[test]
    fn non_hex_digits_rejected() {
        assert!(EntityColor::new("#58a6fg").is_err());
    }

    #[test]
    fn empty_rejected() {
        assert!(EntityColor::new("").is_err());
    }

    #[test]
    fn default_constants_are_valid() {
        assert!(EntityColor::new(DEFAULT_CHARACTER_COLOR).is_ok());
        assert!(EntityColor::new(DEFAULT_LOCATION_COLOR).is_ok());
    }
}
