//! Entity identifier newtypes
//!
//! Identifiers are issued by the backend as opaque strings (database object
//! ids); the client never mints them. The newtypes guarantee the wrapped
//! value is trimmed and non-empty.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Wrap a backend-issued identifier.
            ///
            /// # Errors
            ///
            /// Returns `DomainError::InvalidId` if the value is empty after
            /// trimming.
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(concat!(
                        $label,
                        " id cannot be empty"
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Core entity IDs
define_id!(CharacterId, "character");
define_id!(LocationId, "location");

#[cfg(test)]
mod tests {
    use super::*;

    mod character_id {
        use super::*;

        #[test]
        fn valid_id() {
            let id = CharacterId::new("665f2a1b9c8d4e0012ab34cd").unwrap();
            assert_eq!(id.as_str(), "665f2a1b9c8d4e0012ab34cd");
            assert_eq!(id.to_string(), "665f2a1b9c8d4e0012ab34cd");
        }

        #[test]
        fn empty_id_rejected() {
            let result = CharacterId::new("");
            assert!(result.is_err());
            let err = result.unwrap_err();
            assert!(matches!(err, DomainError::InvalidId(_)));
            assert!(err.to_string().contains("cannot be empty"));
        }

        #[test]
        fn whitespace_only_rejected() {
            assert!(CharacterId::new("   ").is_err());
        }

        #[test]
        fn id_is_trimmed() {
            let id = CharacterId::new("  c1  ").unwrap();
            assert_eq!(id.as_str(), "c1");
        }

        #[test]
        fn try_from_string() {
            let id: CharacterId = "c1".to_string().try_into().unwrap();
            assert_eq!(id.as_str(), "c1");
        }

        #[test]
        fn into_string() {
            let id = CharacterId::new("c1").unwrap();
            let s: String = id.into();
            assert_eq!(s, "c1");
        }

        #[test]
        fn serde_round_trip() {
            let id = CharacterId::new("c1").unwrap();
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, "\"c1\"");
            let back: CharacterId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, id);
        }

        #[test]
        fn serde_rejects_empty() {
            let result: Result<CharacterId, _> = serde_json::from_str("\"\"");
            assert!(result.is_err());
        }
    }

    mod location_id {
        use super::*;

        #[test]
        fn valid_id() {
            let id = LocationId::new("l1").unwrap();
            assert_eq!(id.as_str(), "l1");
        }

        #[test]
        fn empty_id_rejected() {
            let result = LocationId::new("");
            assert!(result.is_err());
            assert!(matches!(result.unwrap_err(), DomainError::InvalidId(_)));
        }

        #[test]
        fn equality_by_value() {
            let a = LocationId::new("l1").unwrap();
            let b = LocationId::new("l1").unwrap();
            let c = LocationId::new("l2").unwrap();
            assert_eq!(a, b);
            assert_ne!(a, c);
        }
    }
}
