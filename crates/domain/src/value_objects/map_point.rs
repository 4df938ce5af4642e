//! Planar map coordinates
//!
//! The world map is a plain image plane, not a geographic projection. Both
//! axes run 0..=1000 regardless of the background image's aspect ratio, and
//! a point is only meaningful with both coordinates present.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Side length of the square map plane.
pub const MAP_EXTENT: f64 = 1000.0;

/// A point on the map plane, both coordinates in 0..=[`MAP_EXTENT`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint", into = "RawPoint")]
pub struct MapPoint {
    x: f64,
    y: f64,
}

/// Unvalidated serde carrier for [`MapPoint`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawPoint {
    x: f64,
    y: f64,
}

impl MapPoint {
    /// Create a validated map point.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if either coordinate is not finite
    /// or lies outside 0..=[`MAP_EXTENT`].
    pub fn new(x: f64, y: f64) -> Result<Self, DomainError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(DomainError::validation("Map coordinates must be finite"));
        }
        if !(0.0..=MAP_EXTENT).contains(&x) || !(0.0..=MAP_EXTENT).contains(&y) {
            return Err(DomainError::validation(format!(
                "Map coordinates must lie within 0..={}: got ({}, {})",
                MAP_EXTENT, x, y
            )));
        }
        Ok(Self { x, y })
    }

    /// Create a map point from arbitrary plane coordinates, clamping each
    /// axis into 0..=[`MAP_EXTENT`]. Used for click positions at the very
    /// edge of the widget, which can land fractionally outside the plane.
    pub fn clamped(x: f64, y: f64) -> Result<Self, DomainError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(DomainError::validation("Map coordinates must be finite"));
        }
        Ok(Self {
            x: x.clamp(0.0, MAP_EXTENT),
            y: y.clamp(0.0, MAP_EXTENT),
        })
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl TryFrom<RawPoint> for MapPoint {
    type Error = DomainError;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        Self::new(raw.x, raw.y)
    }
}

impl From<MapPoint> for RawPoint {
    fn from(point: MapPoint) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod constructor {
        use super::*;

        #[test]
        fn valid_point() {
            let point = MapPoint::new(250.0, 400.0).unwrap();
            assert_eq!(point.x(), 250.0);
            assert_eq!(point.y(), 400.0);
        }

        #[test]
        fn corners_accepted() {
            assert!(MapPoint::new(0.0, 0.0).is_ok());
            assert!(MapPoint::new(MAP_EXTENT, MAP_EXTENT).is_ok());
        }

        #[test]
        fn negative_rejected() {
            let result = MapPoint::new(-1.0, 400.0);
            assert!(result.is_err());
            assert!(matches!(result.unwrap_err(), DomainError::Validation(_)));
        }

        #[test]
        fn beyond_extent_rejected() {
            assert!(MapPoint::new(250.0, 1000.1).is_err());
        }

        #[test]
        fn nan_rejected() {
            assert!(MapPoint::new(f64::NAN, 0.0).is_err());
            assert!(MapPoint::new(0.0, f64::INFINITY).is_err());
        }
    }

    mod clamped {
        use super::*;

        #[test]
        fn in_range_unchanged() {
            let point = MapPoint::clamped(250.0, 400.0).unwrap();
            assert_eq!(point.x(), 250.0);
            assert_eq!(point.y(), 400.0);
        }

        #[test]
        fn out_of_range_clamped_to_edges() {
            let point = MapPoint::clamped(-5.0, 1020.0).unwrap();
            assert_eq!(point.x(), 0.0);
            assert_eq!(point.y(), MAP_EXTENT);
        }

        #[test]
        fn nan_still_rejected() {
            assert!(MapPoint::clamped(f64::NAN, 0.0).is_err());
        }
    }

    mod serde_round_trip {
        use super::*;

        #[test]
        fn serializes_as_object() {
            let point = MapPoint::new(250.0, 400.0).unwrap();
            let json = serde_json::to_value(point).unwrap();
            assert_eq!(json["x"], 250.0);
            assert_eq!(json["y"], 400.0);
        }

        #[test]
        fn deserializes_valid_object() {
            let point: MapPoint = serde_json::from_str(r#"{"x":250,"y":400}"#).unwrap();
            assert_eq!(point.x(), 250.0);
        }

        #[test]
        fn deserialize_rejects_out_of_range() {
            let result: Result<MapPoint, _> = serde_json::from_str(r#"{"x":-3,"y":400}"#);
            assert!(result.is_err());
        }

        #[test]
        fn deserialize_rejects_missing_axis() {
            let result: Result<MapPoint, _> = serde_json::from_str(r#"{"x":250}"#);
            assert!(result.is_err());
        }
    }
}
