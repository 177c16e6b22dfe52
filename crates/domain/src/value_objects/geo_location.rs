//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error type for invalid coordinates
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
pub struct InvalidCoordinates;

/// A geographic location with latitude and longitude
///
/// Identifies the place a forecast applies to; the core performs no
/// geocoding, so callers supply coordinates directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a location without validation (for trusted constants)
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// London, UK - the default forecast location
    #[must_use]
    pub const fn london() -> Self {
        Self::new_unchecked(51.5074, -0.1278)
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_coordinates_accepted() {
        let loc = GeoLocation::new(51.5074, -0.1278).expect("valid coordinates");
        assert!((loc.latitude() - 51.5074).abs() < f64::EPSILON);
        assert!((loc.longitude() + 0.1278).abs() < f64::EPSILON);
    }

    #[test]
    fn boundary_coordinates_accepted() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn invalid_latitude_rejected() {
        assert!(GeoLocation::new(90.5, 0.0).is_err());
        assert!(GeoLocation::new(-90.5, 0.0).is_err());
    }

    #[test]
    fn invalid_longitude_rejected() {
        assert!(GeoLocation::new(0.0, 180.5).is_err());
        assert!(GeoLocation::new(0.0, -180.5).is_err());
    }

    #[test]
    fn london_constant() {
        let london = GeoLocation::london();
        assert!((london.latitude() - 51.5074).abs() < 0.001);
        assert!((london.longitude() + 0.1278).abs() < 0.001);
    }

    #[test]
    fn display_shows_both_coordinates() {
        let loc = GeoLocation::london();
        let display = format!("{loc}");
        assert!(display.contains("51.5074"));
        assert!(display.contains("-0.1278"));
    }

    #[test]
    fn serialization_roundtrip() {
        let loc = GeoLocation::london();
        let json = serde_json::to_string(&loc).expect("serialize");
        let parsed: GeoLocation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loc, parsed);
    }
}
