//! Geographic location value object and coordinate validation

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Error type for coordinates outside the valid range
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidLocation {
    /// Latitude not in [-90, 90]
    #[error("Latitude must be between -90 and 90 degrees, got {0}")]
    Latitude(f64),

    /// Longitude not in [-180, 180]
    #[error("Longitude must be between -180 and 180 degrees, got {0}")]
    Longitude(f64),
}

/// Check that a coordinate pair lies within the valid ranges
///
/// Latitude must be in [-90, 90] and longitude in [-180, 180]. NaN is rejected.
///
/// # Errors
///
/// Returns `InvalidLocation` naming the first offending component.
pub fn validate(latitude: f64, longitude: f64) -> Result<(), InvalidLocation> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(InvalidLocation::Latitude(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(InvalidLocation::Longitude(longitude));
    }
    Ok(())
}

/// A geographic location with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
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
    /// Returns `InvalidLocation` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidLocation> {
        validate(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a location without validation (for trusted sources)
    ///
    /// Caller must ensure latitude is in [-90, 90] and longitude in [-180, 180]
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
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
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Common locations used as fixtures
impl GeoLocation {
    /// London, UK
    #[must_use]
    pub const fn london() -> Self {
        Self::new_unchecked(51.5074, -0.1278)
    }

    /// New York, USA
    #[must_use]
    pub const fn new_york() -> Self {
        Self::new_unchecked(40.7128, -74.006)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let loc = GeoLocation::new(52.52, 13.405).expect("valid coordinates");
        assert!((loc.latitude() - 52.52).abs() < f64::EPSILON);
        assert!((loc.longitude() - 13.405).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
        assert!(GeoLocation::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert_eq!(
            GeoLocation::new(91.0, 0.0),
            Err(InvalidLocation::Latitude(91.0))
        );
        assert_eq!(
            GeoLocation::new(-91.0, 0.0),
            Err(InvalidLocation::Latitude(-91.0))
        );
    }

    #[test]
    fn test_invalid_longitude() {
        assert_eq!(
            GeoLocation::new(0.0, 181.0),
            Err(InvalidLocation::Longitude(181.0))
        );
        assert_eq!(
            GeoLocation::new(0.0, -181.0),
            Err(InvalidLocation::Longitude(-181.0))
        );
    }

    #[test]
    fn test_latitude_reported_before_longitude() {
        assert_eq!(validate(100.0, 200.0), Err(InvalidLocation::Latitude(100.0)));
    }

    #[test]
    fn test_nan_rejected() {
        assert!(validate(f64::NAN, 0.0).is_err());
        assert!(validate(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_infinity_rejected() {
        assert!(validate(f64::INFINITY, 0.0).is_err());
        assert!(validate(0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_display_keeps_full_precision() {
        let loc = GeoLocation::new(40.7128, -74.006).expect("valid");
        assert_eq!(loc.to_string(), "40.7128, -74.006");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&GeoLocation::london()).expect("serialize");
        assert!(json.contains("51.5074"));
        assert!(json.contains("-0.1278"));
    }

    #[test]
    fn test_common_locations_are_valid() {
        let london = GeoLocation::london();
        let new_york = GeoLocation::new_york();
        assert!(validate(london.latitude(), london.longitude()).is_ok());
        assert!(validate(new_york.latitude(), new_york.longitude()).is_ok());
    }
}
