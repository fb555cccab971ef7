//! Location query - what a caller asks weather for

use std::fmt;

use super::{CityName, GeoLocation};
use crate::errors::DomainError;

/// Either a coordinate pair or a city name to be geocoded
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    /// Validated coordinates
    Coordinates(GeoLocation),
    /// City name, resolved to coordinates before lookup
    City(CityName),
}

impl LocationQuery {
    /// Build a coordinate query
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLocation` for out-of-range coordinates.
    pub fn coordinates(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        Ok(Self::Coordinates(GeoLocation::new(latitude, longitude)?))
    }

    /// Build a city query
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCityName` for blank names.
    pub fn city(name: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self::City(CityName::new(name)?))
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coordinates(location) => write!(f, "coordinates({location})"),
            Self::City(name) => write!(f, "city({name})"),
        }
    }
}
