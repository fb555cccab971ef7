//! Upstream weather port
//!
//! Defines the interface to the public forecast and geocoding services.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use domain::value_objects::{CityName, GeoLocation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Current conditions at a location, normalized from the forecast response
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentConditions {
    /// Current temperature in degrees
    pub temperature: f64,
    /// Current wind speed
    pub wind_speed: f64,
    /// Current wind direction in degrees
    pub wind_direction: i32,
    /// First sunrise of the daily series, local civil time
    pub sunrise: NaiveDateTime,
}

/// Port for the upstream forecast and geocoding services
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UpstreamWeatherPort: Send + Sync {
    /// Fetch current conditions and the day's sunrise for a location
    async fn fetch_conditions(
        &self,
        location: &GeoLocation,
    ) -> Result<CurrentConditions, ApplicationError>;

    /// Resolve a city name to the coordinates of its first geocoding result
    ///
    /// Returns `Ok(None)` when the geocoder has no results.
    async fn geocode(&self, city: &CityName) -> Result<Option<GeoLocation>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn UpstreamWeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn UpstreamWeatherPort>();
    }
}
