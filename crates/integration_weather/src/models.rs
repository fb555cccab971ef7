//! Weather data models
//!
//! Wire types for the Open-Meteo responses and the normalized values the
//! client hands out.

use chrono::NaiveDateTime;
use serde::Deserialize;

/// Current conditions at a location, normalized from a forecast response
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentWeather {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Wind direction in degrees
    pub wind_direction: i32,
    /// First sunrise of the daily series, in the location's local time
    pub sunrise: NaiveDateTime,
}

/// First result of a geocoding search
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    /// Place name as returned by the geocoder
    pub name: Option<String>,
    /// Country name, if reported
    pub country: Option<String>,
    /// Latitude of the place
    pub latitude: f64,
    /// Longitude of the place
    pub longitude: f64,
}

// ============================================================================
// Raw API response types
// ============================================================================

/// `/v1/forecast` response with `current_weather=true&daily=sunrise`
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub current_weather: Option<CurrentWeatherData>,
    pub daily: Option<DailyData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentWeatherData {
    pub temperature: f64,
    pub windspeed: f64,
    pub winddirection: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DailyData {
    #[serde(default)]
    pub sunrise: Vec<String>,
}

/// `/v1/search` response; `results` is absent when nothing matched
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<GeocodingResult> for GeocodedPlace {
    fn from(result: GeocodingResult) -> Self {
        Self {
            name: result.name,
            country: result.country,
            latitude: result.latitude,
            longitude: result.longitude,
        }
    }
}
