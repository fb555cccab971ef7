//! Open-Meteo adapter - Implements UpstreamWeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::{CurrentConditions, UpstreamWeatherPort};
use async_trait::async_trait;
use domain::value_objects::{CityName, GeoLocation};
use integration_weather::{
    CurrentWeather, OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument, warn};

/// Adapter for the Open-Meteo forecast and geocoding services
#[derive(Debug)]
pub struct OpenMeteoAdapter {
    client: OpenMeteoClient,
}

impl OpenMeteoAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(WeatherConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenMeteoClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::UpstreamUnavailable(e),
            WeatherError::RateLimitExceeded => {
                ApplicationError::UpstreamUnavailable("rate limit exceeded".to_string())
            },
            WeatherError::ParseError(e) => ApplicationError::UpstreamParse(e),
        }
    }

    fn map_current(current: &CurrentWeather) -> CurrentConditions {
        CurrentConditions {
            temperature: current.temperature,
            wind_speed: current.wind_speed,
            wind_direction: current.wind_direction,
            sunrise: current.sunrise,
        }
    }
}

#[async_trait]
impl UpstreamWeatherPort for OpenMeteoAdapter {
    #[instrument(skip(self), fields(location = %location))]
    async fn fetch_conditions(
        &self,
        location: &GeoLocation,
    ) -> Result<CurrentConditions, ApplicationError> {
        let current = self
            .client
            .current_weather(location)
            .await
            .map_err(Self::map_error)?;

        debug!(
            temperature = current.temperature,
            wind_speed = current.wind_speed,
            "Fetched current conditions"
        );
        Ok(Self::map_current(&current))
    }

    #[instrument(skip(self), fields(city = %city))]
    async fn geocode(&self, city: &CityName) -> Result<Option<GeoLocation>, ApplicationError> {
        let Some(place) = self
            .client
            .search_place(city.as_str())
            .await
            .map_err(Self::map_error)?
        else {
            debug!("No geocoding results");
            return Ok(None);
        };

        let location = GeoLocation::new(place.latitude, place.longitude).map_err(|e| {
            warn!(error = %e, "Geocoder returned invalid coordinates");
            ApplicationError::UpstreamParse(format!("Geocoding result out of range: {e}"))
        })?;

        debug!(
            name = place.name.as_deref().unwrap_or_default(),
            location = %location,
            "Geocoded city"
        );
        Ok(Some(location))
    }
}
