//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo forecast and geocoding APIs.

use async_trait::async_trait;
use domain::{GeoLocation, parse_civil_minute};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{
    CurrentWeather, CurrentWeatherData, DailyData, ForecastResponse, GeocodedPlace,
    GeocodingResponse,
};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP client could not be built
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request failed in transport or returned a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Forecast API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,

    /// Geocoding API base URL (default: <https://geocoding-api.open-meteo.com/v1>)
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("skycache/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            forecast_base_url: default_forecast_base_url(),
            geocoding_base_url: default_geocoding_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions and the first daily sunrise for a location
    async fn current_weather(&self, location: &GeoLocation)
    -> Result<CurrentWeather, WeatherError>;

    /// Look up the best match for a place name
    ///
    /// Returns `Ok(None)` when the geocoder has no results.
    async fn search_place(&self, name: &str) -> Result<Option<GeocodedPlace>, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.forecast_base_url.trim_end_matches('/'))
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.geocoding_base_url.trim_end_matches('/'))
    }

    /// Send a GET request and decode a successful JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        Self::check_status(response)?
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }

    fn check_status(response: Response) -> Result<Response, WeatherError> {
        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }
        Ok(response)
    }

    /// Normalize a forecast response into current conditions
    fn parse_current_weather(response: ForecastResponse) -> Result<CurrentWeather, WeatherError> {
        let current: CurrentWeatherData = response.current_weather.ok_or_else(|| {
            WeatherError::ParseError("No current weather data in response".to_string())
        })?;
        let daily: DailyData = response.daily.ok_or_else(|| {
            WeatherError::ParseError("No daily data in response".to_string())
        })?;

        let first_sunrise = daily
            .sunrise
            .first()
            .ok_or_else(|| WeatherError::ParseError("Empty daily sunrise series".to_string()))?;
        let sunrise = parse_civil_minute(first_sunrise)
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        Ok(CurrentWeather {
            temperature: current.temperature,
            wind_speed: current.windspeed,
            wind_direction: Self::wind_direction_degrees(current.winddirection)?,
            sunrise,
        })
    }

    #[allow(clippy::cast_possible_truncation)]
    fn wind_direction_degrees(value: f64) -> Result<i32, WeatherError> {
        if !value.is_finite() || value.abs() > f64::from(i32::MAX) {
            return Err(WeatherError::ParseError(format!(
                "Wind direction out of range: {value}"
            )));
        }
        Ok(value.round() as i32)
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(location = %location))]
    async fn current_weather(
        &self,
        location: &GeoLocation,
    ) -> Result<CurrentWeather, WeatherError> {
        let url = self.forecast_url();
        debug!(url = %url, "Fetching current weather");

        let query = [
            ("latitude", location.latitude().to_string()),
            ("longitude", location.longitude().to_string()),
            ("current_weather", "true".to_string()),
            ("daily", "sunrise".to_string()),
            ("timezone", "auto".to_string()),
        ];
        let response: ForecastResponse = self.get_json(&url, &query).await?;

        Self::parse_current_weather(response)
    }

    #[instrument(skip(self))]
    async fn search_place(&self, name: &str) -> Result<Option<GeocodedPlace>, WeatherError> {
        let url = self.search_url();
        debug!(url = %url, "Geocoding place name");

        let query = [
            ("name", name.to_string()),
            ("count", "1".to_string()),
            ("language", "en".to_string()),
            ("format", "json".to_string()),
        ];
        let response: GeocodingResponse = self.get_json(&url, &query).await?;

        Ok(response
            .results
            .and_then(|results| results.into_iter().next())
            .map(GeocodedPlace::from))
    }
}
