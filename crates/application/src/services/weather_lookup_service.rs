//! Weather lookup service
//!
//! Read-through cache over the weather store: a stored record for the exact
//! coordinate pair is returned as-is, otherwise current conditions are fetched
//! upstream, persisted, and returned.

use std::sync::Arc;

use domain::{CityName, GeoLocation, LocationQuery, WeatherRecord};
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{UpstreamWeatherPort, WeatherStorePort},
};

/// Cache-or-fetch coordination for weather lookups
///
/// Holds no request-scoped state and is safe to share across tasks. Concurrent
/// misses for the same coordinates are not coordinated and may each insert.
#[derive(Clone)]
pub struct WeatherLookupService {
    store: Arc<dyn WeatherStorePort>,
    upstream: Arc<dyn UpstreamWeatherPort>,
}

impl std::fmt::Debug for WeatherLookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherLookupService").finish_non_exhaustive()
    }
}

impl WeatherLookupService {
    /// Create a new lookup service
    pub fn new(store: Arc<dyn WeatherStorePort>, upstream: Arc<dyn UpstreamWeatherPort>) -> Self {
        Self { store, upstream }
    }

    /// Look up weather for a coordinate pair
    ///
    /// The coordinates are validated before any I/O. A stored record is
    /// returned without a freshness check.
    #[instrument(skip(self))]
    pub async fn lookup_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherRecord, ApplicationError> {
        let location = GeoLocation::new(latitude, longitude)?;
        self.lookup_location(&location).await
    }

    /// Look up weather for a city name
    ///
    /// The name is resolved through geocoding on every call; only the
    /// resulting coordinates are cached.
    #[instrument(skip(self))]
    pub async fn lookup_by_city(&self, city: &str) -> Result<WeatherRecord, ApplicationError> {
        let city = CityName::new(city)?;
        self.lookup_city(&city).await
    }

    /// Look up weather for an already-validated query
    pub async fn lookup(&self, query: &LocationQuery) -> Result<WeatherRecord, ApplicationError> {
        match query {
            LocationQuery::Coordinates(location) => self.lookup_location(location).await,
            LocationQuery::City(city) => self.lookup_city(city).await,
        }
    }

    async fn lookup_city(&self, city: &CityName) -> Result<WeatherRecord, ApplicationError> {
        let location = self
            .upstream
            .geocode(city)
            .await?
            .ok_or_else(|| ApplicationError::CityNotFound(city.to_string()))?;

        debug!(city = %city, location = %location, "Resolved city");
        self.lookup_location(&location).await
    }

    async fn lookup_location(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherRecord, ApplicationError> {
        if let Some(record) = self
            .store
            .find_by_coordinates(location.latitude(), location.longitude())
            .await?
        {
            debug!(location = %location, id = ?record.id, "Weather cache hit");
            return Ok(record);
        }

        debug!(location = %location, "Weather cache miss, fetching upstream");
        let conditions = self.upstream.fetch_conditions(location).await?;

        let record = WeatherRecord::new(
            location,
            conditions.temperature,
            conditions.wind_speed,
            conditions.wind_direction,
            conditions.sunrise,
        );
        let stored = self.store.insert(&record).await?;

        info!(
            location = %location,
            id = ?stored.id,
            temperature = stored.temperature,
            "Stored weather record"
        );
        Ok(stored)
    }
}
