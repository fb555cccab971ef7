//! Application state shared across handlers

use std::sync::Arc;

use application::{
    WeatherLookupService,
    ports::{UpstreamWeatherPort, WeatherStorePort},
};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Cache-or-fetch weather lookups
    pub lookup_service: Arc<WeatherLookupService>,
    /// Store handle, used for readiness checks
    pub store: Arc<dyn WeatherStorePort>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("environment", &self.config.environment)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Wire the lookup service to the given store and upstream
    pub fn new(
        store: Arc<dyn WeatherStorePort>,
        upstream: Arc<dyn UpstreamWeatherPort>,
        config: AppConfig,
    ) -> Self {
        let lookup_service = WeatherLookupService::new(Arc::clone(&store), upstream);
        Self {
            lookup_service: Arc::new(lookup_service),
            store,
            config: Arc::new(config),
        }
    }
}
