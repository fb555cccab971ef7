//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, openapi, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Weather lookups
        .route(
            "/weather/location",
            get(handlers::weather::get_weather_by_location),
        )
        .route("/weather/city", get(handlers::weather::get_weather_by_city))
        // API documentation
        .merge(openapi::create_openapi_routes())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use application::{
        ApplicationError,
        ports::{CurrentConditions, UpstreamWeatherPort},
    };
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use domain::{CityName, GeoLocation};
    use infrastructure::{AppConfig, InMemoryWeatherStore};
    use tower::ServiceExt;

    use super::*;

    struct OfflineUpstream;

    #[async_trait]
    impl UpstreamWeatherPort for OfflineUpstream {
        async fn fetch_conditions(
            &self,
            _location: &GeoLocation,
        ) -> Result<CurrentConditions, ApplicationError> {
            Err(ApplicationError::UpstreamUnavailable("offline".to_string()))
        }

        async fn geocode(&self, _city: &CityName) -> Result<Option<GeoLocation>, ApplicationError> {
            Err(ApplicationError::UpstreamUnavailable("offline".to_string()))
        }
    }

    fn router() -> Router {
        create_router(AppState::new(
            Arc::new(InMemoryWeatherStore::new()),
            Arc::new(OfflineUpstream),
            AppConfig::default(),
        ))
    }

    async fn status_of(uri: &str) -> StatusCode {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        router().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn health_route_is_mounted() {
        assert_eq!(status_of("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn weather_routes_are_mounted() {
        assert_eq!(
            status_of("/weather/location?latitude=1&longitude=2").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of("/weather/city?city=Paris").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        assert_eq!(status_of("/weather").await, StatusCode::NOT_FOUND);
    }
}
