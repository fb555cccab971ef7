//! OpenAPI documentation module
//!
//! Serves the SkyCache OpenAPI document and a Swagger UI for exploring it.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{handlers, state::AppState};

/// OpenAPI documentation for SkyCache
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SkyCache API",
        version = "0.1.0",
        description = "Current weather by coordinates or city name, cached per coordinate pair",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Health check and readiness endpoints"),
        (name = "weather", description = "Cached current weather lookups")
    ),
    paths(
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::weather::get_weather_by_location,
        handlers::weather::get_weather_by_city,
    ),
    components(
        schemas(
            handlers::health::HealthResponse,
            handlers::health::ReadinessResponse,
            handlers::health::StoreStatus,
            handlers::weather::WeatherResponse,
            crate::error::ErrorResponse,
        )
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Swagger UI at `/swagger-ui`, backed by `/api-docs/openapi.json`
pub fn create_openapi_routes() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
