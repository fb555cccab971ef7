//! Weather lookup handlers

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use domain::{CIVIL_MINUTE_FORMAT, WeatherRecord};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

/// Coordinate query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct LocationParams {
    /// Latitude in degrees, -90 to 90
    pub latitude: f64,
    /// Longitude in degrees, -180 to 180
    pub longitude: f64,
}

/// City query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct CityParams {
    /// City name to geocode
    pub city: String,
}

/// Weather record returned by the lookup endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "550e8400-e29b-41d4-a716-446655440000",
    "latitude": 40.7128,
    "longitude": -74.006,
    "temperature": 22.0,
    "windSpeed": 5.0,
    "windDirection": 180,
    "sunrise": "2024-06-01T05:30"
}))]
pub struct WeatherResponse {
    /// Store-assigned record ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub latitude: f64,
    pub longitude: f64,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Wind direction in degrees
    pub wind_direction: i32,
    /// Local sunrise, `yyyy-MM-ddTHH:mm`
    pub sunrise: String,
}

impl From<WeatherRecord> for WeatherResponse {
    fn from(record: WeatherRecord) -> Self {
        Self {
            id: record.id.map(|id| id.as_uuid()),
            latitude: record.latitude,
            longitude: record.longitude,
            temperature: record.temperature,
            wind_speed: record.wind_speed,
            wind_direction: record.wind_direction,
            sunrise: record.sunrise.format(CIVIL_MINUTE_FORMAT).to_string(),
        }
    }
}

/// Get weather for a coordinate pair
///
/// Served from the store when a record with exactly these coordinates exists,
/// otherwise fetched upstream and stored.
#[utoipa::path(
    get,
    path = "/weather/location",
    tag = "weather",
    params(LocationParams),
    responses(
        (status = 200, description = "Current weather at the coordinates", body = WeatherResponse),
        (status = 400, description = "Missing or out-of-range coordinates", body = crate::error::ErrorResponse),
        (status = 502, description = "Unexpected upstream response", body = crate::error::ErrorResponse),
        (status = 503, description = "Upstream weather service unavailable", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, params))]
pub async fn get_weather_by_location(
    State(state): State<AppState>,
    params: Result<Query<LocationParams>, QueryRejection>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let Query(params) = params?;

    let record = state
        .lookup_service
        .lookup_by_coordinates(params.latitude, params.longitude)
        .await?;

    Ok(Json(record.into()))
}

/// Get weather for a city
///
/// The city is geocoded on every request; the resulting coordinates use the
/// same cache as `/weather/location`.
#[utoipa::path(
    get,
    path = "/weather/city",
    tag = "weather",
    params(CityParams),
    responses(
        (status = 200, description = "Current weather in the city", body = WeatherResponse),
        (status = 400, description = "Missing or blank city name", body = crate::error::ErrorResponse),
        (status = 404, description = "City not found", body = crate::error::ErrorResponse),
        (status = 502, description = "Unexpected upstream response", body = crate::error::ErrorResponse),
        (status = 503, description = "Upstream weather service unavailable", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, params))]
pub async fn get_weather_by_city(
    State(state): State<AppState>,
    params: Result<Query<CityParams>, QueryRejection>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let Query(params) = params?;

    let record = state.lookup_service.lookup_by_city(&params.city).await?;

    Ok(Json(record.into()))
}

#[cfg(test)]
mod tests {
    use domain::{GeoLocation, WeatherRecordId, parse_civil_minute};

    use super::*;

    fn record() -> WeatherRecord {
        WeatherRecord::new(
            &GeoLocation::new_york(),
            22.0,
            5.0,
            180,
            parse_civil_minute("2024-06-01T05:30").unwrap(),
        )
    }

    #[test]
    fn response_uses_camel_case() {
        let response = WeatherResponse::from(record().with_id(WeatherRecordId::new()));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["windSpeed"], 5.0);
        assert_eq!(json["windDirection"], 180);
        assert_eq!(json["sunrise"], "2024-06-01T05:30");
        assert!(json["id"].is_string());
    }

    #[test]
    fn response_omits_missing_id() {
        let json = serde_json::to_value(WeatherResponse::from(record())).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn response_matches_record_serialization() {
        let record = record().with_id(WeatherRecordId::new());
        let from_record = serde_json::to_value(&record).unwrap();
        let from_response = serde_json::to_value(WeatherResponse::from(record)).unwrap();

        assert_eq!(from_record, from_response);
    }
}
