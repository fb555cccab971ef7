//! SQLite weather store implementation
//!
//! Implements the `WeatherStorePort` as an append-only table of weather
//! record documents keyed by exact coordinates.

use std::sync::Arc;

use application::{error::ApplicationError, ports::WeatherStorePort};
use async_trait::async_trait;
use chrono::Utc;
use domain::{CIVIL_MINUTE_FORMAT, WeatherRecord, WeatherRecordId, parse_civil_minute};
use rusqlite::{OptionalExtension, Row, params, types::Type};
use tokio::task;
use tracing::{debug, instrument, warn};

use super::connection::ConnectionPool;

/// SQLite-based weather record store
#[derive(Debug, Clone)]
pub struct SqliteWeatherStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteWeatherStore {
    /// Create a new SQLite weather store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Number of stored records with exactly these coordinates
    #[instrument(skip(self))]
    pub async fn count_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<u64, ApplicationError> {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(store_error)?;

            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM weather_records WHERE latitude = ?1 AND longitude = ?2",
                    params![latitude, longitude],
                    |row| row.get(0),
                )
                .map_err(store_error)?;

            Ok(u64::try_from(count).unwrap_or_default())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}

#[async_trait]
impl WeatherStorePort for SqliteWeatherStore {
    #[instrument(skip(self))]
    async fn find_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<WeatherRecord>, ApplicationError> {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(store_error)?;

            conn.query_row(
                "SELECT id, latitude, longitude, temperature, wind_speed, wind_direction, sunrise
                 FROM weather_records
                 WHERE latitude = ?1 AND longitude = ?2
                 ORDER BY rowid
                 LIMIT 1",
                params![latitude, longitude],
                row_to_record,
            )
            .optional()
            .map_err(store_error)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self, record), fields(lat = record.latitude, lon = record.longitude))]
    async fn insert(&self, record: &WeatherRecord) -> Result<WeatherRecord, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let id = record.id.unwrap_or_default();
        let record = record.clone().with_id(id);

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(store_error)?;

            conn.execute(
                "INSERT INTO weather_records
                 (id, latitude, longitude, temperature, wind_speed, wind_direction, sunrise, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    id.to_string(),
                    record.latitude,
                    record.longitude,
                    record.temperature,
                    record.wind_speed,
                    record.wind_direction,
                    record.sunrise.format(CIVIL_MINUTE_FORMAT).to_string(),
                    Utc::now().to_rfc3339(),
                ],
            )
            .map_err(store_error)?;

            debug!(id = %id, "Inserted weather record");
            Ok(record)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    async fn is_healthy(&self) -> bool {
        let pool = Arc::clone(&self.pool);
        let result = task::spawn_blocking(move || {
            pool.get()
                .ok()
                .and_then(|conn| {
                    conn.query_row("SELECT 1", [], |row| row.get::<_, i32>(0))
                        .ok()
                })
                .is_some()
        })
        .await;

        match result {
            Ok(healthy) => {
                if !healthy {
                    warn!("Weather store health check failed: unable to execute query");
                }
                healthy
            },
            Err(e) => {
                warn!(error = %e, "Weather store health check failed: task panicked");
                false
            },
        }
    }
}

fn store_error(e: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::StoreFailure(e.to_string())
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<WeatherRecord> {
    let id_str: String = row.get(0)?;
    let sunrise_str: String = row.get(6)?;

    let id = WeatherRecordId::parse(&id_str)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;
    let sunrise = parse_civil_minute(&sunrise_str)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?;

    Ok(WeatherRecord {
        id: Some(id),
        latitude: row.get(1)?,
        longitude: row.get(2)?,
        temperature: row.get(3)?,
        wind_speed: row.get(4)?,
        wind_direction: row.get(5)?,
        sunrise,
    })
}
