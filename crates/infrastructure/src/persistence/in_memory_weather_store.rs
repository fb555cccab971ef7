//! In-memory weather store
//!
//! Process-local `WeatherStorePort` for tests and ephemeral runs.

use application::{error::ApplicationError, ports::WeatherStorePort};
use async_trait::async_trait;
use domain::WeatherRecord;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Weather store backed by a vector behind an async lock
#[derive(Debug, Default)]
pub struct InMemoryWeatherStore {
    records: RwLock<Vec<WeatherRecord>>,
}

impl InMemoryWeatherStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records
    ///
    /// Records without an id are assigned one.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = WeatherRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|r| {
                let id = r.id.unwrap_or_default();
                r.with_id(id)
            })
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }

    /// Total number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Number of stored records with exactly these coordinates
    pub async fn count_by_coordinates(&self, latitude: f64, longitude: f64) -> usize {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| r.matches(latitude, longitude))
            .count()
    }
}

#[async_trait]
impl WeatherStorePort for InMemoryWeatherStore {
    #[instrument(skip(self))]
    async fn find_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<WeatherRecord>, ApplicationError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.matches(latitude, longitude))
            .cloned())
    }

    #[instrument(skip(self, record), fields(lat = record.latitude, lon = record.longitude))]
    async fn insert(&self, record: &WeatherRecord) -> Result<WeatherRecord, ApplicationError> {
        let id = record.id.unwrap_or_default();
        let record = record.clone().with_id(id);

        self.records.write().await.push(record.clone());
        debug!(id = %id, "Inserted weather record");
        Ok(record)
    }

    async fn is_healthy(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use std::sync::Arc;

    use domain::{GeoLocation, parse_civil_minute};

    use super::*;

    fn sample_record(location: &GeoLocation, temperature: f64) -> WeatherRecord {
        WeatherRecord::new(
            location,
            temperature,
            5.0,
            180,
            parse_civil_minute("2024-06-01T05:30").unwrap(),
        )
    }

    #[tokio::test]
    async fn new_store_is_empty() {
        let store = InMemoryWeatherStore::new();
        assert!(store.is_empty().await);
        assert!(store.find_by_coordinates(0.0, 0.0).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_then_find() {
        let store = InMemoryWeatherStore::new();
        let stored = store
            .insert(&sample_record(&GeoLocation::new_york(), 22.0))
            .await
            .unwrap();

        let found = store.find_by_coordinates(40.7128, -74.006).await.unwrap();

        assert!(stored.is_persisted());
        assert_eq!(found, Some(stored));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn seeded_records_get_ids() {
        let store =
            InMemoryWeatherStore::with_records([sample_record(&GeoLocation::london(), 12.0)]);

        let found = store
            .find_by_coordinates(51.5074, -0.1278)
            .await
            .unwrap()
            .unwrap();

        assert!(found.is_persisted());
        assert_eq!(found.temperature, 12.0);
    }

    #[tokio::test]
    async fn exact_match_only() {
        let store =
            InMemoryWeatherStore::with_records([sample_record(&GeoLocation::london(), 12.0)]);

        assert!(
            store
                .find_by_coordinates(51.5074, -0.12781)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn concurrent_inserts_are_all_kept() {
        let store = Arc::new(InMemoryWeatherStore::new());
        let mut handles = Vec::new();
        for i in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .insert(&sample_record(&GeoLocation::london(), f64::from(i)))
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.count_by_coordinates(51.5074, -0.1278).await, 8);
    }

    #[tokio::test]
    async fn always_healthy() {
        assert!(InMemoryWeatherStore::new().is_healthy().await);
    }
}
