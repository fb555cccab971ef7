//! Weather store port
//!
//! Document persistence for fetched weather records.

use async_trait::async_trait;
use domain::WeatherRecord;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the weather record store
///
/// Records are keyed by their exact (latitude, longitude) pair. The store is
/// append-only: nothing is updated or deleted, and duplicates are not rejected.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherStorePort: Send + Sync {
    /// Find a record whose coordinates equal the given ones exactly
    async fn find_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<WeatherRecord>, ApplicationError>;

    /// Persist a new record, returning it with its store-assigned id
    async fn insert(&self, record: &WeatherRecord) -> Result<WeatherRecord, ApplicationError>;

    /// Check if the store is reachable
    async fn is_healthy(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherStorePort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherStorePort>();
    }
}
