//! Persistence module
//!
//! Weather record stores: SQLite for durable storage, in-memory for tests
//! and ephemeral runs.

pub mod connection;
pub mod in_memory_weather_store;
pub mod migrations;
pub mod weather_store;

use std::sync::Arc;

use application::ports::WeatherStorePort;
use tracing::info;

pub use connection::{ConnectionPool, DatabaseError, create_pool};
pub use in_memory_weather_store::InMemoryWeatherStore;
pub use weather_store::SqliteWeatherStore;

use crate::config::{DatabaseConfig, StoreBackend};

/// Build the weather store selected by configuration
pub fn create_weather_store(
    config: &DatabaseConfig,
) -> Result<Arc<dyn WeatherStorePort>, DatabaseError> {
    info!(backend = %config.backend, "Initializing weather store");

    match config.backend {
        StoreBackend::Sqlite => {
            let pool = create_pool(config)?;
            Ok(Arc::new(SqliteWeatherStore::new(Arc::new(pool))))
        },
        StoreBackend::Memory => Ok(Arc::new(InMemoryWeatherStore::new())),
    }
}
