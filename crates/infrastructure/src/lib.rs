//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the weather record
//! stores and the Open-Meteo upstream adapter. Also owns configuration
//! loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, DatabaseConfig, Environment, LogFormat, ServerConfig, StoreBackend, WeatherConfig,
};
pub use persistence::{
    ConnectionPool, DatabaseError, InMemoryWeatherStore, SqliteWeatherStore, create_pool,
    create_weather_store,
};
pub use telemetry::{TelemetryError, init_tracing};
