//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod upstream_weather_port;
mod weather_store_port;

#[cfg(test)]
pub use upstream_weather_port::MockUpstreamWeatherPort;
pub use upstream_weather_port::{CurrentConditions, UpstreamWeatherPort};
#[cfg(test)]
pub use weather_store_port::MockWeatherStorePort;
pub use weather_store_port::WeatherStorePort;
