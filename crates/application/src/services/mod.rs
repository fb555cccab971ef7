//! Application services - Use case implementations

mod weather_lookup_service;

pub use weather_lookup_service::WeatherLookupService;
