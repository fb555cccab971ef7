//! Open-Meteo weather integration
//!
//! Client for the Open-Meteo forecast and geocoding APIs (<https://open-meteo.com>).
//! Neither endpoint requires an API key.

pub mod client;
mod models;

pub use client::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{CurrentWeather, GeocodedPlace};
