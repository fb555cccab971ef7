//! Adapters - Implementations of application ports

mod open_meteo_adapter;

pub use open_meteo_adapter::OpenMeteoAdapter;
