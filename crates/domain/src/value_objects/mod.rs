//! Value Objects - Immutable, identity-less domain primitives

mod city_name;
mod geo_location;
mod location_query;
mod weather_record_id;

pub use city_name::CityName;
pub use geo_location::{GeoLocation, InvalidLocation, validate};
pub use location_query::LocationQuery;
pub use weather_record_id::WeatherRecordId;
