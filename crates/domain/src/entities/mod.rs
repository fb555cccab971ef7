//! Domain entities - Objects with identity and lifecycle

mod weather_record;

pub use weather_record::{CIVIL_MINUTE_FORMAT, WeatherRecord, civil_minute, parse_civil_minute};
