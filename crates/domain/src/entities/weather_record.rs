//! Weather record entity - conditions observed at a coordinate pair

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{GeoLocation, WeatherRecordId};

/// Format of civil (offset-free) timestamps such as sunrise: `yyyy-MM-ddTHH:mm`
pub const CIVIL_MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse a civil timestamp in [`CIVIL_MINUTE_FORMAT`]
///
/// # Errors
///
/// Returns `DomainError::InvalidDateTime` if the string does not match exactly.
pub fn parse_civil_minute(s: &str) -> Result<NaiveDateTime, DomainError> {
    NaiveDateTime::parse_from_str(s, CIVIL_MINUTE_FORMAT)
        .map_err(|e| DomainError::InvalidDateTime(format!("{s}: {e}")))
}

/// Weather conditions at a point in time and place
///
/// Records are immutable once persisted. The coordinate pair is the cache key
/// and is matched by exact floating-point equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    /// Store-assigned identifier, absent until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<WeatherRecordId>,
    /// Latitude of the query key
    pub latitude: f64,
    /// Longitude of the query key
    pub longitude: f64,
    /// Current temperature in degrees
    pub temperature: f64,
    /// Current wind speed
    pub wind_speed: f64,
    /// Current wind direction in degrees
    pub wind_direction: i32,
    /// First sunrise of the daily series, local civil time
    #[serde(with = "civil_minute")]
    pub sunrise: NaiveDateTime,
}

impl WeatherRecord {
    /// Create an unpersisted record for a location
    #[must_use]
    pub const fn new(
        location: &GeoLocation,
        temperature: f64,
        wind_speed: f64,
        wind_direction: i32,
        sunrise: NaiveDateTime,
    ) -> Self {
        Self {
            id: None,
            latitude: location.latitude(),
            longitude: location.longitude(),
            temperature,
            wind_speed,
            wind_direction,
            sunrise,
        }
    }

    /// Attach a store-assigned identifier
    #[must_use]
    pub fn with_id(mut self, id: WeatherRecordId) -> Self {
        self.id = Some(id);
        self
    }

    /// Whether the record has been persisted
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Location of the record (trusted, validated at the query boundary)
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        GeoLocation::new_unchecked(self.latitude, self.longitude)
    }

    /// Exact cache-key match: both coordinates must be equal as stored
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn matches(&self, latitude: f64, longitude: f64) -> bool {
        self.latitude == latitude && self.longitude == longitude
    }
}

/// Serde adapter for [`CIVIL_MINUTE_FORMAT`] timestamps
pub mod civil_minute {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::CIVIL_MINUTE_FORMAT;

    /// Serialize as `yyyy-MM-ddTHH:mm`
    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(CIVIL_MINUTE_FORMAT))
    }

    /// Deserialize from `yyyy-MM-ddTHH:mm`
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, CIVIL_MINUTE_FORMAT).map_err(D::Error::custom)
    }
}
