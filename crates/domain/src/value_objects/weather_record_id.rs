//! Weather record identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store-assigned identifier of a persisted weather record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherRecordId(Uuid);

impl WeatherRecordId {
    /// Create a new random record ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a record ID from a string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Get the underlying UUID
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for WeatherRecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WeatherRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for WeatherRecordId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_unique() {
        assert_ne!(WeatherRecordId::new(), WeatherRecordId::new());
    }

    #[test]
    fn parse_roundtrips_display() {
        let id = WeatherRecordId::new();
        let parsed = WeatherRecordId::parse(&id.to_string()).expect("parse");
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(WeatherRecordId::parse("not-a-uuid").is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").expect("uuid");
        let json = serde_json::to_string(&WeatherRecordId::from(uuid)).expect("serialize");
        assert_eq!(json, r#""550e8400-e29b-41d4-a716-446655440000""#);
    }
}
