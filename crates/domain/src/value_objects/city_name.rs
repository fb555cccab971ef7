//! City name value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A non-blank city name used for geocoding
///
/// The text is kept as given; only the blank check trims it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CityName(String);

impl CityName {
    /// Create a city name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCityName` if the name is empty or whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidCityName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CityName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CityName> for String {
    fn from(name: CityName) -> Self {
        name.0
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_regular_name() {
        let name = CityName::new("London").expect("valid");
        assert_eq!(name.as_str(), "London");
    }

    #[test]
    fn keeps_inner_whitespace_and_unicode() {
        let name = CityName::new("São Paulo").expect("valid");
        assert_eq!(name.to_string(), "São Paulo");
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            CityName::new(""),
            Err(DomainError::InvalidCityName)
        ));
    }

    #[test]
    fn rejects_whitespace_only() {
        assert!(matches!(
            CityName::new("   "),
            Err(DomainError::InvalidCityName)
        ));
        assert!(matches!(
            CityName::new("\t\n"),
            Err(DomainError::InvalidCityName)
        ));
    }

    #[test]
    fn deserialization_validates() {
        let ok: Result<CityName, _> = serde_json::from_str(r#""Paris""#);
        assert!(ok.is_ok());

        let blank: Result<CityName, _> = serde_json::from_str(r#""  ""#);
        assert!(blank.is_err());
    }
}
