//! Application-level errors

use domain::{DomainError, InvalidLocation};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (invalid location, invalid city name)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Geocoding returned no results for the city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Upstream weather or geocoding service could not be reached or refused the request
    #[error("Upstream service unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Upstream response did not have the expected shape
    #[error("Unexpected upstream response: {0}")]
    UpstreamParse(String),

    /// Query or insert against the weather store failed
    #[error("Weather store failure: {0}")]
    StoreFailure(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<InvalidLocation> for ApplicationError {
    fn from(err: InvalidLocation) -> Self {
        Self::Domain(DomainError::InvalidLocation(err))
    }
}

impl ApplicationError {
    /// Whether the caller caused the failure
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Domain(e) => e.is_client_error(),
            Self::CityNotFound(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_location_converts_to_domain() {
        let err: ApplicationError = InvalidLocation::Longitude(190.0).into();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::InvalidLocation(_))
        ));
        assert!(err.to_string().contains("Longitude"));
    }

    #[test]
    fn city_not_found_message() {
        let err = ApplicationError::CityNotFound("Nowhereville".to_string());
        assert_eq!(err.to_string(), "City not found: Nowhereville");
    }

    #[test]
    fn client_error_classification() {
        assert!(ApplicationError::Domain(DomainError::InvalidCityName).is_client_error());
        assert!(ApplicationError::CityNotFound("x".to_string()).is_client_error());
        assert!(!ApplicationError::UpstreamUnavailable("down".to_string()).is_client_error());
        assert!(!ApplicationError::UpstreamParse("bad".to_string()).is_client_error());
        assert!(!ApplicationError::StoreFailure("io".to_string()).is_client_error());
        assert!(
            !ApplicationError::Domain(DomainError::InvalidDateTime("x".to_string()))
                .is_client_error()
        );
    }
}
