//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidLocation;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Latitude or longitude outside the valid range
    #[error(transparent)]
    InvalidLocation(#[from] InvalidLocation),

    /// City name is empty or whitespace-only
    #[error("City name cannot be null or empty")]
    InvalidCityName,

    /// Date/time parsing error
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),
}

impl DomainError {
    /// Whether the error was caused by caller input
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidLocation(_) | Self::InvalidCityName)
    }
}
