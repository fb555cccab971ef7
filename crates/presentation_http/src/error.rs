//! API error handling
//!
//! Maps application failures to HTTP statuses and JSON bodies. In production
//! mode, internal errors return generic messages without details.

use std::sync::atomic::{AtomicBool, Ordering};

use application::ApplicationError;
use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Global flag to control error detail exposure
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

/// Configure whether internal error details should be exposed in responses.
///
/// Set to `false` in production so store and upstream failure details are not
/// leaked to clients.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

/// Check if internal error details should be exposed
fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "error": "Latitude must be between -90 and 90 degrees, got 91",
    "code": "bad_request"
}))]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// HTTP status for this error
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Build the response body, hiding server-side details unless `expose` is set
    pub fn body(&self, expose: bool) -> ErrorResponse {
        let (code, error, details) = match self {
            Self::BadRequest(msg) => ("bad_request", msg.clone(), None),
            Self::NotFound(msg) => ("not_found", msg.clone(), None),
            Self::BadGateway(msg) => (
                "bad_gateway",
                "Upstream weather service returned an unexpected response".to_string(),
                expose.then(|| msg.clone()),
            ),
            Self::ServiceUnavailable(msg) => (
                "service_unavailable",
                "Upstream weather service unavailable".to_string(),
                expose.then(|| msg.clone()),
            ),
            Self::Internal(msg) => (
                "internal_error",
                "An internal error occurred".to_string(),
                expose.then(|| msg.clone()),
            ),
        };

        ErrorResponse {
            error,
            code: code.to_string(),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status().is_server_error() {
            tracing::warn!(error = %self, "Request failed");
        }
        let body = self.body(should_expose_details());
        (self.status(), Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) if e.is_client_error() => Self::BadRequest(e.to_string()),
            ApplicationError::Domain(e) => Self::Internal(e.to_string()),
            ApplicationError::CityNotFound(city) => {
                Self::NotFound(format!("City not found: {city}"))
            },
            ApplicationError::UpstreamUnavailable(msg) => Self::ServiceUnavailable(msg),
            ApplicationError::UpstreamParse(msg) => Self::BadGateway(msg),
            ApplicationError::StoreFailure(msg) | ApplicationError::Internal(msg) => {
                Self::Internal(msg)
            },
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
