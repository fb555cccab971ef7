//! SkyCache HTTP presentation layer
//!
//! This crate provides the HTTP API for SkyCache.

pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::{ApiError, set_expose_internal_errors};
pub use routes::create_router;
pub use state::AppState;
