//! Application layer - Use cases and orchestration
//!
//! Contains the weather lookup use case and the port definitions it depends on.
//! Infrastructure adapters implement the ports; the HTTP layer drives the service.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
