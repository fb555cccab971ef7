//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server and logging settings
//! - `database`: Weather store settings
//!
//! Upstream weather settings reuse [`integration_weather::WeatherConfig`].

mod database;
mod server;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use database::{DatabaseConfig, StoreBackend};
pub use integration_weather::WeatherConfig;
pub use server::{LogFormat, ServerConfig};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "SKYCACHE";

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_VAR: &str = "SKYCACHE_CONFIG";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Application environment (development or production)
///
/// Production hides internal error details from API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather store configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Upstream forecast and geocoding configuration
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Sources, lowest precedence first: built-in defaults, `config.toml` in the
    /// working directory (or the file named by `SKYCACHE_CONFIG`), then
    /// `SKYCACHE_*` environment variables using `__` between sections, e.g.
    /// `SKYCACHE_SERVER__PORT=8080`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let file = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "config".to_string());
        Self::load_from(&file)
    }

    /// Load configuration using the given file (extension optional) and the environment
    pub fn load_from(file: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let file = file.as_ref().to_string_lossy().into_owned();
        let builder = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .add_source(config::File::with_name(&file).required(false))
            // Override with environment variables (e.g., SKYCACHE_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Whether the service runs in production
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
