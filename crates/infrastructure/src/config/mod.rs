//! Application configuration
//!
//! Split into focused sub-modules:
//! - `database`: thermal state storage backend and SQLite settings
//!
//! Values come from an optional `config.toml` and are overridden by
//! `PESCA_*` environment variables (e.g. `PESCA_DATABASE_PATH`,
//! `PESCA_LOGGING_LEVEL`).

mod database;

use application::services::DEFAULT_RETENTION_DAYS;
use domain::services::thermal::{ThermalModel, ThermalParameters};
use serde::{Deserialize, Serialize};

pub use database::{DatabaseConfig, StorageBackend};
pub use integration_weather::WeatherConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Open-Meteo client settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Thermal state storage
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Thermal model coefficients and retention
    #[serde(default)]
    pub thermal: ThermalConfig,

    /// Zone and species catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Thermal model configuration
///
/// Model coefficients sit directly in the `[thermal]` table next to
/// `retention_days`; any coefficient left out keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalConfig {
    #[serde(flatten)]
    pub params: ThermalParameters,

    /// Days a (zone, month) state may go without updates before it is pruned
    #[serde(default = "default_retention_days")]
    pub retention_days: i64,
}

const fn default_retention_days() -> i64 {
    DEFAULT_RETENTION_DAYS
}

impl Default for ThermalConfig {
    fn default() -> Self {
        Self {
            params: ThermalParameters::default(),
            retention_days: default_retention_days(),
        }
    }
}

impl ThermalConfig {
    /// Build the model from the configured coefficients
    #[must_use]
    pub fn model(&self) -> ThermalModel {
        ThermalModel::new(self.params.clone())
    }
}

/// Catalog source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a catalog TOML file; the built-in Lombardy catalog when unset
    #[serde(default)]
    pub path: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load configuration from an explicit file, still honoring the environment
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., PESCA_DATABASE_BACKEND)
            .add_source(
                config::Environment::with_prefix("PESCA")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
