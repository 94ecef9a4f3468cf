//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate. Every
//! field carries a serde default, so a missing file yields a runnable
//! configuration.

pub mod demo;
pub mod layout;
pub mod logging;
pub mod pricing;

use serde::{Deserialize, Serialize};

pub use self::demo::DemoConfig;
pub use self::layout::{FloorLayout, LayoutConfig};
pub use self::logging::LoggingConfig;
pub use self::pricing::PricingConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Hourly tariff.
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Floors and their spots.
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Demonstration traffic.
    #[serde(default)]
    pub demo: DemoConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default` with an environment-specific overlay and
    /// environment variables prefixed with `PARKHUB` (`__` separates
    /// nested keys, e.g. `PARKHUB__LOGGING__LEVEL=debug`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("PARKHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        Self::finish(config)
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Self::finish(config)
    }

    fn finish(config: config::Config) -> Result<Self, AppError> {
        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        parsed.layout.validate()?;
        Ok(parsed)
    }
}
