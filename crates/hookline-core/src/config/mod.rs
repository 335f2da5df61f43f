//! Configuration schemas.
//!
//! The root [`AppConfig`] is deserialized from an optional TOML file merged
//! with `HOOKLINE_`-prefixed environment variables via the `config` crate.
//! Every field has a default, so an empty source yields a usable config.

pub mod hooks;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::hooks::HookConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Hook pipeline settings.
    #[serde(default)]
    pub hooks: HookConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional. Environment variables such as
    /// `HOOKLINE_HOOKS__AFTER_PHASE=mirror_before` override file values.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("HOOKLINE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
