// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::cli::Args;
use crate::error::{RelayError, Result};
use config::{Config, Environment, File};
use std::path::PathBuf;

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. CLI arguments and `PORT` (highest)
    /// 2. Environment variables
    /// 3. Config file
    /// 4. Defaults (lowest)
    pub fn load(args: &Args) -> Result<Self> {
        let config_path = args.config.clone().unwrap_or_else(Self::default_config_path);

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // An explicit --config path must exist, the default one may not
            .add_source(File::from(config_path).required(args.config.is_some()))
            // Override with environment variables (e.g. TRANSLATE_RELAY_LOGGING__LEVEL)
            .add_source(
                Environment::with_prefix("TRANSLATE_RELAY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("server.host", args.host.clone())?
            .set_override_option("server.port", args.port.map(i64::from))?
            .build()
            .map_err(|e| RelayError::Config(e.to_string()))?;

        config.try_deserialize().map_err(|e| RelayError::Config(e.to_string()))
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".translate-relay")
            .join("config.toml")
    }
}
