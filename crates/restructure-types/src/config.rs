//! Configuration loading for the restructurer.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! Default config file lives at ~/.config/json-restructure/config.toml.

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::RestructureError;
use crate::policy::KeyCollisionPolicy;
use crate::DEFAULT_THRESHOLD;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Minimum array length treated as a vector.
    /// Signed so that 0 and negative values surface as validation errors.
    #[serde(default = "default_threshold")]
    pub threshold: i64,

    /// Reject documents where a derived `_id` key collides with an existing key
    #[serde(default)]
    pub strict_keys: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_threshold() -> i64 {
    DEFAULT_THRESHOLD
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            strict_keys: false,
            log_level: default_log_level(),
        }
    }
}

/// Location of the per-user config file (without extension).
fn default_config_path() -> PathBuf {
    ProjectDirs::from("", "", "json-restructure")
        .map(|p| p.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config")
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/json-restructure/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (RESTRUCTURE_*)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, RestructureError> {
        let mut builder = Config::builder()
            .set_default("threshold", default_threshold())
            .map_err(|e| RestructureError::Config(e.to_string()))?
            .set_default("strict_keys", false)
            .map_err(|e| RestructureError::Config(e.to_string()))?
            .set_default("log_level", default_log_level())
            .map_err(|e| RestructureError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path().to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // RESTRUCTURE_THRESHOLD, RESTRUCTURE_LOG_LEVEL, RESTRUCTURE_STRICT_KEYS
        builder = builder.add_source(
            Environment::with_prefix("RESTRUCTURE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| RestructureError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| RestructureError::Config(e.to_string()))
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), RestructureError> {
        if self.threshold <= 0 {
            return Err(RestructureError::Config(format!(
                "threshold must be a positive integer, got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Collision policy implied by `strict_keys`.
    pub fn collision_policy(&self) -> KeyCollisionPolicy {
        KeyCollisionPolicy::from_strict(self.strict_keys)
    }
}
