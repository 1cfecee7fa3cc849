//! Service Configuration Module
//!
//! Loads logger settings from an optional TOML file, then lets the
//! `LOG_LEVEL` and `LOG_FORMAT` environment variables override them.

use crate::logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
use anyhow::{Context, Result};
use config_crate::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FORMAT: &str = "json";

/// Raw settings as read from file and environment
///
/// Values stay as text so an unrecognised level can fall back to the default
/// instead of aborting startup.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub log_level: String,
    pub log_format: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load from `path` (if given) with process environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Load with an explicit environment map in place of the process environment
    pub fn load_with_env(path: Option<&Path>, env: Option<Map<String, String>>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("log_level", DEFAULT_LOG_LEVEL)
            .context("Failed to set default log level")?
            .set_default("log_format", DEFAULT_LOG_FORMAT)
            .context("Failed to set default log format")?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(Environment::default().source(env));

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Resolve the text settings, falling back to defaults for unknown values
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig::new(
            self.log_level.parse().unwrap_or_default(),
            self.log_format.parse().unwrap_or_default(),
        )
    }

    /// Text settings that did not parse and were replaced by defaults
    pub fn rejected_settings(&self) -> Vec<(&'static str, &str)> {
        let mut rejected = Vec::new();
        if self.log_level.parse::<LogLevel>().is_err() {
            rejected.push(("log_level", self.log_level.as_str()));
        }
        if self.log_format.parse::<LogFormat>().is_err() {
            rejected.push(("log_format", self.log_format.as_str()));
        }
        rejected
    }
}

/// Load settings and install the global logger in one step
///
/// Rejected values are reported through the freshly installed logger.
pub fn init_from_config(path: Option<&Path>) -> Result<LoggingConfig> {
    let settings = ServiceConfig::load(path)?;
    let active = *init_logging(settings.logging())?;

    for (key, value) in settings.rejected_settings() {
        warn!(key, value, "ignoring unrecognised logging setting; using default");
    }

    Ok(active)
}
