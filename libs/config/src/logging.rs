//! Process-wide logger setup
//!
//! Level and format are resolved once at startup and installed as the global
//! `tracing` subscriber. Library crates only emit events; they never read or
//! change this configuration.

use anyhow::{anyhow, bail, Result};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

static ACTIVE_CONFIG: OnceCell<LoggingConfig> = OnceCell::new();

/// Log severity, matching the agent level options (`off` rather than `silent`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }

    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Off => LevelFilter::OFF,
        }
    }
}

impl FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            // "none" kept for backwards compatibility with older agent configs
            "off" | "none" | "silent" => Ok(LogLevel::Off),
            other => bail!("unknown log level {other:?}"),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output shape of log records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// Structured line-delimited JSON records
    #[default]
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow!("unknown log format {other:?}")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Resolved logger configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: LogLevel, format: LogFormat) -> Self {
        Self { level, format }
    }
}

/// Install the global subscriber for `config`
///
/// Only the first call installs anything; later calls return the configuration
/// that is already active.
pub fn init_logging(config: LoggingConfig) -> Result<&'static LoggingConfig> {
    let mut installed = false;
    let active = ACTIVE_CONFIG.get_or_try_init(|| {
        install_subscriber(&config)?;
        installed = true;
        Ok::<_, anyhow::Error>(config)
    })?;

    if installed {
        debug!(level = %active.level, format = %active.format, "logger initialized");
    } else if *active != config {
        debug!(
            requested_level = %config.level,
            active_level = %active.level,
            "logger already initialized; keeping active configuration"
        );
    }

    Ok(active)
}

/// Configuration of the installed logger, or the default if none is installed
pub fn logging_config() -> LoggingConfig {
    ACTIVE_CONFIG.get().copied().unwrap_or_default()
}

/// Event filter with the configured level as default directive
///
/// `directives` uses `RUST_LOG` syntax (`codec=trace,warn`). When present it
/// replaces the configured level; malformed entries are skipped.
pub fn build_filter(level: LogLevel, directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.to_level_filter().into())
        .parse_lossy(directives.unwrap_or_default())
}

fn install_subscriber(config: &LoggingConfig) -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(config.level, directives.as_deref());

    // stdout carries command output; records always go to stderr
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter);

    let result = match config.format {
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
        LogFormat::Pretty => builder.with_target(false).try_init(),
    };

    result.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
