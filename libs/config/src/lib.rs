//! # Aetherium Logging Configuration
//!
//! Centralized logger configuration for Aetherium tools and services.
//!
//! ## Features
//!
//! - **Levels**: trace, debug, info, warn, error, off (`none` accepted for `off`)
//! - **Formats**: structured JSON records (default) or human-readable lines
//! - **Sources**: optional TOML file, overridden by `LOG_LEVEL` / `LOG_FORMAT`
//! - **Single Initialization**: the subscriber is installed once per process
//!
//! ## Usage
//!
//! ```rust,no_run
//! use config::{init_from_config, logging_config};
//!
//! init_from_config(None)?;
//! println!("logging at {}", logging_config().level);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod logging;
pub mod service_config;

pub use logging::{
    build_filter, init_logging, logging_config, LogFormat, LogLevel, LoggingConfig,
};
pub use service_config::{init_from_config, ServiceConfig};
