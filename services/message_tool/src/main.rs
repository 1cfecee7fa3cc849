//! `aetherium-msg` - encode, decode and identify Aetherium messages
//!
//! Usage:
//!   aetherium-msg format --message-version 3 --nonce 1 --origin 1000 \
//!       --sender 0x5fbd... --destination 2000 --recipient 0xe7f1... --body 0x1234
//!   aetherium-msg parse 0x0300000001...
//!   aetherium-msg id 0x0300000001...
//!   aetherium-msg warp-parse 0x0000...
//!   aetherium-msg warp-format --recipient 0xe7f1... --amount 1000000000000000000

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::{init_logging, LogFormat, LogLevel, ServiceConfig};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "aetherium-msg")]
#[command(about = "Encode, decode and identify Aetherium cross-chain messages")]
#[command(version)]
pub struct Cli {
    /// Optional TOML file with log_level / log_format
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off); overrides config and LOG_LEVEL
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Log format (pretty, json); overrides config and LOG_FORMAT
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pack envelope fields into message hex
    Format {
        /// Protocol version (0-255)
        #[arg(long = "message-version")]
        message_version: u64,
        /// Sequence number (32-bit)
        #[arg(long)]
        nonce: u64,
        /// Origin domain id (32-bit)
        #[arg(long)]
        origin: u64,
        /// Sender address, 20 or 32 bytes of hex
        #[arg(long)]
        sender: String,
        /// Destination domain id (32-bit)
        #[arg(long)]
        destination: u64,
        /// Recipient address, 20 or 32 bytes of hex
        #[arg(long)]
        recipient: String,
        /// Body as hex
        #[arg(long, default_value = "0x")]
        body: String,
        /// Also print the message id
        #[arg(long)]
        with_id: bool,
    },
    /// Decode message hex into JSON fields
    Parse {
        /// Packed message hex
        message: String,
        /// Also decode the body as a warp route transfer
        #[arg(long)]
        warp: bool,
    },
    /// Compute the message id of packed message hex
    Id {
        /// Packed message hex
        message: String,
    },
    /// Decode a warp route body into recipient and amount
    WarpParse {
        /// Body hex
        body: String,
    },
    /// Pack a warp route body
    WarpFormat {
        /// Recipient address, 20 or 32 bytes of hex
        #[arg(long)]
        recipient: String,
        /// Amount as decimal or 0x hex, up to 2^256-1
        #[arg(long)]
        amount: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_cli_logging(&cli)?;

    let output = commands::run(&cli.command)?;
    println!("{output}");

    Ok(())
}

fn init_cli_logging(cli: &Cli) -> Result<()> {
    let settings = ServiceConfig::load(cli.config.as_deref())
        .context("Failed to load logging configuration")?;

    let mut logging = settings.logging();
    if let Some(level) = cli.log_level {
        logging.level = level;
    }
    if let Some(format) = cli.log_format {
        logging.format = format;
    }

    let active = init_logging(logging)?;
    debug!(level = %active.level, format = %active.format, command = ?cli.command, "starting");

    Ok(())
}
