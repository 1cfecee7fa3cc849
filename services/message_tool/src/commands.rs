//! Subcommand execution
//!
//! Each command returns its stdout text so it can be tested without a process.

use crate::Commands;
use anyhow::{Context, Result};
use codec::{
    checked_u32, checked_u8, format_message, format_warp_route_message, message_id,
    parse_amount, parse_message, parse_warp_route_message, ChainAddress, CodecError,
};
use serde_json::json;
use tracing::{debug, info};
use types::{from_hex_string, to_hex_string};

pub fn run(command: &Commands) -> Result<String> {
    match command {
        Commands::Format {
            message_version,
            nonce,
            origin,
            sender,
            destination,
            recipient,
            body,
            with_id,
        } => {
            let packed = format_message(
                checked_u8("version", *message_version)?,
                checked_u32("nonce", *nonce)?,
                checked_u32("origin", *origin)?,
                &parse_address("sender", sender)?,
                checked_u32("destination", *destination)?,
                &parse_address("recipient", recipient)?,
                &decode_hex("body", body)?,
            )?;
            info!(len = packed.len(), "formatted message");

            let mut output = to_hex_string(&packed);
            if *with_id {
                output.push('\n');
                output.push_str(&to_hex_string(message_id(&packed).as_bytes()));
            }
            Ok(output)
        }

        Commands::Parse { message, warp } => {
            let packed = decode_hex("message", message)?;
            let parsed = parse_message(&packed)?;
            debug!(body_len = parsed.body.len(), "parsed message");

            let mut output = json!({
                "id": to_hex_string(message_id(&packed).as_bytes()),
                "message": parsed,
            });
            if *warp {
                let transfer = parse_warp_route_message(&parsed.body)
                    .context("Message body is not a warp route transfer")?;
                output["warp_route"] = serde_json::to_value(transfer)?;
            }
            Ok(serde_json::to_string_pretty(&output)?)
        }

        Commands::Id { message } => {
            let packed = decode_hex("message", message)?;
            Ok(to_hex_string(message_id(&packed).as_bytes()))
        }

        Commands::WarpParse { body } => {
            let transfer = parse_warp_route_message(&decode_hex("warp route body", body)?)?;
            Ok(serde_json::to_string_pretty(&transfer)?)
        }

        Commands::WarpFormat { recipient, amount } => {
            let body = format_warp_route_message(
                &parse_address("recipient", recipient)?,
                parse_amount(amount)?,
            )?;
            Ok(to_hex_string(&body))
        }
    }
}

fn parse_address(field: &'static str, text: &str) -> Result<ChainAddress, CodecError> {
    text.parse()
        .map_err(|e| CodecError::invalid_address(field, e))
}

fn decode_hex(context: &'static str, text: &str) -> Result<Vec<u8>, CodecError> {
    from_hex_string(text).map_err(|e| CodecError::invalid_hex(context, e))
}
