//! # Warp Route Body Codec
//!
//! Token transfers carry `[recipient (32)][amount (32, big-endian)]` in the
//! message body. Bytes past offset 64 are reserved for extensions and ignored
//! here.
//!
//! Amounts are `U256`. Text input wider than 256 bits or carrying a sign is
//! rejected with [`CodecError::AmountOutOfRange`] instead of being truncated.

use crate::error::{CodecError, CodecResult};
use ethereum_types::{H256, U256};
use types::{
    from_hex_string, strip_hex_prefix, to_hex_string, AddressCodec, WarpRouteMessage,
    WARP_AMOUNT_OFFSET, WARP_RECIPIENT_OFFSET, WARP_ROUTE_BODY_LEN,
};

/// Maximum hex digits of a 256-bit value
const U256_HEX_DIGITS: usize = 64;

/// Unpack recipient and amount from a message body
pub fn parse_warp_route_message(body: &[u8]) -> CodecResult<WarpRouteMessage> {
    if body.len() < WARP_ROUTE_BODY_LEN {
        return Err(CodecError::truncated_body(WARP_ROUTE_BODY_LEN, body.len()));
    }

    let recipient = H256::from_slice(&body[WARP_RECIPIENT_OFFSET..WARP_AMOUNT_OFFSET]);
    let amount = U256::from_big_endian(&body[WARP_AMOUNT_OFFSET..WARP_ROUTE_BODY_LEN]);

    Ok(WarpRouteMessage { recipient, amount })
}

/// Decode hex text, then [`parse_warp_route_message`]
pub fn parse_warp_route_message_hex(text: &str) -> CodecResult<WarpRouteMessage> {
    let bytes = from_hex_string(text).map_err(|e| CodecError::invalid_hex("warp route body", e))?;
    parse_warp_route_message(&bytes)
}

/// Pack recipient and amount into a 64-byte body
pub fn format_warp_route_message<R: AddressCodec>(
    recipient: &R,
    amount: U256,
) -> CodecResult<Vec<u8>> {
    let recipient = recipient
        .to_fixed32()
        .map_err(|e| CodecError::invalid_address("recipient", e))?;

    let mut body = vec![0u8; WARP_ROUTE_BODY_LEN];
    body[WARP_RECIPIENT_OFFSET..WARP_AMOUNT_OFFSET].copy_from_slice(recipient.as_bytes());
    amount.to_big_endian(&mut body[WARP_AMOUNT_OFFSET..WARP_ROUTE_BODY_LEN]);
    Ok(body)
}

/// Like [`format_warp_route_message`], rendered with the hex text convention
pub fn format_warp_route_message_hex<R: AddressCodec>(
    recipient: &R,
    amount: U256,
) -> CodecResult<String> {
    format_warp_route_message(recipient, amount).map(|body| to_hex_string(&body))
}

/// Parse a token amount from decimal or `0x`-prefixed hex text
///
/// Negative values and values above 2^256-1 fail with
/// [`CodecError::AmountOutOfRange`]. Text with no digits or non-decimal
/// characters fails with [`CodecError::InvalidAmount`], and malformed hex
/// digits fail with [`CodecError::InvalidHex`].
pub fn parse_amount(text: &str) -> CodecResult<U256> {
    let trimmed = text.trim();

    if trimmed.starts_with('-') {
        return Err(CodecError::amount_out_of_range(text));
    }

    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.starts_with("0x") || digits.starts_with("0X") {
        parse_hex_amount(text, strip_hex_prefix(digits))
    } else {
        parse_decimal_amount(text, digits)
    }
}

fn parse_decimal_amount(input: &str, digits: &str) -> CodecResult<U256> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::invalid_amount(input));
    }
    // Only overflow remains once the digits are validated
    U256::from_dec_str(digits).map_err(|_| CodecError::amount_out_of_range(input))
}

fn parse_hex_amount(input: &str, digits: &str) -> CodecResult<U256> {
    if digits.is_empty() {
        return Err(CodecError::invalid_amount(input));
    }
    let significant = digits.trim_start_matches('0');
    if significant.len() > U256_HEX_DIGITS {
        return Err(CodecError::amount_out_of_range(input));
    }

    let padded = if significant.len() % 2 == 0 {
        significant.to_string()
    } else {
        format!("0{significant}")
    };
    let bytes = from_hex_string(&padded).map_err(|e| CodecError::invalid_hex("amount", e))?;
    Ok(U256::from_big_endian(&bytes))
}
