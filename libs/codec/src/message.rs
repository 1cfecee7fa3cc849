//! # Message Envelope Codec
//!
//! ## Purpose
//!
//! Packs the seven envelope fields into the fixed wire layout and unpacks them
//! again. Integers are big-endian, addresses are normalized to 32 bytes through
//! [`AddressCodec`], and the body is appended without a length prefix: its end
//! is the end of the buffer.
//!
//! ## Wire Layout
//!
//! ```text
//! offset  0   1     5      9     41      45     77
//! field  [ver][nonce][origin][sender][dest][recipient][body...]
//! width   1    4      4      32      4      32        variable
//! ```
//!
//! `parse_message(&format_message(..)?)` reproduces the input fields exactly.
//! Parsing does not validate version, domains or body content.

use crate::error::{CodecError, CodecResult};
use ethereum_types::H256;
use tracing::trace;
use types::{
    from_hex_string, to_hex_string, AddressCodec, AetheriumMessage, Domain, BODY_OFFSET,
    DESTINATION_OFFSET, MESSAGE_HEADER_LEN, NONCE_OFFSET, ORIGIN_OFFSET, RECIPIENT_OFFSET,
    SENDER_OFFSET, VERSION_OFFSET,
};

/// Pack envelope fields, normalizing both addresses to their wire form
///
/// Fails with [`CodecError::InvalidAddress`] if either address cannot be
/// normalized.
pub fn format_message<S, R>(
    version: u8,
    nonce: u32,
    origin: Domain,
    sender: &S,
    destination: Domain,
    recipient: &R,
    body: &[u8],
) -> CodecResult<Vec<u8>>
where
    S: AddressCodec,
    R: AddressCodec,
{
    let sender = sender
        .to_fixed32()
        .map_err(|e| CodecError::invalid_address("sender", e))?;
    let recipient = recipient
        .to_fixed32()
        .map_err(|e| CodecError::invalid_address("recipient", e))?;

    Ok(pack(
        version,
        nonce,
        origin,
        &sender,
        destination,
        &recipient,
        body,
    ))
}

/// Pack a message whose addresses are already in wire form
pub fn encode_message(message: &AetheriumMessage) -> Vec<u8> {
    pack(
        message.version,
        message.nonce,
        message.origin,
        &message.sender,
        message.destination,
        &message.recipient,
        &message.body,
    )
}

/// Like [`format_message`], rendered with the hex text convention
pub fn format_message_hex<S, R>(
    version: u8,
    nonce: u32,
    origin: Domain,
    sender: &S,
    destination: Domain,
    recipient: &R,
    body: &[u8],
) -> CodecResult<String>
where
    S: AddressCodec,
    R: AddressCodec,
{
    format_message(version, nonce, origin, sender, destination, recipient, body)
        .map(|bytes| to_hex_string(&bytes))
}

fn pack(
    version: u8,
    nonce: u32,
    origin: Domain,
    sender: &H256,
    destination: Domain,
    recipient: &H256,
    body: &[u8],
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(MESSAGE_HEADER_LEN + body.len());
    buf.push(version);
    buf.extend_from_slice(&nonce.to_be_bytes());
    buf.extend_from_slice(&origin.to_be_bytes());
    buf.extend_from_slice(sender.as_bytes());
    buf.extend_from_slice(&destination.to_be_bytes());
    buf.extend_from_slice(recipient.as_bytes());
    buf.extend_from_slice(body);

    debug_assert_eq!(buf.len(), MESSAGE_HEADER_LEN + body.len());
    trace!(len = buf.len(), nonce, origin, destination, "packed message");
    buf
}

/// Unpack an envelope; everything from offset 77 onward is the body
///
/// Fails with [`CodecError::TruncatedMessage`] when fewer than 77 bytes are
/// supplied. There is no partial result.
pub fn parse_message(bytes: &[u8]) -> CodecResult<AetheriumMessage> {
    if bytes.len() < MESSAGE_HEADER_LEN {
        return Err(CodecError::truncated_message(MESSAGE_HEADER_LEN, bytes.len()));
    }

    Ok(AetheriumMessage {
        version: bytes[VERSION_OFFSET],
        nonce: read_u32_be(bytes, NONCE_OFFSET),
        origin: read_u32_be(bytes, ORIGIN_OFFSET),
        sender: H256::from_slice(&bytes[SENDER_OFFSET..DESTINATION_OFFSET]),
        destination: read_u32_be(bytes, DESTINATION_OFFSET),
        recipient: H256::from_slice(&bytes[RECIPIENT_OFFSET..BODY_OFFSET]),
        body: bytes[BODY_OFFSET..].to_vec(),
    })
}

/// Decode hex text, then [`parse_message`]
pub fn parse_message_hex(text: &str) -> CodecResult<AetheriumMessage> {
    let bytes = from_hex_string(text).map_err(|e| CodecError::invalid_hex("message", e))?;
    parse_message(&bytes)
}

#[inline]
fn read_u32_be(bytes: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_be_bytes(word)
}
