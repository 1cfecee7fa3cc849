//! Canonical message identifier
//!
//! The identifier is a single Keccak-256 pass over the packed envelope bytes
//! with no domain-separation prefix. It is only interoperable when computed
//! over the exact output of the message codec.

use crate::error::{CodecError, CodecResult};
use crate::message::encode_message;
use ethereum_types::H256;
use sha3::{Digest, Keccak256};
use types::{from_hex_string, AetheriumMessage};

/// Keccak-256 of the packed message bytes
///
/// Total over any input, including the empty slice.
pub fn message_id(packed: &[u8]) -> H256 {
    H256::from_slice(&Keccak256::digest(packed))
}

/// Decode hex text, then [`message_id`]
pub fn message_id_hex(text: &str) -> CodecResult<H256> {
    let bytes = from_hex_string(text).map_err(|e| CodecError::invalid_hex("message", e))?;
    Ok(message_id(&bytes))
}

/// Identifier derivation for decoded messages
pub trait MessageIdExt {
    /// Encode to wire bytes, then hash
    fn id(&self) -> H256;
}

impl MessageIdExt for AetheriumMessage {
    fn id(&self) -> H256 {
        message_id(&encode_message(self))
    }
}
