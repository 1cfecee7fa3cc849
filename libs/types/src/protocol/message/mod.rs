//! Cross-chain message envelope, logical form
//!
//! An `AetheriumMessage` is the decoded representation of the packed envelope.
//! Addresses are held in their 32-byte wire form; the body is opaque bytes
//! interpreted by higher layers (e.g. a warp route transfer).
//!
//! ```text
//! ┌─────┬───────┬────────┬────────┬──────┬───────────┬──────────┐
//! │ ver │ nonce │ origin │ sender │ dest │ recipient │ body ... │
//! │  1  │   4   │   4    │   32   │  4   │    32     │ variable │
//! └─────┴───────┴────────┴────────┴──────┴───────────┴──────────┘
//! ```
//!
//! Encoding and parsing live in the codec crate.

use crate::common::hex::hex_bytes;
use crate::protocol::constants::{Domain, MESSAGE_HEADER_LEN};
use ethereum_types::H256;
use serde::{Deserialize, Serialize};

/// Decoded message envelope
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AetheriumMessage {
    /// Protocol version, opaque to the codec
    pub version: u8,
    /// Sequence number assigned by the origin mailbox
    pub nonce: u32,
    /// Source domain
    pub origin: Domain,
    /// Sender in 32-byte wire form
    pub sender: H256,
    /// Target domain
    pub destination: Domain,
    /// Recipient in 32-byte wire form
    pub recipient: H256,
    /// Payload; occupies the remainder of the packed buffer
    #[serde(with = "hex_bytes")]
    pub body: Vec<u8>,
}

impl AetheriumMessage {
    pub fn new(
        version: u8,
        nonce: u32,
        origin: Domain,
        sender: H256,
        destination: Domain,
        recipient: H256,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            version,
            nonce,
            origin,
            sender,
            destination,
            recipient,
            body: body.into(),
        }
    }

    /// Packed length on the wire: 77 + body length
    #[inline]
    pub fn encoded_len(&self) -> usize {
        MESSAGE_HEADER_LEN + self.body.len()
    }
}
