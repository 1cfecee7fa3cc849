//! # Aetherium Message Codec
//!
//! ## Purpose
//!
//! This crate contains the "Rules" layer for Aetherium cross-chain messages:
//! - Envelope packing and unpacking (`format_message` / `parse_message`)
//! - Canonical message identifiers (`message_id`)
//! - Warp route token transfer bodies (`parse_warp_route_message`)
//! - Width-checked narrowing of caller integers
//!
//! ## Integration Points
//!
//! - **Message Construction**: callers assemble fields, `format_message` packs them
//! - **Identifier Derivation**: `message_id` over the packed bytes, never over fields
//! - **Token Transfers**: message `body` → `parse_warp_route_message` → recipient + amount
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] → services/message_tool
//!     ↑           ↓                ↓
//! Pure Data   Wire Rules      Hex/JSON CLI
//! AetheriumMessage  format/parse/id
//! ```
//!
//! ## What This Crate Contains
//! - Big-endian fixed-width envelope codec
//! - Keccak-256 identifier over packed bytes
//! - Warp route body codec with 256-bit amounts
//! - `CodecError` taxonomy
//!
//! ## What This Crate Does NOT Contain
//! - Message transport or delivery
//! - Signature checks or on-chain execution semantics
//! - Validation that versions or domains are registered
//!
//! ## Concurrency
//!
//! Every function is pure and synchronous over caller-owned buffers; nothing is
//! retained past the call, so all of them are safe to call from any thread.

pub mod error;
pub mod message;
pub mod message_id;
pub mod numeric;
pub mod warp_route;

pub use error::{CodecError, CodecResult};
pub use message::{
    encode_message, format_message, format_message_hex, parse_message, parse_message_hex,
};
pub use message_id::{message_id, message_id_hex, MessageIdExt};
pub use numeric::{checked_u32, checked_u8};
pub use warp_route::{
    format_warp_route_message, format_warp_route_message_hex, parse_amount,
    parse_warp_route_message, parse_warp_route_message_hex,
};

// Re-export the data types so codec users need a single import
pub use types::{AddressCodec, AetheriumMessage, ChainAddress, Domain, WarpRouteMessage};
