//! # Aetherium Types Library
//!
//! Data types shared by every producer and consumer of Aetherium cross-chain
//! messages.
//!
//! ## Design Philosophy
//!
//! - **Pure Data**: Structures and constants only; encoding rules live in `codec`
//! - **Wire-Form Addresses**: Senders and recipients are held as 32-byte values
//! - **256-bit Amounts**: Token amounts use `U256`, never a narrower machine integer
//! - **Immutable Values**: Every type is built once from parsed bytes or caller fields
//!
//! ## Quick Start
//!
//! ```rust
//! use types::{address_to_bytes32, AetheriumMessage};
//!
//! let sender = address_to_bytes32("0x5fbdb2315678afecb367f032d93f642f64180aa3").unwrap();
//! let recipient = address_to_bytes32("0xe7f1725e7734ce288f8367e1bb143e90bb3f0512").unwrap();
//! let message = AetheriumMessage::new(3, 1, 1000, sender, 2000, recipient, vec![0x12, 0x34]);
//! assert_eq!(message.encoded_len(), 79);
//! ```
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → libs/codec → services/message_tool
//!     ↑            ↓                ↓
//! Pure Data   Wire Rules       Hex/JSON CLI
//! ```

pub mod common;
pub mod protocol;

pub use common::errors::{AddressError, HexError};
pub use common::hex::{from_hex_string, strip_hex_prefix, to_hex_string};
pub use common::url::{is_https_url, is_relative_url, is_url};
pub use protocol::*;

pub use ethereum_types::{H160, H256, U256};
