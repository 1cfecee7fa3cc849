//! Wire layout constants for the message envelope and warp route body
//!
//! These offsets are the wire contract. Any change is a protocol version break.
//!
//! ```text
//! offset  0   1     5      9     41      45     77
//! field  [ver][nonce][origin][sender][dest][recipient][body...]
//! width   1    4      4      32      4      32        variable
//! ```

/// Domain identifier of a chain taking part in message passing
pub type Domain = u32;

pub const VERSION_OFFSET: usize = 0;
pub const NONCE_OFFSET: usize = 1;
pub const ORIGIN_OFFSET: usize = 5;
pub const SENDER_OFFSET: usize = 9;
pub const DESTINATION_OFFSET: usize = 41;
pub const RECIPIENT_OFFSET: usize = 45;
pub const BODY_OFFSET: usize = 77;

/// Length of the fixed-width fields preceding the body
pub const MESSAGE_HEADER_LEN: usize = BODY_OFFSET;

/// Width of every normalized address on the wire
pub const ADDRESS_LEN: usize = 32;

/// Width of a native EVM address before normalization
pub const EVM_ADDRESS_LEN: usize = 20;

/// Warp route body: `[recipient (32)][amount (32)]`
pub const WARP_RECIPIENT_OFFSET: usize = 0;
pub const WARP_AMOUNT_OFFSET: usize = 32;

/// Minimum warp route body length; trailing bytes are reserved for extensions
pub const WARP_ROUTE_BODY_LEN: usize = 64;
