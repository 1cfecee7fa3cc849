//! Error types for hex text decoding and chain address normalization
//!
//! Both are deterministic malformed-input conditions: they are returned at the
//! point of the offending call and never retried.

use thiserror::Error;

/// Errors produced while decoding the `0x`-prefixed hex text convention
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HexError {
    /// Hex digit sequence has an odd number of characters
    #[error("Invalid hex: odd number of digits ({digits})")]
    OddLength { digits: usize },

    /// Character outside `[0-9a-fA-F]`
    #[error("Invalid hex: unexpected character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },
}

/// Errors produced by the 32-byte address normalization contract
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Address text or bytes have a width that cannot be normalized to 32 bytes
    #[error("Invalid address: expected 20 or 32 bytes, got {got}")]
    InvalidWidth { got: usize },

    /// A 32-byte value does not strip back to the requested native width
    #[error("Invalid address: {value} has non-zero padding and is not a {native} address")]
    NonZeroPadding { value: String, native: &'static str },

    /// Address text is not valid hex
    #[error(transparent)]
    Hex(#[from] HexError),
}
