//! Codec errors for message envelope and warp route processing
//!
//! Every variant describes deterministic malformed input. Callers treat them as
//! hard stops for the given bytes: nothing is retried and no partially parsed
//! fields are returned.

use thiserror::Error;
use types::{AddressError, HexError};

/// Codec errors with diagnostic context
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Buffer is shorter than the fixed-width envelope fields
    #[error("Truncated message: need at least {need} bytes, got {got}")]
    TruncatedMessage { need: usize, got: usize },

    /// Warp route body is shorter than recipient + amount
    #[error("Truncated warp route body: need at least {need} bytes, got {got}")]
    TruncatedBody { need: usize, got: usize },

    /// Address cannot be normalized to or from the 32-byte wire form
    #[error("Invalid address for {field}: {source}")]
    InvalidAddress {
        field: &'static str,
        #[source]
        source: AddressError,
    },

    /// Integer field does not fit its wire width
    #[error("Integer overflow: {field} = {value} exceeds maximum {max}")]
    IntegerOverflow {
        field: &'static str,
        value: u64,
        max: u64,
    },

    /// Token amount is negative or wider than 256 bits
    #[error("Amount out of range: {input:?} is not within [0, 2^256-1]")]
    AmountOutOfRange { input: String },

    /// Token amount text is not a decimal or `0x` hex number
    #[error("Invalid amount: {input:?} is not a decimal or 0x-prefixed hex number")]
    InvalidAmount { input: String },

    /// Hex text could not be decoded
    #[error("Invalid hex in {context}: {source}")]
    InvalidHex {
        context: &'static str,
        #[source]
        source: HexError,
    },
}

impl CodecError {
    pub fn truncated_message(need: usize, got: usize) -> Self {
        Self::TruncatedMessage { need, got }
    }

    pub fn truncated_body(need: usize, got: usize) -> Self {
        Self::TruncatedBody { need, got }
    }

    /// Attach the field name to an address normalization failure
    pub fn invalid_address(field: &'static str, source: AddressError) -> Self {
        Self::InvalidAddress { field, source }
    }

    pub fn integer_overflow(field: &'static str, value: u64, max: u64) -> Self {
        Self::IntegerOverflow { field, value, max }
    }

    pub fn amount_out_of_range(input: impl Into<String>) -> Self {
        Self::AmountOutOfRange {
            input: input.into(),
        }
    }

    pub fn invalid_amount(input: impl Into<String>) -> Self {
        Self::InvalidAmount {
            input: input.into(),
        }
    }

    pub fn invalid_hex(context: &'static str, source: HexError) -> Self {
        Self::InvalidHex { context, source }
    }
}

/// Result type for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;
