//! Narrowing of caller-supplied integers to their wire widths
//!
//! Callers that hold wider integers (CLI arguments, JSON input) narrow through
//! these before packing. Values are never truncated.

use crate::error::{CodecError, CodecResult};

/// Narrow to the 1-byte `version` width
pub fn checked_u8(field: &'static str, value: u64) -> CodecResult<u8> {
    u8::try_from(value).map_err(|_| CodecError::integer_overflow(field, value, u8::MAX as u64))
}

/// Narrow to the 4-byte `nonce` / domain width
pub fn checked_u32(field: &'static str, value: u64) -> CodecResult<u32> {
    u32::try_from(value).map_err(|_| CodecError::integer_overflow(field, value, u32::MAX as u64))
}
