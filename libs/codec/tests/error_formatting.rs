//! Error formatting tests for codec diagnostics
//!
//! Validates that error messages carry the byte counts and field names needed
//! to debug malformed input, with proper Debug vs Display formatting.

use codec::{checked_u32, checked_u8, parse_amount, parse_message_hex, CodecError};
use std::error::Error as _;
use types::{AddressError, HexError};

#[test]
fn test_truncated_message_formatting() {
    let error = CodecError::truncated_message(77, 16);

    let debug_output = format!("{:?}", error);
    assert!(debug_output.contains("TruncatedMessage"));
    assert!(debug_output.contains("77"));
    assert!(debug_output.contains("16"));

    let display_output = format!("{}", error);
    assert!(display_output.contains("Truncated message"));
    assert!(display_output.contains("need at least 77 bytes"));
    assert!(display_output.contains("got 16"));
}

#[test]
fn test_truncated_body_formatting() {
    let display_output = CodecError::truncated_body(64, 63).to_string();
    assert!(display_output.contains("warp route body"));
    assert!(display_output.contains("need at least 64 bytes, got 63"));
}

#[test]
fn test_invalid_address_keeps_source() {
    let error = CodecError::invalid_address("sender", AddressError::InvalidWidth { got: 25 });

    let display_output = error.to_string();
    assert!(display_output.contains("Invalid address for sender"));
    assert!(display_output.contains("got 25"));

    let source = error.source().expect("address error should be chained");
    assert!(source.to_string().contains("expected 20 or 32 bytes"));
}

#[test]
fn test_integer_overflow_formatting() {
    let version = checked_u8("version", 300).unwrap_err();
    assert_eq!(
        version.to_string(),
        "Integer overflow: version = 300 exceeds maximum 255"
    );

    let origin = checked_u32("origin", u64::MAX).unwrap_err();
    assert!(origin.to_string().contains("exceeds maximum 4294967295"));
}

#[test]
fn test_amount_out_of_range_formatting() {
    let error = parse_amount("-5").unwrap_err();
    assert_eq!(
        error,
        CodecError::AmountOutOfRange {
            input: "-5".to_string()
        }
    );
    assert!(error.to_string().contains("[0, 2^256-1]"));
}

#[test]
fn test_invalid_amount_formatting() {
    let error = parse_amount("12a").unwrap_err();
    assert_eq!(
        error,
        CodecError::InvalidAmount {
            input: "12a".to_string()
        }
    );
    assert!(error.to_string().contains("not a decimal or 0x-prefixed hex number"));
    assert!(!error.to_string().contains("2^256"));
}

#[test]
fn test_invalid_hex_formatting() {
    let error = parse_message_hex("0xabc").unwrap_err();
    assert_eq!(
        error,
        CodecError::InvalidHex {
            context: "message",
            source: HexError::OddLength { digits: 3 }
        }
    );
    assert!(error.to_string().contains("Invalid hex in message"));
}
