//! # Pinned Message Vectors
//!
//! Byte-exact vectors for the envelope layout and identifier. Any change to
//! these values is a wire break.

use codec::{
    encode_message, format_message, format_message_hex, message_id, message_id_hex,
    parse_message, parse_message_hex, parse_warp_route_message, CodecError, MessageIdExt,
};
use hex_literal::hex;
use types::{address_to_bytes32, H160, H256, U256};

const SENDER: [u8; 20] = hex!("5fbdb2315678afecb367f032d93f642f64180aa3");
const RECIPIENT: [u8; 20] = hex!("e7f1725e7734ce288f8367e1bb143e90bb3f0512");

const PACKED_HEX: &str = "0x0300000001000003e80000000000000000000000005fbdb2315678afecb367f032d93f642f64180aa3000007d0000000000000000000000000e7f1725e7734ce288f8367e1bb143e90bb3f05121234";
const PACKED_ID: [u8; 32] = hex!("f9594ca4f4bb51ddf3f12f7813d9326e48be4163c5d20101bec0f0d8b29927e5");
const EMPTY_BODY_ID: [u8; 32] =
    hex!("70ae048ef397cfd3e435d9d0753f80b178c7b8a3f6b1d2d29767fd7c1c502b06");

#[test]
fn test_format_matches_pinned_vector() {
    let packed = format_message_hex(
        3,
        1,
        1000,
        &H160(SENDER),
        2000,
        &H160(RECIPIENT),
        &[0x12, 0x34],
    )
    .unwrap();

    assert_eq!(packed, PACKED_HEX);
}

#[test]
fn test_parse_reproduces_pinned_fields() {
    let message = parse_message_hex(PACKED_HEX).unwrap();

    assert_eq!(message.version, 3);
    assert_eq!(message.nonce, 1);
    assert_eq!(message.origin, 1000);
    assert_eq!(message.destination, 2000);
    assert_eq!(
        message.sender,
        address_to_bytes32("0x5fbdb2315678afecb367f032d93f642f64180aa3").unwrap()
    );
    assert_eq!(
        message.recipient,
        address_to_bytes32("0xe7f1725e7734ce288f8367e1bb143e90bb3f0512").unwrap()
    );
    assert_eq!(message.body, vec![0x12, 0x34]);

    // Unprefixed text decodes to the same message
    let unprefixed = parse_message_hex(PACKED_HEX.trim_start_matches("0x")).unwrap();
    assert_eq!(unprefixed, message);
}

#[test]
fn test_identifier_matches_pinned_hash() {
    assert_eq!(message_id_hex(PACKED_HEX).unwrap(), H256(PACKED_ID));

    let message = parse_message_hex(PACKED_HEX).unwrap();
    assert_eq!(message.id(), H256(PACKED_ID));
    assert_eq!(message_id(&encode_message(&message)), H256(PACKED_ID));
}

#[test]
fn test_exact_header_length_parses_with_empty_body() {
    let packed = format_message(3, 1, 1000, &H160(SENDER), 2000, &H160(RECIPIENT), &[]).unwrap();
    assert_eq!(packed.len(), 77);

    let message = parse_message(&packed).unwrap();
    assert!(message.body.is_empty());
    assert_eq!(message.id(), H256(EMPTY_BODY_ID));

    let err = parse_message(&packed[..76]).unwrap_err();
    assert_eq!(err, CodecError::TruncatedMessage { need: 77, got: 76 });
}

#[test]
fn test_id_over_independently_assembled_bytes_differs() {
    // Same logical fields, addresses right-padded instead of left-padded
    let mut wrong = Vec::new();
    wrong.push(3u8);
    wrong.extend_from_slice(&1u32.to_be_bytes());
    wrong.extend_from_slice(&1000u32.to_be_bytes());
    wrong.extend_from_slice(&SENDER);
    wrong.extend_from_slice(&[0u8; 12]);
    wrong.extend_from_slice(&2000u32.to_be_bytes());
    wrong.extend_from_slice(&RECIPIENT);
    wrong.extend_from_slice(&[0u8; 12]);
    wrong.extend_from_slice(&[0x12, 0x34]);

    assert_eq!(wrong.len(), 79);
    assert_ne!(message_id(&wrong), H256(PACKED_ID));
}

#[test]
fn test_warp_route_body_inside_message() {
    let body = hex!(
        "000000000000000000000000e7f1725e7734ce288f8367e1bb143e90bb3f0512"
        "0000000000000000000000000000000000000000000000000de0b6b3a7640000"
    );
    let packed = format_message(3, 7, 1000, &H160(SENDER), 2000, &H160(RECIPIENT), &body).unwrap();

    let message = parse_message(&packed).unwrap();
    let transfer = parse_warp_route_message(&message.body).unwrap();

    assert_eq!(transfer.recipient, message.recipient);
    assert_eq!(transfer.amount, U256::exp10(18));
}

#[test]
fn test_zero_warp_route_body() {
    let transfer = parse_warp_route_message(&[0u8; 64]).unwrap();
    assert_eq!(transfer.recipient, H256::zero());
    assert_eq!(transfer.amount, U256::zero());
}
