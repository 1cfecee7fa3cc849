//! Hex text convention for raw bytes
//!
//! Bytes are rendered as lowercase, `0x`-prefixed hex. Decoding accepts the
//! digits with or without the prefix and rejects odd-length sequences.

use crate::common::errors::HexError;

/// Encode bytes as lowercase `0x`-prefixed hex
pub fn to_hex_string(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decode hex text, with or without the `0x` prefix
pub fn from_hex_string(text: &str) -> Result<Vec<u8>, HexError> {
    let digits = strip_hex_prefix(text);

    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength {
            digits: digits.len(),
        });
    }

    hex::decode(digits).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => HexError::InvalidCharacter {
            character: c,
            index,
        },
        _ => HexError::OddLength {
            digits: digits.len(),
        },
    })
}

/// Strip a leading `0x` or `0X`
pub fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

/// Serde adapter rendering `Vec<u8>` fields as hex text
pub mod hex_bytes {
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex_string(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::from_hex_string(&text).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_lowercase_and_prefixed() {
        assert_eq!(to_hex_string(&[0xAB, 0xCD, 0x01]), "0xabcd01");
        assert_eq!(to_hex_string(&[]), "0x");
    }

    #[test]
    fn test_decode_with_and_without_prefix() {
        assert_eq!(from_hex_string("0x1234").unwrap(), vec![0x12, 0x34]);
        assert_eq!(from_hex_string("1234").unwrap(), vec![0x12, 0x34]);
        assert_eq!(from_hex_string("0XaBcD").unwrap(), vec![0xAB, 0xCD]);
        assert_eq!(from_hex_string("0x").unwrap(), Vec::<u8>::new());
        assert_eq!(from_hex_string("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_rejects_odd_length() {
        assert_eq!(
            from_hex_string("0x123"),
            Err(HexError::OddLength { digits: 3 })
        );
        assert_eq!(from_hex_string("f"), Err(HexError::OddLength { digits: 1 }));
    }

    #[test]
    fn test_decode_rejects_non_hex_characters() {
        let err = from_hex_string("0x12zz").unwrap_err();
        assert_eq!(
            err,
            HexError::InvalidCharacter {
                character: 'z',
                index: 2
            }
        );
        assert!(err.to_string().contains("Invalid hex"));
    }
}
