//! Serde adapters for 256-bit integers
//!
//! `U256` serializes as compact hex by default. Token amounts are rendered as
//! decimal strings instead so JSON output and structured log records show the
//! value a reader expects.

/// Serialize a `U256` as a decimal string; accept decimal or `0x` hex on input
pub mod u256_decimal {
    use ethereum_types::U256;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let text = String::deserialize(deserializer)?;
        match text.strip_prefix("0x") {
            Some(digits) => U256::from_str_radix(digits, 16)
                .map_err(|err| D::Error::custom(format!("{err:?}"))),
            None => U256::from_dec_str(&text).map_err(|err| D::Error::custom(format!("{err:?}"))),
        }
    }
}
