//! Warp route token transfer body, logical form
//!
//! Carried in the `body` of an `AetheriumMessage` when the message moves tokens:
//!
//! ```text
//! offset  0          32
//! field  [recipient][amount]
//! width   32          32
//! ```

use crate::common::serde_helpers::u256_decimal;
use ethereum_types::{H256, U256};
use serde::{Deserialize, Serialize};

/// Decoded token transfer payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WarpRouteMessage {
    /// Destination account in chain-agnostic 32-byte form
    pub recipient: H256,
    /// Token amount, up to 256 bits
    #[serde(with = "u256_decimal")]
    pub amount: U256,
}

impl WarpRouteMessage {
    pub fn new(recipient: H256, amount: U256) -> Self {
        Self { recipient, amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_serializes_as_decimal() {
        let msg = WarpRouteMessage::new(H256::zero(), U256::MAX);
        let json = serde_json::to_value(msg).unwrap();
        assert_eq!(
            json["amount"],
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
    }
}
