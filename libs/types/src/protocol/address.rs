//! Address normalization between chain-native and 32-byte wire forms
//!
//! Message senders and recipients travel as 32-byte big-endian values. Native
//! addresses narrower than that (20-byte EVM addresses) are left-padded with
//! zeros on the way in and stripped back on the way out. Stripping is checked:
//! a 32-byte value whose padding is non-zero is not silently truncated.
//!
//! # Usage Examples
//!
//! ```rust
//! use types::{AddressCodec, ChainAddress};
//!
//! let sender: ChainAddress = "0x5fbdb2315678afecb367f032d93f642f64180aa3".parse().unwrap();
//! let fixed = sender.to_fixed32().unwrap();
//! assert_eq!(&fixed.as_bytes()[..12], &[0u8; 12]);
//! assert_eq!(ChainAddress::from_fixed32(&fixed).unwrap(), sender);
//! ```

use crate::common::errors::AddressError;
use crate::common::hex::{from_hex_string, to_hex_string};
use crate::protocol::constants::{ADDRESS_LEN, EVM_ADDRESS_LEN};
use ethereum_types::{H160, H256};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

const PADDING_LEN: usize = ADDRESS_LEN - EVM_ADDRESS_LEN;

/// Conversion pair between a native address and its 32-byte wire form
///
/// Implementations must be exact inverses for every value `to_fixed32` can
/// produce, otherwise message round trips break.
pub trait AddressCodec: Sized {
    /// Normalize to the 32-byte big-endian wire form
    fn to_fixed32(&self) -> Result<H256, AddressError>;

    /// Recover the native form from 32 wire bytes
    fn from_fixed32(bytes: &H256) -> Result<Self, AddressError>;
}

impl AddressCodec for H160 {
    #[inline]
    fn to_fixed32(&self) -> Result<H256, AddressError> {
        let mut padded = [0u8; ADDRESS_LEN];
        padded[PADDING_LEN..].copy_from_slice(self.as_bytes());
        Ok(H256(padded))
    }

    fn from_fixed32(bytes: &H256) -> Result<Self, AddressError> {
        if !has_zero_padding(bytes) {
            return Err(AddressError::NonZeroPadding {
                value: to_hex_string(bytes.as_bytes()),
                native: "20-byte",
            });
        }
        Ok(H160::from_slice(&bytes.as_bytes()[PADDING_LEN..]))
    }
}

impl AddressCodec for H256 {
    #[inline]
    fn to_fixed32(&self) -> Result<H256, AddressError> {
        Ok(*self)
    }

    #[inline]
    fn from_fixed32(bytes: &H256) -> Result<Self, AddressError> {
        Ok(*bytes)
    }
}

/// True when the leading 12 bytes are zero, i.e. the value is a padded EVM address
#[inline]
pub fn has_zero_padding(bytes: &H256) -> bool {
    bytes.as_bytes()[..PADDING_LEN].iter().all(|&b| b == 0)
}

/// A chain-native address as supplied by a caller
///
/// Two addresses are equal when their wire forms are equal, so a zero-padded
/// `Bytes32` and the matching `Evm` address compare the same.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChainAddress {
    /// 20-byte EVM address
    Evm(H160),
    /// Address that is already 32 bytes wide
    Bytes32(H256),
}

impl ChainAddress {
    /// Interpret raw bytes by width: 20 bytes is EVM, 32 bytes is already normalized
    ///
    /// 32 bytes with zero padding are read as the EVM address they encode, the
    /// same way [`AddressCodec::from_fixed32`] reads them.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        match bytes.len() {
            EVM_ADDRESS_LEN => Ok(Self::Evm(H160::from_slice(bytes))),
            ADDRESS_LEN => Ok(Self::from(H256::from_slice(bytes))),
            got => Err(AddressError::InvalidWidth { got }),
        }
    }

    /// 32-byte wire form; infallible for both variants
    pub fn fixed32(&self) -> H256 {
        match self {
            Self::Evm(addr) => {
                let mut padded = [0u8; ADDRESS_LEN];
                padded[PADDING_LEN..].copy_from_slice(addr.as_bytes());
                H256(padded)
            }
            Self::Bytes32(addr) => *addr,
        }
    }

    /// Native bytes without padding
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Evm(addr) => addr.as_bytes(),
            Self::Bytes32(addr) => addr.as_bytes(),
        }
    }

    pub fn to_hex(&self) -> String {
        to_hex_string(self.as_bytes())
    }
}

impl AddressCodec for ChainAddress {
    #[inline]
    fn to_fixed32(&self) -> Result<H256, AddressError> {
        Ok(self.fixed32())
    }

    #[inline]
    fn from_fixed32(bytes: &H256) -> Result<Self, AddressError> {
        Ok(Self::from(*bytes))
    }
}

impl PartialEq for ChainAddress {
    fn eq(&self, other: &Self) -> bool {
        self.fixed32() == other.fixed32()
    }
}

impl Eq for ChainAddress {}

impl Hash for ChainAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fixed32().hash(state);
    }
}

impl FromStr for ChainAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = from_hex_string(s)?;
        Self::from_slice(&bytes)
    }
}

impl TryFrom<String> for ChainAddress {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChainAddress> for String {
    fn from(addr: ChainAddress) -> Self {
        addr.to_hex()
    }
}

impl From<H160> for ChainAddress {
    fn from(addr: H160) -> Self {
        Self::Evm(addr)
    }
}

impl From<H256> for ChainAddress {
    fn from(addr: H256) -> Self {
        if has_zero_padding(&addr) {
            Self::Evm(H160::from_slice(&addr.as_bytes()[PADDING_LEN..]))
        } else {
            Self::Bytes32(addr)
        }
    }
}

impl fmt::Display for ChainAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Normalize address text (20 or 32 bytes of hex) to the wire form
pub fn address_to_bytes32(address: &str) -> Result<H256, AddressError> {
    address.parse::<ChainAddress>()?.to_fixed32()
}

/// Strip a 32-byte wire value back to a 20-byte EVM address
pub fn bytes32_to_address(bytes: &H256) -> Result<H160, AddressError> {
    H160::from_fixed32(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::errors::HexError;
    use hex_literal::hex;

    #[test]
    fn test_evm_address_is_left_padded() {
        let addr = H160(hex!("5fbdb2315678afecb367f032d93f642f64180aa3"));
        let fixed = addr.to_fixed32().unwrap();

        assert_eq!(&fixed.as_bytes()[..12], &[0u8; 12]);
        assert_eq!(&fixed.as_bytes()[12..], addr.as_bytes());
        assert_eq!(H160::from_fixed32(&fixed).unwrap(), addr);
    }

    #[test]
    fn test_non_zero_padding_is_rejected() {
        let mut raw = [0u8; 32];
        raw[0] = 0x01;
        raw[31] = 0xff;
        let err = H160::from_fixed32(&H256(raw)).unwrap_err();
        assert!(matches!(err, AddressError::NonZeroPadding { .. }));
    }

    #[test]
    fn test_chain_address_parsing_by_width() {
        let evm: ChainAddress = "0xe7f1725e7734ce288f8367e1bb143e90bb3f0512".parse().unwrap();
        assert!(matches!(evm, ChainAddress::Evm(_)));

        let wide: ChainAddress = format!("0x{}", "ab".repeat(32)).parse().unwrap();
        assert!(matches!(wide, ChainAddress::Bytes32(_)));

        assert_eq!(
            "0x1234".parse::<ChainAddress>(),
            Err(AddressError::InvalidWidth { got: 2 })
        );
        assert_eq!(
            "0x123".parse::<ChainAddress>(),
            Err(AddressError::Hex(HexError::OddLength { digits: 3 }))
        );
    }

    #[test]
    fn test_chain_address_inverse_pair() {
        let wide = H256(hex!(
            "ff00000000000000000000000000000000000000000000000000000000000001"
        ));
        let recovered = ChainAddress::from_fixed32(&wide).unwrap();
        assert_eq!(recovered, ChainAddress::Bytes32(wide));
        assert_eq!(recovered.to_fixed32().unwrap(), wide);

        let padded = address_to_bytes32("0xe7f1725e7734ce288f8367e1bb143e90bb3f0512").unwrap();
        let recovered = ChainAddress::from_fixed32(&padded).unwrap();
        assert!(matches!(recovered, ChainAddress::Evm(_)));
        assert_eq!(recovered.to_fixed32().unwrap(), padded);
        assert_eq!(
            bytes32_to_address(&padded).unwrap(),
            H160(hex!("e7f1725e7734ce288f8367e1bb143e90bb3f0512"))
        );
    }

    #[test]
    fn test_zero_padded_bytes32_round_trips() {
        let text = "0x000000000000000000000000e7f1725e7734ce288f8367e1bb143e90bb3f0512";
        let parsed: ChainAddress = text.parse().unwrap();
        assert_eq!(
            parsed,
            ChainAddress::Evm(H160(hex!("e7f1725e7734ce288f8367e1bb143e90bb3f0512")))
        );

        let fixed = parsed.to_fixed32().unwrap();
        assert_eq!(ChainAddress::from_fixed32(&fixed).unwrap(), parsed);
        assert_eq!(fixed.as_bytes(), &hex!("000000000000000000000000e7f1725e7734ce288f8367e1bb143e90bb3f0512"));

        // Built directly, the wide variant still equals its EVM reading
        let direct = ChainAddress::Bytes32(fixed);
        assert_eq!(ChainAddress::from_fixed32(&direct.to_fixed32().unwrap()).unwrap(), direct);
        assert_eq!(direct, parsed);
    }

    #[test]
    fn test_chain_address_serde_uses_hex_text() {
        let addr: ChainAddress = "0x5fbdb2315678afecb367f032d93f642f64180aa3".parse().unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, r#""0x5fbdb2315678afecb367f032d93f642f64180aa3""#);
        let back: ChainAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }
}
