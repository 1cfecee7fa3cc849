//! Protocol data types: wire constants, address contract and message forms
//!
//! Encoding rules live in the codec crate; this module only defines shapes.

pub mod address;
pub mod constants;
pub mod message;
pub mod warp_route;

pub use address::{
    address_to_bytes32, bytes32_to_address, has_zero_padding, AddressCodec, ChainAddress,
};
pub use constants::*;
pub use message::AetheriumMessage;
pub use warp_route::WarpRouteMessage;
