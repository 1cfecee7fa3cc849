//! Shared helpers that are not part of the message wire format

pub mod errors;
pub mod hex;
pub mod serde_helpers;
pub mod url;
