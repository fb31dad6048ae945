//! Utilities for libfelica: small, reusable helpers used across the crate.
//!
//! Hex/binary rendering for the textual projections and the transceive
//! timeout defaults.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
