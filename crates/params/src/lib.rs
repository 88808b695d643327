//! Constant values for secdh elliptic-curve operations
//!
//! Domain parameters are stored as big-endian byte strings so that this crate
//! stays dependency-free; the arithmetic crate turns them into integers.

#![no_std]

pub mod traditional;

pub use traditional::ecdh;
pub use traditional::secp256k1;
