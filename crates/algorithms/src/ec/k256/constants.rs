//! Shared constants for secp256k1 operations

use secdh_params::ecdh;

/// Size of a secp256k1 scalar in bytes (32 bytes = 256 bits)
pub const K256_SCALAR_SIZE: usize = ecdh::ECDH_K256_PRIVATE_KEY_SIZE;

/// Size of a secp256k1 field element in bytes (32 bytes = 256 bits)
pub const K256_FIELD_ELEMENT_SIZE: usize = ecdh::ECDH_K256_FIELD_ELEMENT_SIZE;
