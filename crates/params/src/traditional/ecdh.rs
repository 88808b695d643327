//! Constants for Elliptic Curve Diffie-Hellman

/// Size of a secp256k1 private scalar in bytes
pub const ECDH_K256_PRIVATE_KEY_SIZE: usize = 32;

/// Size of a secp256k1 field element (one affine coordinate) in bytes
pub const ECDH_K256_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of the ECDH shared secret (the x-coordinate) for secp256k1 in bytes
pub const ECDH_K256_SHARED_SECRET_SIZE: usize = ECDH_K256_FIELD_ELEMENT_SIZE;

/// Algorithm name reported by the secp256k1 key agreement
pub const ECDH_K256_ALGORITHM: &str = "ECDH-secp256k1";
