//! Constants for traditional (elliptic-curve) key agreement

pub mod ecdh;
pub mod secp256k1;
