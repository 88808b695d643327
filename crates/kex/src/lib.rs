//! Elliptic-curve Diffie-Hellman key agreement
//!
//! This crate provides ECDH over the curves of `secdh-algorithms`, with
//! secp256k1 exposed through the [`secdh_api::KeyAgreement`] trait.
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use secdh_kex::Ecdh;
//!
//! let ecdh = Ecdh::secp256k1();
//! let mut rng = ChaCha20Rng::from_seed([0u8; 32]);
//!
//! let (alice_sk, alice_pk) = ecdh.generate_keypair(&mut rng).unwrap();
//! let (bob_sk, bob_pk) = ecdh.generate_keypair(&mut rng).unwrap();
//!
//! let a = ecdh.compute_shared_secret(&alice_sk, &bob_pk).unwrap();
//! let b = ecdh.compute_shared_secret(&bob_sk, &alice_pk).unwrap();
//! assert_eq!(a, b);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod ecdh;
pub mod error;

// Re-exports
pub use ecdh::{Ecdh, EcdhK256, PrivateKey, PublicKey, SharedSecret};
pub use error::{Error, Result};
