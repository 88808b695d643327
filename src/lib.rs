//! # secdh
//!
//! Elliptic-curve Diffie-Hellman over short Weierstrass curves, with the
//! secp256k1 parameter set built in.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! secdh = "0.3"
//! ```
//!
//! ```
//! use secdh::prelude::*;
//!
//! let (alice_pk, alice_sk) = EcdhK256::keypair(&mut rand::rngs::OsRng)?;
//! let (bob_pk, bob_sk) = EcdhK256::keypair(&mut rand::rngs::OsRng)?;
//!
//! let alice_secret = EcdhK256::shared_secret(&alice_sk, &bob_pk)?;
//! let bob_secret = EcdhK256::shared_secret(&bob_sk, &alice_pk)?;
//! assert_eq!(alice_secret, bob_secret);
//! # Ok::<(), secdh::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support, including `OsRng`
//! - `algorithms` (default): curve arithmetic
//! - `kex` (default): ECDH key agreement, implies `algorithms`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`secdh-api`]: error type and the `KeyAgreement` trait
//! - [`secdh-params`]: secp256k1 domain constants
//! - [`secdh-algorithms`]: modular inverse, point algebra, scalars
//! - [`secdh-kex`]: ECDH keypair generation and shared secrets
//!
//! All arithmetic is variable-time.

// Core re-exports (always available)
pub use secdh_api as api;
pub use secdh_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use secdh_algorithms as algorithms;

#[cfg(feature = "kex")]
pub use secdh_kex as kex;

/// Common imports for secdh users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::KeyAgreement;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{Curve, CurveParameters, CurvePoint, FieldElement, Scalar};

    // Integer type used for coordinates and scalars
    pub use num_bigint::BigInt;

    #[cfg(feature = "kex")]
    pub use crate::kex::{Ecdh, EcdhK256, PrivateKey, PublicKey, SharedSecret};
}
