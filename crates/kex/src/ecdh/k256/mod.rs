//! ECDH with secp256k1 (K-256)
//!
//! Binds [`Ecdh`] to the secp256k1 parameter set and exposes it through the
//! [`KeyAgreement`] trait. The shared secret is the raw 32-byte x-coordinate
//! of the shared point.

use rand::{CryptoRng, RngCore};
use secdh_api::{KeyAgreement, Result as ApiResult};
use secdh_params::ecdh::ECDH_K256_ALGORITHM;

use super::{Ecdh, PrivateKey, PublicKey, SharedSecret};
use crate::error::ResultExt;

/// ECDH key agreement over secp256k1
pub struct EcdhK256;

/// Public key for ECDH-K256 (affine point on secp256k1)
pub type EcdhK256PublicKey = PublicKey;

/// Secret key for ECDH-K256 (scalar in `[1, n − 1]`)
pub type EcdhK256SecretKey = PrivateKey;

/// Shared secret from ECDH-K256 (32-byte x-coordinate)
pub type EcdhK256SharedSecret = SharedSecret;

impl EcdhK256 {
    /// The underlying generic ECDH instance.
    pub fn ecdh() -> Ecdh {
        Ecdh::secp256k1()
    }

    /// Generate a keypair from the operating system's CSPRNG.
    #[cfg(feature = "std")]
    pub fn generate() -> ApiResult<(EcdhK256PublicKey, EcdhK256SecretKey)> {
        <Self as KeyAgreement>::keypair(&mut rand::rngs::OsRng)
    }
}

impl KeyAgreement for EcdhK256 {
    type PublicKey = EcdhK256PublicKey;
    type SecretKey = EcdhK256SecretKey;
    type SharedSecret = EcdhK256SharedSecret;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        ECDH_K256_ALGORITHM
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (secret_key, public_key) = Self::ecdh()
            .generate_keypair(rng)
            .with_context(ECDH_K256_ALGORITHM)?;
        Ok((public_key, secret_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn shared_secret(
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> ApiResult<Self::SharedSecret> {
        Ok(Self::ecdh().compute_shared_secret(secret_key, peer_public_key)?)
    }
}
