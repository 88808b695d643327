//! Trait definition for Diffie-Hellman style key agreement
//!
//! Each party generates a keypair, publishes the public half, and combines its
//! own secret key with the peer's public key. Both sides arrive at the same
//! shared secret without it ever crossing the wire.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for a key agreement scheme with domain-specific key types.
///
/// # Security Design
///
/// Secret keys and shared secrets must zeroize their memory, and every public
/// key received from a peer must be validated before it is used.
pub trait KeyAgreement {
    /// Public key type.
    type PublicKey: Clone;

    /// Secret key type.
    ///
    /// # Security Note
    /// Implements `Zeroize` for secure memory cleanup.
    type SecretKey: Zeroize + Clone;

    /// Shared secret type.
    ///
    /// # Security Note
    /// Should be fed into a KDF and dropped immediately after use.
    type SharedSecret: Zeroize + Clone;

    /// Keypair type for storage of related keys.
    type KeyPair: Clone;

    /// Returns the algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    ///
    /// # Security Requirements
    /// - Must use the provided CSPRNG for all randomness.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Derive the shared secret from our secret key and the peer's public key.
    ///
    /// # Security Requirements
    /// - Must validate the peer public key and fail rather than substitute a
    ///   default value.
    fn shared_secret(
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
