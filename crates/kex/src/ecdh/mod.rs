//! Elliptic Curve Diffie-Hellman
//!
//! [`Ecdh`] runs the key agreement over any curve described by a
//! [`CurveParameters`] value. Each party draws a private scalar in
//! `[1, n − 1]`, publishes `private · g`, and multiplies the peer's public
//! point by its own scalar. The shared secret is the x-coordinate of the
//! resulting point.
//!
//! The shared secret is raw key material: feed it to a KDF before using it
//! as a symmetric key.
//!
//! [`CurveParameters`]: secdh_algorithms::ec::CurveParameters

pub mod k256;

pub use k256::{EcdhK256, EcdhK256PublicKey, EcdhK256SecretKey, EcdhK256SharedSecret};

use core::fmt;

use num_bigint::{BigInt, Sign};
use rand::{CryptoRng, RngCore};
use secdh_algorithms::ec::{to_be_bytes_padded, Curve, CurvePoint, FieldElement, Scalar};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Error, Result};

/// Algorithm label used in errors raised by the generic [`Ecdh`]
const ALGORITHM: &str = "ECDH";

/// ECDH private key: a scalar in `[1, n − 1]`, wiped on drop
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(Scalar);

impl PrivateKey {
    /// Wrap an existing scalar.
    pub fn from_scalar(scalar: Scalar) -> Self {
        PrivateKey(scalar)
    }

    /// Parse a big-endian private key for `curve`.
    ///
    /// The encoding may be at most the byte length of n and must decode to
    /// a value in `[1, n − 1]`.
    pub fn from_bytes(bytes: &[u8], curve: &Curve) -> Result<Self> {
        validate::key(
            bytes.len() <= curve.params().scalar_size(),
            "ECDH private",
            "encoding is longer than the subgroup order",
        )?;
        Ok(PrivateKey(Scalar::from_bytes(bytes, curve.params())?))
    }

    /// The underlying scalar.
    pub fn scalar(&self) -> &Scalar {
        &self.0
    }

    /// Big-endian bytes, padded to the byte length of n.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// ECDH public key: a non-identity point on the curve
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey {
    point: CurvePoint,
}

impl PublicKey {
    /// Build a public key from untrusted affine coordinates.
    ///
    /// Fails if `(x, y)` is not a point of `curve`.
    pub fn from_affine(curve: &Curve, x: FieldElement, y: FieldElement) -> Result<Self> {
        let point = curve.affine_point(x, y)?;
        Ok(PublicKey { point })
    }

    /// Build a public key from a point, rejecting the identity and points
    /// that are not on `curve`.
    pub fn from_point(curve: &Curve, point: CurvePoint) -> Result<Self> {
        validate::peer_point(
            !point.is_identity(),
            "PublicKey::from_point",
            "point is the identity",
        )?;
        validate::peer_point(
            curve.point_on_curve(&point),
            "PublicKey::from_point",
            "point is not on the curve",
        )?;
        Ok(PublicKey { point })
    }

    /// The public point.
    pub fn point(&self) -> &CurvePoint {
        &self.point
    }

    /// Affine x-coordinate
    pub fn x(&self) -> Option<&FieldElement> {
        self.point.x()
    }

    /// Affine y-coordinate
    pub fn y(&self) -> Option<&FieldElement> {
        self.point.y()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.point, f)
    }
}

/// The x-coordinate of the shared point, as fixed-width big-endian bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    bytes: Vec<u8>,
}

impl SharedSecret {
    /// Big-endian bytes, padded to the byte length of p.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The x-coordinate as a field element.
    pub fn to_bigint(&self) -> FieldElement {
        BigInt::from_bytes_be(Sign::Plus, &self.bytes)
    }

    /// Length of the encoding in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for a secret produced by [`Ecdh`]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret([REDACTED])")
    }
}

/// ECDH over a fixed curve
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ecdh {
    curve: Curve,
}

impl Ecdh {
    /// Key agreement over `curve`.
    pub fn new(curve: Curve) -> Self {
        Ecdh { curve }
    }

    /// Key agreement over secp256k1.
    pub fn secp256k1() -> Self {
        Ecdh::new(Curve::secp256k1())
    }

    /// The curve this instance operates on.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Generate a keypair with the caller's CSPRNG.
    pub fn generate_keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(PrivateKey, PublicKey)> {
        let private_key = PrivateKey(Scalar::random(rng, self.curve.params()));
        let public_key = self.public_key(&private_key)?;
        Ok((private_key, public_key))
    }

    /// Recompute the public key `private · g`.
    pub fn public_key(&self, private_key: &PrivateKey) -> Result<PublicKey> {
        let point = self.curve.scalar_mult_base(&private_key.0.to_bigint())?;
        validate::key_generation(
            !point.is_identity(),
            ALGORITHM,
            "public key is the identity",
        )?;
        Ok(PublicKey { point })
    }

    /// Derive the shared secret from our private key and the peer's public
    /// key.
    ///
    /// # Errors
    /// - [`Error::InvalidPoint`](crate::Error::InvalidPoint) if the peer key
    ///   is the identity or is not on this curve. The session must be
    ///   rejected, not retried.
    /// - [`Error::KeyAgreement`](crate::Error::KeyAgreement) if the shared
    ///   point is the identity.
    pub fn compute_shared_secret(
        &self,
        private_key: &PrivateKey,
        peer_public_key: &PublicKey,
    ) -> Result<SharedSecret> {
        let peer = peer_public_key.point();
        validate::peer_point(
            !peer.is_identity(),
            "compute_shared_secret",
            "peer public key is the identity",
        )?;
        validate::peer_point(
            self.curve.point_on_curve(peer),
            "compute_shared_secret",
            "peer public key is not on the curve",
        )?;

        let shared = self
            .curve
            .point_multiplication(&private_key.0.to_bigint(), peer)?;

        let Some(x) = shared.x() else {
            log::warn!("{}: shared point is the identity", ALGORITHM);
            return Err(Error::KeyAgreement {
                algorithm: ALGORITHM,
                details: "shared point is the identity",
            });
        };

        Ok(SharedSecret {
            bytes: to_be_bytes_padded(x, self.curve.params().field_size()),
        })
    }
}
