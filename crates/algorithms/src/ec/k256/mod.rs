//! Koblitz secp256k1 Elliptic Curve Primitives
//!
//! The curve equation is y² = x³ + 7 over the prime field F_p where:
//! - p = 2^256 - 2^32 - 977
//! - The curve order n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
//!
//! These helpers fix the generic [`Curve`] to secp256k1. Arithmetic is
//! variable-time.

mod constants;

pub use constants::{K256_FIELD_ELEMENT_SIZE, K256_SCALAR_SIZE};

use rand::{CryptoRng, RngCore};

use super::{Curve, CurvePoint, FieldElement, Scalar};
use crate::error::Result;

/// The secp256k1 curve
pub fn curve() -> Curve {
    Curve::secp256k1()
}

/// Get the standard base point G of the secp256k1 curve
pub fn base_point_g() -> CurvePoint {
    curve().generator().clone()
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Result<CurvePoint> {
    curve().scalar_mult_base(&scalar.to_bigint())
}

/// General scalar multiplication: compute scalar * point
///
/// The point is checked against the curve equation first.
pub fn scalar_mult(scalar: &Scalar, point: &CurvePoint) -> Result<CurvePoint> {
    curve().point_multiplication(&scalar.to_bigint(), point)
}

/// Generate a keypair: a private scalar in `[1, n − 1]` and its public point
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, CurvePoint)> {
    let curve = curve();
    let private_key = Scalar::random(rng, curve.params());
    let public_key = curve.scalar_mult_base(&private_key.to_bigint())?;
    Ok((private_key, public_key))
}

/// Fixed-width big-endian encoding of a field element
pub fn field_element_to_bytes(value: &FieldElement) -> [u8; K256_FIELD_ELEMENT_SIZE] {
    let mut out = [0u8; K256_FIELD_ELEMENT_SIZE];
    let bytes = super::to_be_bytes_padded(value, K256_FIELD_ELEMENT_SIZE);
    // Reduced field elements always fit; keep the low-order bytes otherwise
    let start = bytes.len() - K256_FIELD_ELEMENT_SIZE;
    out.copy_from_slice(&bytes[start..]);
    out
}
