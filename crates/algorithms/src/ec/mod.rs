//! Elliptic Curve Primitives
//!
//! Affine arithmetic on short Weierstrass curves y² = x³ + a·x + b over a
//! prime field, built on arbitrary-precision integers. Curves are values:
//! a [`Curve`] owns its [`CurveParameters`] and every operation borrows it.
//!
//! The [`k256`] module fixes the parameters to secp256k1 and provides the
//! key-generation helpers used by the ECDH layer.
//!
//! None of these operations are constant-time.

pub mod curve;
pub mod k256;
pub mod modular;
pub mod params;
pub mod point;
pub mod scalar;

pub use curve::Curve;
pub use modular::inverse_modulus;
pub use params::CurveParameters;
pub use point::{CurvePoint, FieldElement};
pub use scalar::Scalar;

use num_bigint::BigInt;

/// Big-endian encoding of a non-negative integer, left-padded with zeros to
/// `len` bytes.
///
/// Values wider than `len` bytes keep their full width. The sign is ignored.
pub fn to_be_bytes_padded(value: &BigInt, len: usize) -> Vec<u8> {
    let (_, raw) = value.to_bytes_be();
    // to_bytes_be yields [0] for zero
    let raw: &[u8] = if raw.iter().all(|&b| b == 0) { &[] } else { &raw };

    if raw.len() >= len {
        return raw.to_vec();
    }
    let mut out = vec![0u8; len - raw.len()];
    out.extend_from_slice(raw);
    out
}
