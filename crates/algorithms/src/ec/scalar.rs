//! Private scalars in `[1, n − 1]`

use core::fmt;

use num_bigint::{BigInt, RandBigInt, Sign};
use num_traits::{One, Signed, Zero};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::params::CurveParameters;
use super::to_be_bytes_padded;
use crate::error::{validate, Result};

/// A nonzero scalar modulo the subgroup order, used as a private key.
///
/// Stored as big-endian bytes padded to the byte length of n and wiped on
/// drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar {
    bytes: Vec<u8>,
}

impl Scalar {
    /// Create a scalar from an integer, which must lie in `[1, n − 1]`.
    pub fn from_bigint(value: &BigInt, params: &CurveParameters) -> Result<Self> {
        validate::parameter(
            !value.is_negative() && !value.is_zero(),
            "scalar",
            "scalar must be positive",
        )?;
        validate::parameter(
            value < params.n(),
            "scalar",
            "scalar must be less than the subgroup order",
        )?;
        Ok(Scalar {
            bytes: to_be_bytes_padded(value, params.scalar_size()),
        })
    }

    /// Create a scalar from big-endian bytes, which must encode a value in
    /// `[1, n − 1]`. Leading zero bytes are allowed.
    pub fn from_bytes(bytes: &[u8], params: &CurveParameters) -> Result<Self> {
        let value = BigInt::from_bytes_be(Sign::Plus, bytes);
        Self::from_bigint(&value, params)
    }

    /// Draw a scalar uniformly from `[1, n − 1]`.
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R, params: &CurveParameters) -> Self {
        let value = rng.gen_bigint_range(&BigInt::one(), params.n());
        Scalar {
            bytes: to_be_bytes_padded(&value, params.scalar_size()),
        }
    }

    /// The scalar as an integer.
    pub fn to_bigint(&self) -> BigInt {
        BigInt::from_bytes_be(Sign::Plus, &self.bytes)
    }

    /// Big-endian bytes, padded to the byte length of n.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for Scalar {}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scalar([REDACTED])")
    }
}
