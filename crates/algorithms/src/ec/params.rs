//! Curve domain parameters

use std::borrow::Cow;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use secdh_params::secp256k1 as k256;

use super::point::{CurvePoint, FieldElement};
use crate::error::{validate, Result};

/// Domain parameters of a short Weierstrass curve y² = x³ + a·x + b over F_p.
///
/// Built once and never mutated; every arithmetic component holds its own
/// copy, so there is no process-wide curve state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParameters {
    name: Cow<'static, str>,
    p: BigInt,
    a: FieldElement,
    b: FieldElement,
    g: CurvePoint,
    n: BigInt,
    h: BigInt,
}

impl CurveParameters {
    /// Create a parameter set, running the basic consistency checks:
    /// odd `p > 3`, coefficients reduced mod `p`, `n > 1`, `h >= 1` and an
    /// affine generator that satisfies the curve equation.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        p: BigInt,
        a: FieldElement,
        b: FieldElement,
        g: CurvePoint,
        n: BigInt,
        h: BigInt,
    ) -> Result<Self> {
        validate::parameter(
            p > BigInt::from(3u8) && p.is_odd(),
            "p",
            "modulus must be an odd prime greater than 3",
        )?;
        validate::parameter(!a.is_negative() && a < p, "a", "coefficient must lie in [0, p)")?;
        validate::parameter(!b.is_negative() && b < p, "b", "coefficient must lie in [0, p)")?;
        validate::parameter(n > BigInt::one(), "n", "subgroup order must be greater than 1")?;
        validate::parameter(h >= BigInt::one(), "h", "cofactor must be at least 1")?;

        let params = CurveParameters {
            name: name.into(),
            p,
            a,
            b,
            g,
            n,
            h,
        };
        validate::parameter(!params.g.is_identity(), "g", "generator cannot be the identity")?;
        validate::parameter(params.contains(&params.g), "g", "generator is not on the curve")?;
        Ok(params)
    }

    /// The secp256k1 parameter set from SEC 2.
    pub fn secp256k1() -> Self {
        CurveParameters {
            name: Cow::Borrowed(k256::NAME),
            p: BigInt::from_bytes_be(Sign::Plus, &k256::P),
            a: BigInt::from(k256::A),
            b: BigInt::from(k256::B),
            g: CurvePoint::Affine {
                x: BigInt::from_bytes_be(Sign::Plus, &k256::G_X),
                y: BigInt::from_bytes_be(Sign::Plus, &k256::G_Y),
            },
            n: BigInt::from_bytes_be(Sign::Plus, &k256::N),
            h: BigInt::from(k256::H),
        }
    }

    /// Curve name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field modulus p
    pub fn p(&self) -> &BigInt {
        &self.p
    }

    /// Coefficient a
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Coefficient b
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Generator point g
    pub fn g(&self) -> &CurvePoint {
        &self.g
    }

    /// Subgroup order n
    pub fn n(&self) -> &BigInt {
        &self.n
    }

    /// Cofactor h
    pub fn h(&self) -> &BigInt {
        &self.h
    }

    /// Size in bytes of a field element
    pub fn field_size(&self) -> usize {
        ((self.p.bits() + 7) / 8) as usize
    }

    /// Size in bytes of a scalar modulo n
    pub fn scalar_size(&self) -> usize {
        ((self.n.bits() + 7) / 8) as usize
    }

    /// Curve-membership predicate. Coordinates must already be reduced
    /// into `[0, p)`.
    pub(crate) fn contains(&self, point: &CurvePoint) -> bool {
        match point {
            CurvePoint::Infinity => true,
            CurvePoint::Affine { x, y } => {
                if !self.is_reduced(x) || !self.is_reduced(y) {
                    return false;
                }
                let lhs = y * y - x * x * x - &self.a * x - &self.b;
                lhs.mod_floor(&self.p).is_zero()
            }
        }
    }

    fn is_reduced(&self, v: &BigInt) -> bool {
        !v.is_negative() && v < &self.p
    }
}
