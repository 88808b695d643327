//! Group law on a short Weierstrass curve
//!
//! All arithmetic is affine and runs on arbitrary-precision integers. The
//! double-and-add loop branches on the bits of the scalar, so scalar
//! multiplication is variable-time.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use super::modular::inverse_modulus;
use super::params::CurveParameters;
use super::point::{CurvePoint, FieldElement};
use crate::error::{validate, Result};

/// A curve together with its immutable domain parameters.
///
/// `Curve` is cheap to share by reference across threads: every operation
/// takes `&self` and nothing is cached or mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    params: CurveParameters,
}

impl Curve {
    /// Wrap a parameter set.
    pub fn new(params: CurveParameters) -> Self {
        Curve { params }
    }

    /// The secp256k1 curve.
    pub fn secp256k1() -> Self {
        Curve::new(CurveParameters::secp256k1())
    }

    /// The domain parameters of this curve.
    pub fn params(&self) -> &CurveParameters {
        &self.params
    }

    /// The generator point g.
    pub fn generator(&self) -> &CurvePoint {
        self.params.g()
    }

    /// Build an affine point from untrusted coordinates.
    ///
    /// Returns an error if the coordinates are not reduced modulo p or do not
    /// satisfy the curve equation.
    pub fn affine_point(&self, x: FieldElement, y: FieldElement) -> Result<CurvePoint> {
        let point = CurvePoint::Affine { x, y };
        validate::on_curve(self.point_on_curve(&point), "affine_point")?;
        Ok(point)
    }

    /// True for the identity; for an affine point, true iff
    /// `y² − x³ − a·x − b ≡ 0 (mod p)`.
    pub fn point_on_curve(&self, point: &CurvePoint) -> bool {
        self.params.contains(point)
    }

    /// `p1 + p2` under the group law.
    ///
    /// Both inputs must be on the curve, otherwise
    /// [`Error::InvalidPoint`](crate::Error::InvalidPoint) is returned.
    pub fn point_addition(&self, p1: &CurvePoint, p2: &CurvePoint) -> Result<CurvePoint> {
        validate::on_curve(self.point_on_curve(p1), "point_addition")?;
        validate::on_curve(self.point_on_curve(p2), "point_addition")?;

        let (x1, y1, x2, y2) = match (p1, p2) {
            // 0 + p2 = p2
            (CurvePoint::Infinity, _) => return Ok(p2.clone()),
            // p1 + 0 = p1
            (_, CurvePoint::Infinity) => return Ok(p1.clone()),
            (CurvePoint::Affine { x: x1, y: y1 }, CurvePoint::Affine { x: x2, y: y2 }) => {
                (x1, y1, x2, y2)
            }
        };

        // p1 + (-p1) = 0. A point with y = 0 is its own negation.
        if x1 == x2 && (y1 != y2 || y1.is_zero()) {
            return Ok(CurvePoint::Infinity);
        }

        let p = self.params.p();
        let m = if x1 == x2 {
            // Tangent slope (3x₁² + a) / 2y₁
            let numerator = BigInt::from(3u8) * x1 * x1 + self.params.a();
            numerator * inverse_modulus(&(BigInt::from(2u8) * y1), p)?
        } else {
            // Chord slope (y₁ − y₂) / (x₁ − x₂)
            (y1 - y2) * inverse_modulus(&(x1 - x2), p)?
        };

        let x3 = (&m * &m - x1 - x2).mod_floor(p);
        let y3 = (-(y1 + &m * (&x3 - x1))).mod_floor(p);
        let result = CurvePoint::Affine { x: x3, y: y3 };

        debug_assert!(self.point_on_curve(&result));
        Ok(result)
    }

    /// `point + point`.
    pub fn point_double(&self, point: &CurvePoint) -> Result<CurvePoint> {
        self.point_addition(point, point)
    }

    /// `-point`: the identity maps to itself, (x, y) maps to (x, p − y).
    pub fn point_negate(&self, point: &CurvePoint) -> CurvePoint {
        match point {
            CurvePoint::Infinity => CurvePoint::Infinity,
            CurvePoint::Affine { x, y } => {
                let p = self.params.p();
                CurvePoint::Affine {
                    x: x.clone(),
                    y: (p - y).mod_floor(p),
                }
            }
        }
    }

    /// `k · point` by double-and-add over the bits of `k`, least significant
    /// bit first.
    ///
    /// Multiples of the subgroup order n collapse to the identity, and a
    /// negative `k` multiplies the negated point by `-k`.
    pub fn point_multiplication(&self, k: &BigInt, point: &CurvePoint) -> Result<CurvePoint> {
        validate::on_curve(self.point_on_curve(point), "point_multiplication")?;

        if k.mod_floor(self.params.n()).is_zero() || point.is_identity() {
            return Ok(CurvePoint::Infinity);
        }

        if k.is_negative() {
            // k * point = -k * (-point)
            return self.point_multiplication(&-k, &self.point_negate(point));
        }

        let mut k = k.clone();
        let mut result = CurvePoint::Infinity;
        let mut addend = point.clone();

        while !k.is_zero() {
            if k.is_odd() {
                result = self.point_addition(&result, &addend)?;
            }
            addend = self.point_double(&addend)?;
            k >>= 1usize;
        }

        debug_assert!(self.point_on_curve(&result));
        Ok(result)
    }

    /// `k · g` for the curve generator.
    pub fn scalar_mult_base(&self, k: &BigInt) -> Result<CurvePoint> {
        self.point_multiplication(k, self.params.g())
    }
}
