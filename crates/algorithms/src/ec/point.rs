//! Affine points on a short Weierstrass curve

use core::fmt;
use num_bigint::BigInt;

/// An element of the base field, always reduced into `[0, p)` by the curve
/// operations that produce it.
pub type FieldElement = BigInt;

/// A point on the curve: either the identity or an affine pair.
///
/// The identity is an explicit variant so that every caller has to handle it;
/// there is no coordinate encoding of the point at infinity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CurvePoint {
    /// The point at infinity, neutral element of the group law
    #[default]
    Infinity,
    /// An affine point (x, y)
    Affine {
        /// x-coordinate
        x: FieldElement,
        /// y-coordinate
        y: FieldElement,
    },
}

impl CurvePoint {
    /// The identity element.
    pub fn identity() -> Self {
        CurvePoint::Infinity
    }

    /// Build an affine point without checking curve membership.
    ///
    /// Use [`Curve::affine_point`](super::Curve::affine_point) for coordinates
    /// that come from outside the library.
    pub fn new_affine(x: FieldElement, y: FieldElement) -> Self {
        CurvePoint::Affine { x, y }
    }

    /// Check if this point is the identity element.
    pub fn is_identity(&self) -> bool {
        matches!(self, CurvePoint::Infinity)
    }

    /// The x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&FieldElement> {
        match self {
            CurvePoint::Infinity => None,
            CurvePoint::Affine { x, .. } => Some(x),
        }
    }

    /// The y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&FieldElement> {
        match self {
            CurvePoint::Infinity => None,
            CurvePoint::Affine { y, .. } => Some(y),
        }
    }

    /// Both coordinates, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(&FieldElement, &FieldElement)> {
        match self {
            CurvePoint::Infinity => None,
            CurvePoint::Affine { x, y } => Some((x, y)),
        }
    }
}

impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurvePoint::Infinity => write!(f, "O"),
            CurvePoint::Affine { x, y } => write!(f, "({:#x}, {:#x})", x, y),
        }
    }
}
