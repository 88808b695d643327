//! Elliptic-curve primitives for the secdh library
//!
//! This crate implements affine short-Weierstrass arithmetic over prime
//! fields on top of `num-bigint`, together with the secp256k1 parameter set:
//!
//! - modular inversion by the extended Euclidean algorithm
//! - point addition, doubling and negation with an explicit identity
//! - double-and-add scalar multiplication
//! - private scalars that are range-checked and zeroized on drop
//!
//! Every operation that accepts a point checks it against the curve equation
//! before using it.
//!
//! # Security
//!
//! The arithmetic is variable-time. It is suitable for testing,
//! interoperability checks and teaching, not for handling long-term secrets
//! on hardware shared with an attacker.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{
    inverse_modulus,
    // Curve-specific module
    k256,
    Curve,
    CurveParameters,
    CurvePoint,
    FieldElement,
    Scalar,
};
