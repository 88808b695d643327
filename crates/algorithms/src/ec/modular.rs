//! Modular inversion over the base field

use std::mem;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use super::point::FieldElement;
use crate::error::{validate, Error, Result};

/// Returns the unique `x` in `[0, p)` such that `(k * x) mod p == 1`.
///
/// `p` must be prime and `k` must not be a multiple of `p`. Negative `k` is
/// handled through `k⁻¹ = p − (−k)⁻¹ (mod p)`.
///
/// # Errors
/// - [`Error::DivisionByZero`] when `k ≡ 0 (mod p)`.
/// - [`Error::NotInvertible`] when `gcd(k, p) != 1`, which means `p` was not
///   actually prime.
pub fn inverse_modulus(k: &BigInt, p: &BigInt) -> Result<FieldElement> {
    validate::parameter(p > &BigInt::one(), "p", "modulus must be greater than 1")?;
    validate::nonzero(!k.mod_floor(p).is_zero(), "inverse_modulus")?;

    if k.is_negative() {
        let inv = inverse_modulus(&-k, p)?;
        return Ok((p - inv).mod_floor(p));
    }

    // Extended Euclid on (k, p); only the Bézout coefficient of k is kept.
    let (mut old_r, mut r) = (k.clone(), p.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = mem::replace(&mut r, next_r);

        let next_s = &old_s - &quotient * &s;
        old_s = mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return Err(Error::NotInvertible {
            context: "inverse_modulus",
        });
    }

    let x = old_s.mod_floor(p);
    debug_assert!((k * &x).mod_floor(p).is_one());
    Ok(x)
}
