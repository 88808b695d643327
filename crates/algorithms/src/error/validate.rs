//! Validation utilities for elliptic-curve primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that a point satisfied the curve-membership predicate
#[inline(always)]
pub fn on_curve(is_on_curve: bool, context: &'static str) -> Result<()> {
    if !is_on_curve {
        log::debug!("{}: rejecting point that is not on the curve", context);
        return Err(Error::InvalidPoint { context });
    }
    Ok(())
}

/// Validate that a value is nonzero before inverting it
#[inline(always)]
pub fn nonzero(is_nonzero: bool, context: &'static str) -> Result<()> {
    if !is_nonzero {
        return Err(Error::DivisionByZero { context });
    }
    Ok(())
}
