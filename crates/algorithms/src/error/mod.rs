//! Error handling for elliptic-curve primitives

use std::borrow::Cow;

use secdh_api::Error as CoreError;
use thiserror::Error as ThisError;

/// The error type for elliptic-curve primitives
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Attempted inverse of a value congruent to zero modulo the field prime
    #[error("Division by zero in {context}")]
    DivisionByZero {
        /// Operation that attempted the inversion
        context: &'static str,
    },

    /// The value shares a factor with the modulus, so no inverse exists
    #[error("Value is not invertible in {context}: gcd with modulus is not 1")]
    NotInvertible {
        /// Operation that attempted the inversion
        context: &'static str,
    },

    /// A point failed the curve-membership check at an operation's entry
    #[error("Point is not on the curve in {context}")]
    InvalidPoint {
        /// Operation that rejected the point
        context: &'static str,
    },

    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for elliptic-curve primitive operations
pub type Result<T> = core::result::Result<T, Error>;

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::DivisionByZero { context } => CoreError::DivisionByZero { context },
            Error::NotInvertible { context } => CoreError::InvalidParameter {
                context,
                message: "value is not invertible modulo the field prime".to_string(),
            },
            Error::InvalidPoint { context } => CoreError::InvalidPoint {
                context,
                message: "point does not satisfy the curve equation".to_string(),
            },
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "curve parameter",
                },
                message: reason.into_owned(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
