//! Error type definitions for key agreement operations

use thiserror::Error as ThisError;

/// Primary error type for the secdh public API
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A private or public key is malformed or out of range
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        /// Operation or type that rejected the key
        context: &'static str,
        /// Human-readable reason
        message: String,
    },

    /// A point does not satisfy the curve equation.
    ///
    /// When returned from a shared-secret computation the peer's public key
    /// must be treated as untrusted and the session rejected, not retried.
    #[error("Invalid point: {context}: {message}")]
    InvalidPoint {
        /// Operation that rejected the point
        context: &'static str,
        /// Human-readable reason
        message: String,
    },

    /// Attempted inverse of a value congruent to zero
    #[error("Division by zero: {context}")]
    DivisionByZero {
        /// Operation that attempted the inversion
        context: &'static str,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        /// Parameter or operation name
        context: &'static str,
        /// Human-readable reason
        message: String,
    },

    /// Key agreement produced no usable shared secret
    #[error("Key agreement failed: {context}: {message}")]
    KeyAgreement {
        /// Algorithm name
        context: &'static str,
        /// Human-readable reason
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        /// Source of the error
        context: &'static str,
        /// Human-readable reason
        message: String,
    },
}

/// Result type for secdh operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind and message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidPoint { message, .. } => Self::InvalidPoint { context, message },
            Self::DivisionByZero { .. } => Self::DivisionByZero { context },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::KeyAgreement { message, .. } => Self::KeyAgreement { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// True for errors caused by an off-curve point
    pub fn is_invalid_point(&self) -> bool {
        matches!(self, Self::InvalidPoint { .. })
    }
}
