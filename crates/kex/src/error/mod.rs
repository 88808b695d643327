//! Error handling for key agreement operations

use secdh_algorithms::error::Error as PrimitiveError;
use secdh_api::error::Error as CoreError;
use thiserror::Error as ThisError;

/// Error type for key agreement operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Primitive error
    #[error("Primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    /// Keypair generation failed
    #[error("Key generation error for {algorithm}: {details}")]
    KeyGeneration {
        /// Algorithm name
        algorithm: &'static str,
        /// What went wrong
        details: &'static str,
    },

    /// Invalid key format
    #[error("Invalid {key_type} key: {reason}")]
    InvalidKey {
        /// Which key was rejected
        key_type: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// A peer public key is unusable as a Diffie-Hellman input
    #[error("Invalid point in {context}: {reason}")]
    InvalidPoint {
        /// Operation that rejected the point
        context: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// The agreement produced no shared secret
    #[error("Key agreement error for {algorithm}: {details}")]
    KeyAgreement {
        /// Algorithm name
        algorithm: &'static str,
        /// What went wrong
        details: &'static str,
    },
}

/// Result type for key agreement operations
pub type Result<T> = core::result::Result<T, Error>;

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::KeyGeneration { algorithm, details } => CoreError::Other {
                context: algorithm,
                message: format!("key generation failed: {}", details),
            },
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                message: reason.to_string(),
            },
            Error::InvalidPoint { context, reason } => CoreError::InvalidPoint {
                context,
                message: reason.to_string(),
            },
            Error::KeyAgreement { algorithm, details } => CoreError::KeyAgreement {
                context: algorithm,
                message: details.to_string(),
            },
        }
    }
}

// Include validation submodule
pub mod validate;

// Re-export core error handling traits
pub use secdh_api::error::ResultExt;
