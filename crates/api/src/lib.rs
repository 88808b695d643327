//! Public API traits and types for the secdh library
//!
//! This crate provides the public API surface for the secdh workspace: the
//! error type every layer converts into and the key agreement trait that
//! curve-specific ECDH implementations provide.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

pub use traits::KeyAgreement;

// Re-export trait modules for direct access
pub use traits::key_agreement;
