//! Validation utilities for key agreement operations

use super::{Error, Result};

/// Validate key pair generation parameters
pub fn key_generation(
    condition: bool,
    algorithm: &'static str,
    details: &'static str,
) -> Result<()> {
    if !condition {
        return Err(Error::KeyGeneration { algorithm, details });
    }
    Ok(())
}

/// Validate key format
pub fn key(condition: bool, key_type: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey { key_type, reason });
    }
    Ok(())
}

/// Validate a peer public key before it enters the group law
pub fn peer_point(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        log::warn!("{}: rejecting peer public key: {}", context, reason);
        return Err(Error::InvalidPoint { context, reason });
    }
    Ok(())
}

