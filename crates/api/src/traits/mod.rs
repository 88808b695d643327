//! Trait definitions shared across the secdh crates

pub mod key_agreement;

pub use key_agreement::KeyAgreement;
