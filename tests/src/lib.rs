//! Testing utilities for the secdh library

use num_bigint::{BigInt, Sign};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use secdh_algorithms::ec::{Curve, CurveParameters, CurvePoint};


/// y² = x³ + 7 over F_17. The generator (15, 13) has order 18 and reaches
/// every point of the group.
pub fn toy_curve() -> Curve {
    let params = CurveParameters::new(
        "toy17",
        BigInt::from(17),
        BigInt::from(0),
        BigInt::from(7),
        CurvePoint::new_affine(BigInt::from(15), BigInt::from(13)),
        BigInt::from(18),
        BigInt::from(1),
    )
    .expect("toy curve parameters are valid");
    Curve::new(params)
}

/// Deterministic CSPRNG for reproducible tests
pub fn seeded_rng(seed: u8) -> ChaCha20Rng {
    ChaCha20Rng::from_seed([seed; 32])
}

/// Parse a big-endian hex string into an integer
pub fn hex_int(s: &str) -> BigInt {
    let bytes = hex::decode(s).expect("test vector hex is well formed");
    BigInt::from_bytes_be(Sign::Plus, &bytes)
}

/// Build an affine point from hex coordinates, without validation
pub fn hex_point(x: &str, y: &str) -> CurvePoint {
    CurvePoint::new_affine(hex_int(x), hex_int(y))
}
