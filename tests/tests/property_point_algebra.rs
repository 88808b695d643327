//! Property-based tests for the curve group law and ECDH

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use proptest::prelude::*;

use secdh_algorithms::ec::{inverse_modulus, Curve, CurvePoint};
use secdh_kex::Ecdh;
use secdh_tests::toy_curve;

/// Nonzero 256-bit integers, possibly above p or n
fn nonzero_u256() -> impl Strategy<Value = BigInt> {
    any::<[u8; 32]>()
        .prop_filter("nonzero", |b| b.iter().any(|&x| x != 0))
        .prop_map(|b| BigInt::from_bytes_be(Sign::Plus, &b))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn inverse_times_value_is_one(k in nonzero_u256(), negate in any::<bool>()) {
        let p = Curve::secp256k1().params().p().clone();
        prop_assume!(!k.mod_floor(&p).is_zero());
        let k = if negate { -k } else { k };

        let inv = inverse_modulus(&k, &p).unwrap();
        prop_assert!(inv >= BigInt::zero() && inv < p);
        prop_assert_eq!((&k * &inv).mod_floor(&p), BigInt::one());
    }

    #[test]
    fn scalar_multiplication_distributes(k1 in nonzero_u256(), k2 in nonzero_u256()) {
        let curve = Curve::secp256k1();
        let lhs = curve.scalar_mult_base(&(&k1 + &k2)).unwrap();
        let rhs = curve
            .point_addition(
                &curve.scalar_mult_base(&k1).unwrap(),
                &curve.scalar_mult_base(&k2).unwrap(),
            )
            .unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn point_plus_negation_is_identity(k in nonzero_u256()) {
        let curve = Curve::secp256k1();
        let p = curve.scalar_mult_base(&k).unwrap();
        let neg = curve.point_negate(&p);

        prop_assert!(curve.point_on_curve(&neg));
        prop_assert!(curve.point_addition(&p, &neg).unwrap().is_identity());
        prop_assert_eq!(curve.point_addition(&p, &CurvePoint::Infinity).unwrap(), p.clone());
        prop_assert_eq!(curve.point_addition(&CurvePoint::Infinity, &p).unwrap(), p);
    }

    #[test]
    fn negative_scalar_negates_result(k in 1i64..1_000_000) {
        let curve = Curve::secp256k1();
        let pos = curve.scalar_mult_base(&BigInt::from(k)).unwrap();
        let neg = curve.scalar_mult_base(&BigInt::from(-k)).unwrap();
        prop_assert_eq!(neg, curve.point_negate(&pos));
    }

    #[test]
    fn ecdh_parties_agree(seed in any::<[u8; 32]>()) {
        use rand::SeedableRng;
        let mut rng = rand_chacha::ChaCha20Rng::from_seed(seed);
        let ecdh = Ecdh::secp256k1();

        let (a_sk, a_pk) = ecdh.generate_keypair(&mut rng).unwrap();
        let (b_sk, b_pk) = ecdh.generate_keypair(&mut rng).unwrap();
        prop_assert_eq!(
            ecdh.compute_shared_secret(&a_sk, &b_pk).unwrap(),
            ecdh.compute_shared_secret(&b_sk, &a_pk).unwrap()
        );
    }
}

proptest! {
    #[test]
    fn toy_group_law_is_associative(a in 0u32..18, b in 0u32..18, c in 0u32..18) {
        let curve = toy_curve();
        let mul = |k: u32| curve.scalar_mult_base(&BigInt::from(k)).unwrap();
        let (pa, pb, pc) = (mul(a), mul(b), mul(c));

        let left = curve
            .point_addition(&curve.point_addition(&pa, &pb).unwrap(), &pc)
            .unwrap();
        let right = curve
            .point_addition(&pa, &curve.point_addition(&pb, &pc).unwrap())
            .unwrap();
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(left, mul((a + b + c) % 18));
    }
}
