use num_bigint::BigInt;
use num_traits::{One, Zero};

use secdh_algorithms::ec::{inverse_modulus, Curve, CurvePoint};
use secdh_algorithms::Error as PrimitiveError;
use secdh_api::{Error as ApiError, KeyAgreement};
use secdh_kex::{Ecdh, EcdhK256, PrivateKey, PublicKey};
use secdh_tests::vectors::{K256_ECDH, K256_MULTIPLES};
use secdh_tests::{hex_int, hex_point, seeded_rng, toy_curve};

#[test]
fn test_generator_is_on_curve() {
    let curve = Curve::secp256k1();
    assert!(curve.point_on_curve(curve.generator()));
    assert!(curve.point_on_curve(&CurvePoint::Infinity));
}

#[test]
fn test_k256_known_multiples() {
    let curve = Curve::secp256k1();
    for &(k, x, y) in K256_MULTIPLES {
        assert_eq!(
            curve.scalar_mult_base(&BigInt::from(k)).unwrap(),
            hex_point(x, y),
            "k = {}",
            k
        );
    }
}

#[test]
fn test_order_times_generator_is_identity() {
    let curve = Curve::secp256k1();
    let n = curve.params().n().clone();
    assert!(curve.scalar_mult_base(&n).unwrap().is_identity());
    assert!(curve
        .scalar_mult_base(&(&n * BigInt::from(2)))
        .unwrap()
        .is_identity());
}

#[test]
fn test_inverse_of_zero_is_division_by_zero() {
    let p = Curve::secp256k1().params().p().clone();
    assert_eq!(
        inverse_modulus(&BigInt::zero(), &p),
        Err(PrimitiveError::DivisionByZero {
            context: "inverse_modulus"
        })
    );

    // Surfaced through the public error type
    let api: ApiError = PrimitiveError::DivisionByZero {
        context: "inverse_modulus",
    }
    .into();
    assert_eq!(api.to_string(), "Division by zero: inverse_modulus");
}

#[test]
fn test_off_curve_addition_rejected() {
    let curve = Curve::secp256k1();
    let g = curve.generator().clone();
    let bad = hex_point(
        "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b9",
    );

    assert!(matches!(
        curve.point_addition(&g, &bad),
        Err(PrimitiveError::InvalidPoint { .. })
    ));
    assert!(matches!(
        curve.point_addition(&bad, &g),
        Err(PrimitiveError::InvalidPoint { .. })
    ));
}

#[test]
fn test_fixed_key_exchange() {
    let ecdh = Ecdh::secp256k1();
    let curve = ecdh.curve();
    let v = &K256_ECDH;

    let alice_sk =
        PrivateKey::from_bytes(&hex::decode(v.alice_private).unwrap(), curve).unwrap();
    let bob_sk = PrivateKey::from_bytes(&hex::decode(v.bob_private).unwrap(), curve).unwrap();

    let alice_pk = ecdh.public_key(&alice_sk).unwrap();
    let bob_pk = ecdh.public_key(&bob_sk).unwrap();
    assert_eq!(alice_pk.point(), &hex_point(v.alice_public.0, v.alice_public.1));
    assert_eq!(bob_pk.point(), &hex_point(v.bob_public.0, v.bob_public.1));

    let s1 = ecdh.compute_shared_secret(&alice_sk, &bob_pk).unwrap();
    let s2 = ecdh.compute_shared_secret(&bob_sk, &alice_pk).unwrap();
    assert_eq!(s1, s2);
    assert_eq!(s1.to_bigint(), hex_int(v.shared_x));
    assert_eq!(hex::encode(s1.as_bytes()), v.shared_x);
}

#[test]
fn test_peer_key_from_wire_coordinates() {
    let ecdh = Ecdh::secp256k1();
    let v = &K256_ECDH;
    let bob_pk = PublicKey::from_affine(
        ecdh.curve(),
        hex_int(v.bob_public.0),
        hex_int(v.bob_public.1),
    )
    .unwrap();
    let alice_sk =
        PrivateKey::from_bytes(&hex::decode(v.alice_private).unwrap(), ecdh.curve()).unwrap();

    let secret = EcdhK256::shared_secret(&alice_sk, &bob_pk).unwrap();
    assert_eq!(hex::encode(secret.as_bytes()), v.shared_x);

    // Tampered y-coordinate
    let tampered = PublicKey::from_affine(
        ecdh.curve(),
        hex_int(v.bob_public.0),
        hex_int(v.bob_public.1) + BigInt::one(),
    );
    assert!(ApiError::from(tampered.unwrap_err()).is_invalid_point());
}

#[test]
fn test_random_exchanges_agree() {
    let mut rng = seeded_rng(17);
    for _ in 0..3 {
        let (a_pk, a_sk) = EcdhK256::keypair(&mut rng).unwrap();
        let (b_pk, b_sk) = EcdhK256::keypair(&mut rng).unwrap();
        assert_eq!(
            EcdhK256::shared_secret(&a_sk, &b_pk).unwrap(),
            EcdhK256::shared_secret(&b_sk, &a_pk).unwrap()
        );
    }
}

#[test]
fn test_toy_curve_full_cycle() {
    let curve = toy_curve();
    let g = curve.generator().clone();

    let mut acc = CurvePoint::Infinity;
    let mut seen = Vec::new();
    for _ in 0..18 {
        acc = curve.point_addition(&acc, &g).unwrap();
        assert!(curve.point_on_curve(&acc));
        seen.push(acc.clone());
    }
    assert!(acc.is_identity());

    // 17 distinct affine points plus the identity
    seen.sort_by_key(|p| p.coordinates().map(|(x, y)| (x.clone(), y.clone())));
    seen.dedup();
    assert_eq!(seen.len(), 18);
}

#[test]
fn test_toy_curve_exchange() {
    let ecdh = Ecdh::new(toy_curve());
    let mut rng = seeded_rng(23);

    for _ in 0..8 {
        let (a_sk, a_pk) = ecdh.generate_keypair(&mut rng).unwrap();
        let (b_sk, b_pk) = ecdh.generate_keypair(&mut rng).unwrap();
        let ab = ecdh.compute_shared_secret(&a_sk, &b_pk);
        let ba = ecdh.compute_shared_secret(&b_sk, &a_pk);

        // The toy group has composite order, so some products hit the identity
        match (ab, ba) {
            (Ok(x), Ok(y)) => assert_eq!(x, y),
            (Err(e1), Err(e2)) => {
                assert_eq!(e1, e2);
                assert!(matches!(e1, secdh_kex::Error::KeyAgreement { .. }));
            }
            _ => panic!("Both sides must agree on success or failure"),
        }
    }
}
