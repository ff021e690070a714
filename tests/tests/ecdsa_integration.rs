//! ECDSA across the parameter, arithmetic and signature crates

use bincurve_algorithms::{DivisionAlgorithm, FieldElement, Point, ScalarMulAlgorithm};
use bincurve_params::{SECT163K1, TESTCURVE_GF2_9};
use bincurve_sign::{Ecdsa, EcdsaConfig, Error, FixedNonce, OrderArithmetic, PrivateKey};
use bincurve_tests::{curve, digest, keypair, ALL_CURVES};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_round_trip_every_curve_and_configuration() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    for params in ALL_CURVES {
        for division in [DivisionAlgorithm::Halving, DivisionAlgorithm::DegreeReduction] {
            for scalar_mul in [ScalarMulAlgorithm::DoubleAndAdd, ScalarMulAlgorithm::MontgomeryLadder] {
                let curve = curve(params)
                    .with_division(division)
                    .with_scalar_multiplication(scalar_mul);
                let ecdsa = Ecdsa::new(&curve);
                let keys = keypair(&ecdsa, &mut rng);
                ecdsa.check_public_key(&keys.public).unwrap();

                let e = FieldElement::random(&mut rng, curve.words()).unwrap();
                let sig = ecdsa.sign(&keys.private, &e, &mut rng).unwrap();
                assert!(ecdsa.verify(&keys.public, &e, &sig), "{} {:?} {:?}", params.name, division, scalar_mul);
            }
        }
    }
}

#[test]
fn test_configurations_interoperate() {
    // Signatures depend on the group, not on how it is computed
    let mut rng = ChaCha20Rng::seed_from_u64(163);
    let plain = curve(&SECT163K1);
    let tuned = curve(&SECT163K1)
        .with_division(DivisionAlgorithm::DegreeReduction)
        .with_scalar_multiplication(ScalarMulAlgorithm::MontgomeryLadder);

    let signer = Ecdsa::new(&plain);
    let verifier = Ecdsa::new(&tuned);
    let keys = keypair(&signer, &mut rng);
    let e = digest(&plain, "0000000000000000000000000000000000deadbeef");

    let sig = signer.sign(&keys.private, &e, &mut rng).unwrap();
    assert!(verifier.verify(&keys.public, &e, &sig));
    assert!(verifier.validate_public_key(&keys.public));
}

#[test]
fn test_signature_does_not_verify_on_another_curve() {
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    let toy = curve(&TESTCURVE_GF2_9);
    let k163 = curve(&SECT163K1);
    let ecdsa = Ecdsa::new(&toy);
    let keys = keypair(&ecdsa, &mut rng);
    let e = digest(&toy, "1237");
    let sig = ecdsa.sign(&keys.private, &e, &mut rng).unwrap();

    // The toy public key is not a sect163k1 point
    let other = Ecdsa::new(&k163);
    assert!(!other.validate_public_key(&keys.public));
    assert!(!other.verify(k163.generator(), &e, &sig));
}

#[test]
fn test_known_signature_gf2_9() {
    let toy = curve(&TESTCURVE_GF2_9);
    let ecdsa = Ecdsa::new(&toy);
    let key = PrivateKey::from_scalar(FieldElement::from_u32(12, toy.scalar_words()).unwrap());
    let public = toy.mul_generator(key.scalar()).unwrap();
    let e = digest(&toy, "1237");

    let sig = ecdsa
        .sign_with_nonce(&key, &e, &mut FixedNonce::new(FieldElement::from_u32(5, 2).unwrap()))
        .unwrap();
    assert_eq!(public, Point::affine(
        FieldElement::from_u32(479, 2).unwrap(),
        FieldElement::from_u32(234, 2).unwrap(),
    ));
    assert_eq!(sig.r.to_u32().unwrap(), 12);
    assert_eq!(sig.s.to_u32().unwrap(), 29);
    assert_eq!(ecdsa.verify_strict(&public, &e, &sig), Ok(()));
}

#[test]
fn test_small_order_key_is_rejected() {
    let k163 = curve(&SECT163K1);
    let t = Point::affine(FieldElement::zero(21), FieldElement::one(21));

    let checked = Ecdsa::new(&k163);
    assert!(matches!(checked.check_public_key(&t), Err(Error::InvalidPublicKey(_))));

    let config = EcdsaConfig { check_subgroup: false, ..EcdsaConfig::default() };
    assert!(Ecdsa::with_config(&k163, config).validate_public_key(&t));

    // The toy curve has cofactor 14 and the same order-two point
    let toy = curve(&TESTCURVE_GF2_9);
    let t = Point::affine(FieldElement::zero(2), FieldElement::one(2));
    assert!(t.is_on_curve(&toy));
    assert!(!Ecdsa::new(&toy).validate_public_key(&t));
    assert!(Ecdsa::with_config(&toy, config).validate_public_key(&t));
}

#[test]
fn test_legacy_convention_differs() {
    let toy = curve(&TESTCURVE_GF2_9);
    let key = PrivateKey::from_scalar(FieldElement::from_u32(12, 3).unwrap());
    let public = toy.mul_generator(key.scalar()).unwrap();
    let e = digest(&toy, "1237");
    let config = EcdsaConfig {
        order_arithmetic: OrderArithmetic::FieldReduced,
        ..EcdsaConfig::default()
    };

    let integer = Ecdsa::new(&toy)
        .sign_with_nonce(&key, &e, &mut FixedNonce::new(FieldElement::from_u32(5, 2).unwrap()))
        .unwrap();
    let legacy = Ecdsa::with_config(&toy, config)
        .sign_with_nonce(&key, &e, &mut FixedNonce::new(FieldElement::from_u32(5, 2).unwrap()))
        .unwrap();
    assert_ne!(integer, legacy);
    assert!(Ecdsa::new(&toy).verify(&public, &e, &integer));
    assert!(!Ecdsa::with_config(&toy, config).verify(&public, &e, &legacy));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn gf2_9_sign_verify_round_trip(seed in any::<u64>(), e in any::<u16>()) {
        let toy = curve(&TESTCURVE_GF2_9);
        let ecdsa = Ecdsa::new(&toy);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let keys = keypair(&ecdsa, &mut rng);
        let e = FieldElement::from_u32(u32::from(e), toy.words()).unwrap();

        let sig = ecdsa.sign(&keys.private, &e, &mut rng).unwrap();
        prop_assert!(ecdsa.verify(&keys.public, &e, &sig));
        prop_assert!(sig.r < *toy.order() && sig.s < *toy.order());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn sect163k1_sign_verify_round_trip(seed in any::<u64>(), e in prop::collection::vec(any::<u8>(), 21)) {
        let k163 = curve(&SECT163K1);
        let ecdsa = Ecdsa::new(&k163);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let keys = keypair(&ecdsa, &mut rng);
        let e = FieldElement::from_words(e);

        let sig = ecdsa.sign(&keys.private, &e, &mut rng).unwrap();
        prop_assert!(ecdsa.verify(&keys.public, &e, &sig));
    }
}
