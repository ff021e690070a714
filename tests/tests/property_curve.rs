//! Property-based tests for binary curve arithmetic

use bincurve_algorithms::ec::montgomery_ladder;
use bincurve_algorithms::{FieldElement, Point, ScalarMulAlgorithm};
use bincurve_params::{SECT163K1, TESTCURVE_GF2_9};
use bincurve_tests::curve;
use proptest::prelude::*;

fn scalar(k: u32, width: usize) -> FieldElement {
    FieldElement::from_u32(k, width).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn gf2_9_scalar_mul_algorithms_agree(k in any::<u16>()) {
        let curve = curve(&TESTCURVE_GF2_9);
        let k = scalar(u32::from(k), curve.scalar_words());
        let p = curve.mul_generator(&k).unwrap();
        prop_assert!(p.is_on_curve(&curve));
        prop_assert_eq!(p, montgomery_ladder(&k, curve.generator(), &curve).unwrap());
    }

    #[test]
    fn gf2_9_scalar_mul_is_a_homomorphism(j in 0u32..518, k in 0u32..518) {
        let curve = curve(&TESTCURVE_GF2_9);
        let w = curve.scalar_words();
        let n = curve.order().to_u32().unwrap();
        let jp = curve.mul_generator(&scalar(j, w)).unwrap();
        let kp = curve.mul_generator(&scalar(k, w)).unwrap();
        let sum = curve.mul_generator(&scalar((j + k) % n, w)).unwrap();
        prop_assert_eq!(jp.add(&kp, &curve).unwrap(), sum.clone());
        prop_assert_eq!(kp.add(&jp, &curve).unwrap(), sum);

        let neg = curve.mul_generator(&scalar((n - k % n) % n, w)).unwrap();
        prop_assert_eq!(kp.negate(&curve), neg);
    }

    #[test]
    fn gf2_9_group_law_is_associative(i in 0u32..518, j in 0u32..518, k in 0u32..518) {
        let curve = curve(&TESTCURVE_GF2_9);
        let w = curve.scalar_words();
        // (0xEE, 0xAF) generates the whole 518-point group
        let p = Point::affine(scalar(0xEE, 2), scalar(0xAF, 2));
        let [a, b, c]: [Point; 3] = [i, j, k].map(|v| p.mul(&scalar(v, w), &curve).unwrap());
        let left = a.add(&b, &curve).unwrap().add(&c, &curve).unwrap();
        let right = a.add(&b.add(&c, &curve).unwrap(), &curve).unwrap();
        prop_assert_eq!(left, right);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn sect163k1_scalar_mul_algorithms_agree(k in prop::collection::vec(any::<u8>(), 22)) {
        let curve = curve(&SECT163K1);
        let ladder = curve.clone().with_scalar_multiplication(ScalarMulAlgorithm::MontgomeryLadder);
        let k = FieldElement::from_words(k);
        let p = curve.mul_generator(&k).unwrap();
        prop_assert!(p.is_on_curve(&curve));
        prop_assert_eq!(p, ladder.mul_generator(&k).unwrap());
    }
}
