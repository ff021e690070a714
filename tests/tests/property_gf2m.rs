//! Property-based tests for binary field arithmetic

use bincurve_algorithms::{Curve, DivisionAlgorithm, FieldElement};
use bincurve_params::{SECT163K1, TESTCURVE_GF2_9};
use bincurve_tests::{curve, element};
use proptest::prelude::*;

fn words(n: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), n)
}

fn check_field_laws(curve: &Curve, a: &[u8], b: &[u8], c: &[u8]) -> Result<(), TestCaseError> {
    let f = curve.field();
    let (a, b, c) = (element(curve, a), element(curve, b), element(curve, c));

    prop_assert!(f.add(&a, &a).is_zero());
    prop_assert_eq!(f.add(&a, &b), f.add(&b, &a));
    prop_assert_eq!(f.mul(&a, &b), f.mul(&b, &a));
    prop_assert_eq!(
        f.mul(&a, &f.add(&b, &c)),
        f.add(&f.mul(&a, &b), &f.mul(&a, &c))
    );
    prop_assert_eq!(f.mul(&a, &f.one()), a.clone());
    prop_assert!(f.is_reduced(&f.mul(&a, &b)));

    if !a.is_zero() {
        let inv = f.inv(&a).unwrap();
        prop_assert!(f.mul(&a, &inv).is_one());
        prop_assert_eq!(f.mul(&f.div(&b, &a).unwrap(), &a), b.clone());
    }
    Ok(())
}

fn check_division_agrees(curve: &Curve, y: &[u8], x: &[u8]) -> Result<(), TestCaseError> {
    let f = curve.field();
    let (y, x) = (element(curve, y), element(curve, x));

    let halving = f.div_with(DivisionAlgorithm::Halving, &y, &x);
    let book = f.div_with(DivisionAlgorithm::DegreeReduction, &y, &x);
    if x.is_zero() {
        prop_assert!(halving.is_err());
        prop_assert!(book.is_err());
    } else {
        prop_assert_eq!(halving.unwrap(), book.unwrap());
    }
    Ok(())
}

proptest! {
    #[test]
    fn gf2_9_field_laws(a in words(2), b in words(2), c in words(2)) {
        check_field_laws(&curve(&TESTCURVE_GF2_9), &a, &b, &c)?;
    }

    #[test]
    fn gf2_9_division_algorithms_agree(y in words(2), x in words(2)) {
        check_division_agrees(&curve(&TESTCURVE_GF2_9), &y, &x)?;
    }

    #[test]
    fn gf2_163_field_laws(a in words(21), b in words(21), c in words(21)) {
        check_field_laws(&curve(&SECT163K1), &a, &b, &c)?;
    }

    #[test]
    fn gf2_163_division_algorithms_agree(y in words(21), x in words(21)) {
        check_division_agrees(&curve(&SECT163K1), &y, &x)?;
    }

    #[test]
    fn gf2_163_sparse_reduction_matches_generic(a in words(21), b in words(21)) {
        let curve = curve(&SECT163K1);
        let f = curve.field();
        let (a, b) = (element(&curve, &a), element(&curve, &b));
        prop_assert_eq!(f.mul(&a, &b), f.mul_generic(&a, &b));
    }

    #[test]
    fn be_bytes_preserve_value(bytes in words(21)) {
        let e = FieldElement::from_be_bytes(&bytes, 21).unwrap();
        prop_assert_eq!(e.to_be_bytes(), bytes.clone());
        let hex_form = FieldElement::from_hex(&hex::encode(&bytes), 21).unwrap();
        prop_assert_eq!(hex_form, e);
    }
}
