// Field and point arithmetic on the 9-bit test curve and on sect163k1

use bincurve_algorithms::{Curve, DivisionAlgorithm, Error, FieldElement, ScalarMulAlgorithm};
use bincurve_params::{SECT163K1, TESTCURVE_GF2_9};

fn field_example() -> Result<(), Error> {
    let curve = Curve::from_params(&TESTCURVE_GF2_9)?;
    let field = curve.field();

    let a = FieldElement::from_u32(0x1FF, field.words())?;
    let b = FieldElement::from_u32(0x1FE, field.words())?;
    println!("a * b = {:#x}", field.mul(&a, &b).to_u32()?);

    for algorithm in [DivisionAlgorithm::Halving, DivisionAlgorithm::DegreeReduction] {
        let q = field.div_with(algorithm, &a, &b)?;
        println!("a / b ({:?}) = {:#x}", algorithm, q.to_u32()?);
    }

    if let Err(err) = field.inv(&field.zero()) {
        println!("1 / 0: {}", err);
    }
    Ok(())
}

fn point_example() -> Result<(), Error> {
    let curve = Curve::from_params(&SECT163K1)?
        .with_scalar_multiplication(ScalarMulAlgorithm::MontgomeryLadder);

    let k = FieldElement::from_hex("0123456789abcdef", curve.scalar_words())?;
    let p = curve.mul_generator(&k)?;
    if let (Some(x), Some(y)) = (p.x(), p.y()) {
        println!("kP = ({}, {})", hex::encode(x.to_be_bytes()), hex::encode(y.to_be_bytes()));
    }

    let n = curve.order().clone();
    println!("nP is infinity: {}", curve.mul_generator(&n)?.is_infinity());
    Ok(())
}

fn main() -> Result<(), Error> {
    field_example()?;
    point_example()
}
