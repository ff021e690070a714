//! Scalar multiplication
//!
//! Both algorithms compute the same kP for every scalar width; the
//! ladder performs one addition and one doubling per scalar bit whatever
//! the bit value, but the field operations beneath it still branch on
//! their operands.

use super::curve::Curve;
use super::point::Point;
use crate::error::Result;
use crate::gf2m::words::WORD_BITS;
use crate::gf2m::FieldElement;

/// Selects the scalar multiplication algorithm used by a curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarMulAlgorithm {
    /// Left-to-right double-and-add (Guide to ECC, Algorithm 3.27)
    #[default]
    DoubleAndAdd,
    /// Montgomery ladder over every bit of the scalar's width
    MontgomeryLadder,
}

impl ScalarMulAlgorithm {
    /// Compute kP
    pub fn multiply(self, k: &FieldElement, p: &Point, curve: &Curve) -> Result<Point> {
        match self {
            ScalarMulAlgorithm::DoubleAndAdd => double_and_add(k, p, curve),
            ScalarMulAlgorithm::MontgomeryLadder => montgomery_ladder(k, p, curve),
        }
    }
}

/// Double-and-add from the most significant set bit of `k` down
pub fn double_and_add(k: &FieldElement, p: &Point, curve: &Curve) -> Result<Point> {
    if p.is_infinity() || k.is_zero() {
        return Ok(Point::Infinity);
    }

    let mut acc = Point::Infinity;
    for i in (0..=k.degree() as usize).rev() {
        acc = acc.double(curve)?;
        if k.bit(i) {
            acc = acc.add(p, curve)?;
        }
    }
    Ok(acc)
}

/// Montgomery ladder keeping R1 = R0 + P
pub fn montgomery_ladder(k: &FieldElement, p: &Point, curve: &Curve) -> Result<Point> {
    let mut r0 = Point::Infinity;
    let mut r1 = p.clone();

    for i in (0..k.width() * WORD_BITS).rev() {
        if k.bit(i) {
            r0 = r0.add(&r1, curve)?;
            r1 = r1.double(curve)?;
        } else {
            r1 = r0.add(&r1, curve)?;
            r0 = r0.double(curve)?;
        }
    }
    Ok(r0)
}
