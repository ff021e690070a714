//! Run-time curve records

use alloc::sync::Arc;

use bincurve_params::BinaryCurveParams;

use super::point::Point;
use super::scalar_mul::ScalarMulAlgorithm;
use crate::error::{validate, Error, Result};
use crate::gf2m::{words, BinaryField, DivisionAlgorithm, FieldElement, SparseReduction};

/// A binary curve y² + xy = x³ + ax² + b with a base point of order n.
///
/// Built once from a [`BinaryCurveParams`] record and never mutated;
/// clones share the fast reduction strategy.
#[derive(Clone, Debug)]
pub struct Curve {
    name: &'static str,
    field: BinaryField,
    a: FieldElement,
    b: FieldElement,
    generator: Point,
    order: FieldElement,
    cofactor: u32,
    scalar_mul: ScalarMulAlgorithm,
}

impl Curve {
    /// Validate a parameter record and build the curve.
    ///
    /// Fails when the widths disagree, when a sparse term list does not
    /// describe the reduction polynomial, or when the base point is not
    /// on the curve.
    pub fn from_params(params: &BinaryCurveParams) -> Result<Self> {
        let w = params.words;
        validate::length("curve words", w, words::words_for_bits(params.m + 1))?;
        let modulus = FieldElement::from_be_bytes(params.reduction_poly, w)?;
        validate::parameter(
            modulus.degree() == params.m as isize,
            "reduction_poly",
            "degree does not match m",
        )?;

        let mut field = BinaryField::new(modulus)?;
        if let Some(tail) = params.sparse_terms {
            let sparse = SparseReduction::new(params.m, tail)?;
            validate::parameter(
                sparse.polynomial(w)?.as_slice() == field.modulus().as_words(),
                "sparse_terms",
                "do not describe the reduction polynomial",
            )?;
            field = field.with_fast_reduction(Arc::new(sparse))?;
        }

        let a = FieldElement::from_be_bytes(params.a, w)?;
        let b = FieldElement::from_be_bytes(params.b, w)?;
        let gx = FieldElement::from_be_bytes(params.gx, w)?;
        let gy = FieldElement::from_be_bytes(params.gy, w)?;
        let order = FieldElement::from_be_bytes(params.order, w + 1)?;
        validate::parameter(!order.is_zero(), "order", "must be non-zero")?;

        let curve = Curve {
            name: params.name,
            field,
            a,
            b,
            generator: Point::affine(gx, gy),
            order,
            cofactor: params.cofactor,
            scalar_mul: ScalarMulAlgorithm::default(),
        };

        if !curve.contains(&curve.generator) {
            return Err(Error::param(params.name, "base point is not on the curve"));
        }
        Ok(curve)
    }

    /// Select the field division algorithm
    pub fn with_division(mut self, division: DivisionAlgorithm) -> Self {
        self.field = self.field.with_division(division);
        self
    }

    /// Select the scalar multiplication algorithm
    pub fn with_scalar_multiplication(mut self, algorithm: ScalarMulAlgorithm) -> Self {
        self.scalar_mul = algorithm;
        self
    }

    /// Curve name from the parameter record
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The underlying field GF(2^m)
    #[inline]
    pub fn field(&self) -> &BinaryField {
        &self.field
    }

    /// Coefficient a
    #[inline]
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Coefficient b
    #[inline]
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// The base point P
    #[inline]
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// The order n of P, one word wider than a field element
    #[inline]
    pub fn order(&self) -> &FieldElement {
        &self.order
    }

    /// Cofactor h
    #[inline]
    pub fn cofactor(&self) -> u32 {
        self.cofactor
    }

    /// Words per field element
    #[inline]
    pub fn words(&self) -> usize {
        self.field.words()
    }

    /// Words per scalar
    #[inline]
    pub fn scalar_words(&self) -> usize {
        self.order.width()
    }

    /// Extension degree m
    #[inline]
    pub fn degree(&self) -> usize {
        self.field.degree()
    }

    /// The active scalar multiplication algorithm
    #[inline]
    pub fn scalar_multiplication(&self) -> ScalarMulAlgorithm {
        self.scalar_mul
    }

    /// True when `p` satisfies the curve equation
    pub fn contains(&self, p: &Point) -> bool {
        p.is_on_curve(self)
    }

    /// kP for the base point
    pub fn mul_generator(&self, k: &FieldElement) -> Result<Point> {
        self.generator.mul(k, self)
    }
}
