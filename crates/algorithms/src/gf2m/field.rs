//! The field GF(2^m) defined by a reduction polynomial

use alloc::sync::Arc;

use super::division::DivisionAlgorithm;
use super::element::FieldElement;
use super::poly;
use super::reduction::FastReduction;
use crate::error::{validate, Result};

/// GF(2^m) in polynomial basis.
///
/// Every operation returns elements of exactly [`words`](Self::words)
/// words, reduced below degree m. Operands may be wider, e.g. scalars,
/// and are reduced on the way in.
#[derive(Clone, Debug)]
pub struct BinaryField {
    modulus: FieldElement,
    degree: usize,
    reduction: Option<Arc<dyn FastReduction>>,
    division: DivisionAlgorithm,
}

impl BinaryField {
    /// Build a field from its reduction polynomial.
    ///
    /// The polynomial's width sets the element width.
    pub fn new(modulus: FieldElement) -> Result<Self> {
        let degree = modulus.degree();
        validate::parameter(degree >= 1, "modulus", "degree must be at least 1")?;
        Ok(Self {
            modulus,
            degree: degree as usize,
            reduction: None,
            division: DivisionAlgorithm::default(),
        })
    }

    /// Attach a fast reduction strategy for this modulus
    pub fn with_fast_reduction(mut self, reduction: Arc<dyn FastReduction>) -> Result<Self> {
        validate::parameter(
            reduction.degree() == self.degree,
            "reduction",
            "degree does not match the field modulus",
        )?;
        self.reduction = Some(reduction);
        Ok(self)
    }

    /// Select the division algorithm
    pub fn with_division(mut self, division: DivisionAlgorithm) -> Self {
        self.division = division;
        self
    }

    /// The reduction polynomial q
    #[inline]
    pub fn modulus(&self) -> &FieldElement {
        &self.modulus
    }

    /// Extension degree m
    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Words per element
    #[inline]
    pub fn words(&self) -> usize {
        self.modulus.width()
    }

    /// The active division algorithm
    #[inline]
    pub fn division(&self) -> DivisionAlgorithm {
        self.division
    }

    /// True when a fast reduction strategy is attached
    #[inline]
    pub fn has_fast_reduction(&self) -> bool {
        self.reduction.is_some()
    }

    /// The zero element
    pub fn zero(&self) -> FieldElement {
        FieldElement::zero(self.words())
    }

    /// The element one
    pub fn one(&self) -> FieldElement {
        FieldElement::one(self.words())
    }

    /// True when `a` has degree below m
    pub fn is_reduced(&self, a: &FieldElement) -> bool {
        a.degree() < self.degree as isize
    }

    /// Reduce a polynomial of any width into the field
    pub fn reduce(&self, c: &FieldElement) -> FieldElement {
        let words = match &self.reduction {
            Some(fast) => fast.reduce(c.as_words(), self.words()),
            None => self.reduce_generic_words(c.as_words()),
        };
        FieldElement::from_words(words)
    }

    fn reduce_generic_words(&self, c: &[u8]) -> alloc::vec::Vec<u8> {
        poly::reduce_by_table(c, self.modulus.as_words(), self.degree, self.words())
    }

    /// a + b
    pub fn add(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        self.reduce(&a.add(b))
    }

    /// a * b, reduced with the fast strategy when one is attached
    pub fn mul(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        self.reduce(&a.mul_unreduced(b))
    }

    /// a * b, always reduced with the generic table algorithm
    pub fn mul_generic(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        let product = poly::multiply(a.as_words(), b.as_words());
        FieldElement::from_words(self.reduce_generic_words(&product))
    }

    /// a²
    pub fn square(&self, a: &FieldElement) -> FieldElement {
        self.mul(a, a)
    }

    /// y / x
    pub fn div(&self, y: &FieldElement, x: &FieldElement) -> Result<FieldElement> {
        self.div_with(self.division, y, x)
    }

    /// y / x with an explicit algorithm
    pub fn div_with(
        &self,
        algorithm: DivisionAlgorithm,
        y: &FieldElement,
        x: &FieldElement,
    ) -> Result<FieldElement> {
        let words = algorithm.divide(
            y.as_words(),
            x.as_words(),
            self.modulus.as_words(),
            self.words(),
        )?;
        Ok(FieldElement::from_words(words))
    }

    /// a⁻¹
    pub fn inv(&self, a: &FieldElement) -> Result<FieldElement> {
        self.div(&self.one(), a)
    }
}
