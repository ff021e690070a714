//! Binary field arithmetic GF(2^m)
//!
//! Elements are polynomials over GF(2) in polynomial basis, stored as
//! little-word-first 8-bit words. The layers build on each other:
//!
//! - [`words`]: comparison, bit access and copying on borrowed buffers
//! - [`poly`]: degree, shifts, addition, multiplication and reduction
//! - [`reduction`]: sparse fast reduction for trinomials and pentanomials
//! - [`division`]: Sun's halving and the degree-reduction division
//! - [`BinaryField`]: the field defined by one reduction polynomial
//!
//! Nothing here is constant-time.

pub mod division;
mod element;
mod field;
pub mod poly;
pub mod reduction;
pub mod words;

pub use division::DivisionAlgorithm;
pub use element::FieldElement;
pub use field::BinaryField;
pub use reduction::{FastReduction, SparseReduction};
