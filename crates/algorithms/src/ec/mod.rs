//! Binary elliptic curves in affine coordinates
//!
//! Curves have the non-supersingular form y² + xy = x³ + ax² + b over
//! GF(2^m). The point at infinity is an explicit [`Point::Infinity`]
//! variant. None of the operations are constant-time.

mod curve;
mod point;
mod scalar_mul;

pub use curve::Curve;
pub use point::Point;
pub use scalar_mul::{double_and_add, montgomery_ladder, ScalarMulAlgorithm};
