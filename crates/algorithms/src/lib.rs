//! Binary field and binary elliptic curve primitives
//!
//! This crate provides arithmetic in GF(2^m) with a polynomial basis,
//! affine point arithmetic on curves y² + xy = x³ + ax² + b, and scalar
//! multiplication. It is the numeric engine beneath `bincurve-sign`.
//!
//! # Security
//!
//! The algorithms branch on secret values and are **not** constant-time.
//! Nothing here is hardened against side channels.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Binary field arithmetic
pub mod gf2m;
pub use gf2m::{BinaryField, DivisionAlgorithm, FastReduction, FieldElement, SparseReduction};

// Binary elliptic curves
pub mod ec;
pub use ec::{Curve, Point, ScalarMulAlgorithm};
