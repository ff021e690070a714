//! Constants for traditional cryptographic algorithms

pub mod binary_curves;
