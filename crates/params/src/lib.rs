//! Constant parameters for the bincurve library
//!
//! This crate holds data only. Nothing here performs arithmetic; the
//! records are consumed by `bincurve-algorithms`, which validates them
//! when a curve is constructed.

#![no_std]

pub mod traditional;

pub use traditional::binary_curves::{BinaryCurveParams, SECT163K1, TESTCURVE_GF2_9};
