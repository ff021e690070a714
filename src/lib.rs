//! # bincurve
//!
//! Arithmetic in binary fields GF(2^m), elliptic curves
//! y² + xy = x³ + ax² + b over them, and ECDSA on those curves.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bincurve = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `sign` (default): ECDSA; enables `std`
//! - `serde`: Serialization of field elements, points and signatures
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`bincurve-params`]: Curve parameter records (sect163k1 and a 9-bit test curve)
//! - [`bincurve-algorithms`]: Field and curve arithmetic
//! - [`bincurve-sign`]: ECDSA

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use bincurve_algorithms as algorithms;
pub use bincurve_params as params;

// Feature-gated re-exports
#[cfg(feature = "sign")]
pub use bincurve_sign as sign;

/// Common imports for bincurve users
pub mod prelude {
    // Curve parameters
    pub use crate::params::{BinaryCurveParams, SECT163K1, TESTCURVE_GF2_9};

    // Field and curve arithmetic
    pub use crate::algorithms::{
        BinaryField, Curve, DivisionAlgorithm, FieldElement, Point, ScalarMulAlgorithm,
    };

    // Signatures
    #[cfg(feature = "sign")]
    pub use crate::sign::{
        Ecdsa, EcdsaConfig, FixedNonce, KeyPair, NonceSource, OrderArithmetic, PrivateKey,
        Signature,
    };
}
