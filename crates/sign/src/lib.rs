//! Digital signatures over binary elliptic curves
//!
//! ECDSA key generation, public key validation, signing and verification
//! on any curve built by [`bincurve_algorithms::Curve::from_params`].
//!
//! ```no_run
//! use bincurve_algorithms::{Curve, FieldElement};
//! use bincurve_params::SECT163K1;
//! use bincurve_sign::Ecdsa;
//! use rand::rngs::OsRng;
//!
//! let curve = Curve::from_params(&SECT163K1)?;
//! let ecdsa = Ecdsa::new(&curve);
//! let keys = ecdsa.keygen(&mut OsRng)?;
//! let digest = FieldElement::from_hex("0123456789abcdef", curve.words())?;
//! let signature = ecdsa.sign(&keys.private, &digest, &mut OsRng)?;
//! assert!(ecdsa.verify(&keys.public, &digest, &signature));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod traditional;

pub use error::{Error, Result};
pub use traditional::ecdsa::{
    Ecdsa, EcdsaConfig, FixedNonce, KeyPair, NonceSource, OrderArithmetic, PrivateKey,
    RandomNonce, Signature, DEFAULT_MAX_SIGN_ATTEMPTS,
};
