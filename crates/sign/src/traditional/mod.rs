//! Traditional signature schemes
//!
//! ECDSA over binary curves y² + xy = x³ + ax² + b.

pub mod ecdsa;

pub use ecdsa::{
    Ecdsa, EcdsaConfig, FixedNonce, KeyPair, NonceSource, OrderArithmetic, PrivateKey,
    RandomNonce, Signature, DEFAULT_MAX_SIGN_ATTEMPTS,
};
