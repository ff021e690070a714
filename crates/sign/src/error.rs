//! Error types for the signature crate

use bincurve_algorithms::error::Error as AlgoError;
use thiserror::Error;

/// Errors that can occur during signature operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The random private scalar reduced to zero; draw again
    #[error("private scalar reduced to zero modulo the group order")]
    DegenerateScalar,

    /// The public key failed validation
    #[error("invalid public key: {0}")]
    InvalidPublicKey(&'static str),

    /// Every signing attempt produced a degenerate nonce, r or s
    #[error("signature generation gave up after {attempts} degenerate attempts")]
    SignatureGeneration {
        /// Number of attempts made
        attempts: usize,
    },

    /// The signature was rejected
    #[error("verification failed: {0}")]
    Verification(&'static str),

    /// The randomness source failed; never proceed with partial entropy
    #[error("random source failure: {0}")]
    RandomSource(String),

    /// Invalid parameter
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Arithmetic failure in the underlying field or curve
    #[error("algorithm error: {0}")]
    Algorithm(String),
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;

// Convert from algorithms::error::Error
impl From<AlgoError> for Error {
    fn from(err: AlgoError) -> Self {
        match err {
            AlgoError::RandomSource { details } => Error::RandomSource(details.into_owned()),
            AlgoError::Parameter { name, reason } => {
                Error::InvalidParameter(format!("{}: {}", name, reason))
            }
            AlgoError::Length { .. } => Error::InvalidParameter(err.to_string()),
            _ => Error::Algorithm(err.to_string()),
        }
    }
}
