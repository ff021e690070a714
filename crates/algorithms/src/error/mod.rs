//! Error handling for binary field and curve primitives

use alloc::borrow::Cow;
use core::fmt;

/// The error type for binary field and curve primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in words
        expected: usize,
        /// Actual length in words
        actual: usize,
    },

    /// The divisor of a field division was zero
    DivisionByZero {
        /// Operation that attempted the division
        context: &'static str,
    },

    /// The divisor shares a factor with a reducible modulus
    NotInvertible {
        /// Operation that attempted the inversion
        context: &'static str,
    },

    /// The randomness source failed to deliver the requested bytes
    RandomSource {
        /// Description reported by the source
        details: Cow<'static, str>,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Error::RandomSource {
            details: Cow::Owned(alloc::format!("{}", err)),
        }
    }
}

/// Result type for binary field and curve operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}",
                    context, expected, actual)
            }
            Error::DivisionByZero { context } => {
                write!(f, "Division by zero in {}", context)
            }
            Error::NotInvertible { context } => {
                write!(f, "Divisor is not invertible in {}", context)
            }
            Error::RandomSource { details } => {
                write!(f, "Random source failure: {}", details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

pub mod validate;
