//! ECDSA key material

use core::fmt;

use bincurve_algorithms::{FieldElement, Point};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Private scalar d, interpreted as an integer in [1, n-1]
///
/// The scalar is wiped on drop and never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    scalar: FieldElement,
}

impl PrivateKey {
    /// Wrap a scalar; range checks happen when the key is used
    pub fn from_scalar(scalar: FieldElement) -> Self {
        Self { scalar }
    }

    /// The scalar d
    pub fn scalar(&self) -> &FieldElement {
        &self.scalar
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// A private scalar d and its public point Q = d·P
#[derive(Clone, Debug)]
pub struct KeyPair {
    /// Public point Q
    pub public: Point,
    /// Private scalar d
    pub private: PrivateKey,
}
