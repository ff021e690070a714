//! Sources of the per-signature nonce k

use bincurve_algorithms::FieldElement;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Result;

/// Supplies candidate nonces to the signing loop.
///
/// Candidates are raw; the signer reduces them modulo n and discards
/// degenerate ones.
pub trait NonceSource {
    /// Produce a candidate of `width` words
    fn next_nonce(&mut self, width: usize) -> Result<FieldElement>;
}

/// Draws every nonce from a cryptographic RNG
pub struct RandomNonce<'r, R: RngCore + CryptoRng> {
    rng: &'r mut R,
}

impl<'r, R: RngCore + CryptoRng> RandomNonce<'r, R> {
    /// Borrow `rng` for the duration of one signing call
    pub fn new(rng: &'r mut R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + CryptoRng> NonceSource for RandomNonce<'_, R> {
    fn next_nonce(&mut self, width: usize) -> Result<FieldElement> {
        Ok(FieldElement::random(self.rng, width)?)
    }
}

/// Returns the same nonce on every draw.
///
/// For reproducible test vectors only: reusing k across two messages
/// under one key reveals the key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct FixedNonce {
    value: FieldElement,
}

impl FixedNonce {
    /// Pin the nonce to `value`
    pub fn new(value: FieldElement) -> Self {
        Self { value }
    }
}

impl NonceSource for FixedNonce {
    fn next_nonce(&mut self, width: usize) -> Result<FieldElement> {
        Ok(self.value.resized(width)?)
    }
}
