//! Owned field elements and scalars

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use super::{poly, words};
use crate::error::{Error, Result};

/// A polynomial over GF(2) held as little-word-first 8-bit words.
///
/// The same type carries curve scalars, which are one word wider than
/// field elements. Equality, ordering and hashing ignore leading zero
/// words, so values of different widths compare numerically.
#[derive(Clone, Debug, Default, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldElement {
    words: Vec<u8>,
}

impl FieldElement {
    /// The zero element with `width` words
    pub fn zero(width: usize) -> Self {
        Self { words: vec![0u8; width] }
    }

    /// The element one with `width` words
    pub fn one(width: usize) -> Self {
        let mut words = vec![0u8; width.max(1)];
        words[0] = 1;
        Self { words }
    }

    /// Every word set to its maximum value
    pub fn saturated(width: usize) -> Self {
        Self { words: vec![words::WORD_MAX; width] }
    }

    /// Wrap a little-word-first word vector
    pub fn from_words(words: Vec<u8>) -> Self {
        Self { words }
    }

    /// Parse big-endian bytes into exactly `width` words.
    ///
    /// Leading zero bytes beyond `width` are accepted; any non-zero byte
    /// that does not fit is an error.
    pub fn from_be_bytes(bytes: &[u8], width: usize) -> Result<Self> {
        let mut words: Vec<u8> = bytes.iter().rev().copied().collect();
        if words.len() > width {
            if !words::is_zero(&words[width..]) {
                return Err(Error::Length {
                    context: "field element bytes",
                    expected: width,
                    actual: bytes.len(),
                });
            }
            words.truncate(width);
        }
        words.resize(width, 0);
        Ok(Self { words })
    }

    /// Parse a big-endian hex string into exactly `width` words
    pub fn from_hex(s: &str, width: usize) -> Result<Self> {
        let bytes = hex::decode(s)
            .map_err(|_| Error::param("hex", "not a valid hex string"))?;
        Self::from_be_bytes(&bytes, width)
    }

    /// Big-endian bytes, one per word
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.words.iter().rev().copied().collect()
    }

    /// Build from a native integer, for tests and small curves
    pub fn from_u32(value: u32, width: usize) -> Result<Self> {
        let mut words = vec![0u8; width];
        words::from_u32(&mut words, value)?;
        Ok(Self { words })
    }

    /// Convert to a native integer; fails above four words
    pub fn to_u32(&self) -> Result<u32> {
        words::to_u32(&self.words)
    }

    /// Draw `width` uniformly random words.
    ///
    /// A failing source is reported as [`Error::RandomSource`]; partial
    /// output is never used.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R, width: usize) -> Result<Self> {
        let mut words = vec![0u8; width];
        rng.try_fill_bytes(&mut words)?;
        Ok(Self { words })
    }

    /// Number of words
    #[inline]
    pub fn width(&self) -> usize {
        self.words.len()
    }

    /// The underlying words, least significant first
    #[inline]
    pub fn as_words(&self) -> &[u8] {
        &self.words
    }

    /// Mutable access to the underlying words
    #[inline]
    pub fn as_words_mut(&mut self) -> &mut [u8] {
        &mut self.words
    }

    /// Consume into the underlying words
    pub fn into_words(self) -> Vec<u8> {
        self.words
    }

    /// True for the zero polynomial
    #[inline]
    pub fn is_zero(&self) -> bool {
        words::is_zero(&self.words)
    }

    /// True for the constant polynomial 1
    #[inline]
    pub fn is_one(&self) -> bool {
        words::is_number(&self.words, 1)
    }

    /// True when every word is all ones
    #[inline]
    pub fn is_saturated(&self) -> bool {
        words::is_saturated(&self.words)
    }

    /// Index of the highest set bit, -1 for zero
    #[inline]
    pub fn degree(&self) -> isize {
        poly::degree(&self.words)
    }

    /// Bit `i`, the coefficient of z^i
    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        words::test_bit(&self.words, i)
    }

    /// Set bit `i`
    pub fn set_bit(&mut self, i: usize) -> Result<()> {
        words::set_bit(&mut self.words, i)
    }

    /// Copy into `width` words, failing if a set bit would be dropped
    pub fn resized(&self, width: usize) -> Result<Self> {
        let mut words = self.words.clone();
        if words.len() > width {
            if !words::is_zero(&words[width..]) {
                return Err(Error::Length {
                    context: "field element resize",
                    expected: width,
                    actual: self.words.len(),
                });
            }
            words.truncate(width);
        }
        words.resize(width, 0);
        Ok(Self { words })
    }

    /// Field addition (XOR); the result is as wide as the wider operand
    pub fn add(&self, other: &Self) -> Self {
        let width = self.width().max(other.width());
        Self { words: poly::add(&self.words, &other.words, width) }
    }

    /// Double-width carry-less product, without reduction
    pub fn mul_unreduced(&self, other: &Self) -> Self {
        Self { words: poly::multiply(&self.words, &other.words) }
    }

    /// Polynomial remainder modulo `modulus`, with `modulus.width()` words
    pub fn rem(&self, modulus: &Self) -> Result<Self> {
        let words = poly::general_mod(&self.words, &modulus.words, modulus.width())?;
        Ok(Self { words })
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        words::compare(&self.words, &other.words) == Ordering::Equal
    }
}

impl Eq for FieldElement {}

impl Hash for FieldElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let significant = self
            .words
            .iter()
            .rposition(|&w| w != 0)
            .map_or(0, |i| i + 1);
        self.words[..significant].hash(state);
    }
}

impl PartialOrd for FieldElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldElement {
    fn cmp(&self, other: &Self) -> Ordering {
        words::compare(&self.words, &other.words)
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        let len = self.width().max(other.width());
        let mut acc = Choice::from(1u8);
        for i in 0..len {
            let a = self.words.get(i).copied().unwrap_or(0);
            let b = other.words.get(i).copied().unwrap_or(0);
            acc &= a.ct_eq(&b);
        }
        acc
    }
}
