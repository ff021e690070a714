//! Word-sequence primitives
//!
//! A value is a slice of 8-bit words stored least-significant word first.
//! Nothing here allocates; every function reads or writes caller-owned
//! buffers. Slices of different lengths compare as if the shorter one were
//! padded with zero words.

use core::cmp::Ordering;

use crate::error::{validate, Error, Result};

/// Bits per word
pub const WORD_BITS: usize = 8;

/// Largest value a single word can hold
pub const WORD_MAX: u8 = u8::MAX;

/// Number of words needed to hold `bits` bits
#[inline]
pub const fn words_for_bits(bits: usize) -> usize {
    (bits + WORD_BITS - 1) / WORD_BITS
}

/// Compare two word sequences numerically, most significant word first
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    let len = a.len().max(b.len());
    for i in (0..len).rev() {
        let wa = a.get(i).copied().unwrap_or(0);
        let wb = b.get(i).copied().unwrap_or(0);
        match wa.cmp(&wb) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Test a single bit by global index; bits past the end read as zero
#[inline]
pub fn test_bit(a: &[u8], bit: usize) -> bool {
    a.get(bit / WORD_BITS)
        .map(|w| (w >> (bit % WORD_BITS)) & 1 == 1)
        .unwrap_or(false)
}

/// Set a single bit by global index
pub fn set_bit(a: &mut [u8], bit: usize) -> Result<()> {
    let word = bit / WORD_BITS;
    validate::max_length("bit index", word + 1, a.len())?;
    a[word] |= 1 << (bit % WORD_BITS);
    Ok(())
}

/// Flip a single bit; bits past the end are ignored
#[inline]
pub(crate) fn flip_bit(a: &mut [u8], bit: usize) {
    if let Some(w) = a.get_mut(bit / WORD_BITS) {
        *w ^= 1 << (bit % WORD_BITS);
    }
}

/// True when every word is zero
#[inline]
pub fn is_zero(a: &[u8]) -> bool {
    a.iter().all(|&w| w == 0)
}

/// True when every word holds [`WORD_MAX`]
///
/// This is the legacy all-ones encoding of the point at infinity; it is
/// only used to reject such coordinates at the API boundary.
#[inline]
pub fn is_saturated(a: &[u8]) -> bool {
    !a.is_empty() && a.iter().all(|&w| w == WORD_MAX)
}

/// True when the sequence equals the small integer `n`
pub fn is_number(a: &[u8], n: u32) -> bool {
    let bytes = n.to_le_bytes();
    compare(a, &bytes) == Ordering::Equal
}

/// Copy `src` into `dst` starting at word `offset`
pub fn copy_at(dst: &mut [u8], src: &[u8], offset: usize) -> Result<()> {
    validate::max_length("word copy", offset + src.len(), dst.len())?;
    dst[offset..offset + src.len()].copy_from_slice(src);
    Ok(())
}

/// Fill every word with `value`
#[inline]
pub fn fill(dst: &mut [u8], value: u8) {
    dst.iter_mut().for_each(|w| *w = value);
}

/// Interpret at most four words as a native integer
pub fn to_u32(a: &[u8]) -> Result<u32> {
    validate::max_length("u32 conversion", a.len(), 4)?;
    let mut bytes = [0u8; 4];
    bytes[..a.len()].copy_from_slice(a);
    Ok(u32::from_le_bytes(bytes))
}

/// Write a native integer into `dst`, clearing the remaining words
pub fn from_u32(dst: &mut [u8], value: u32) -> Result<()> {
    let bytes = value.to_le_bytes();
    let needed = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    if needed > dst.len() {
        return Err(Error::Length {
            context: "u32 conversion",
            expected: needed,
            actual: dst.len(),
        });
    }
    fill(dst, 0);
    dst[..needed].copy_from_slice(&bytes[..needed]);
    Ok(())
}
