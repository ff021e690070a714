//! Polynomial arithmetic over GF(2)
//!
//! Polynomials are word sequences (see [`super::words`]) where bit `i`
//! is the coefficient of `z^i`. Addition is XOR and multiplication is
//! carry-less.

use alloc::vec;
use alloc::vec::Vec;

use super::words::{self, WORD_BITS};
use crate::error::{validate, Error, Result};

/// Index of the highest set bit, or -1 for the zero polynomial
pub fn degree(a: &[u8]) -> isize {
    for (i, &w) in a.iter().enumerate().rev() {
        if w != 0 {
            let top = (WORD_BITS - 1) - w.leading_zeros() as usize;
            return (i * WORD_BITS + top) as isize;
        }
    }
    -1
}

#[inline]
fn word_at(a: &[u8], index: isize) -> u8 {
    if index < 0 {
        0
    } else {
        a.get(index as usize).copied().unwrap_or(0)
    }
}

/// Shift `a` left in place by `shift` bits.
///
/// Returns the carry-out word, i.e. the word that would sit just above
/// the top of `a` after the shift.
pub fn shift_left(a: &mut [u8], shift: usize) -> u8 {
    let len = a.len() as isize;
    let word_shift = (shift / WORD_BITS) as isize;
    let bit_shift = (shift % WORD_BITS) as u32;

    let shifted = |a: &[u8], i: isize| -> u8 {
        let hi = word_at(a, i - word_shift);
        if bit_shift == 0 {
            hi
        } else {
            (hi << bit_shift) | (word_at(a, i - word_shift - 1) >> (WORD_BITS as u32 - bit_shift))
        }
    };

    let carry = shifted(a, len);

    if bit_shift == 0 {
        let ws = (word_shift as usize).min(a.len());
        a.copy_within(0..a.len() - ws, ws);
        a[..ws].fill(0);
        return carry;
    }

    // Top down, so every source word is read before it is overwritten
    for i in (0..len).rev() {
        let w = shifted(a, i);
        a[i as usize] = w;
    }
    carry
}

/// Shift `a` right in place by `shift` bits.
///
/// Returns the carry-out word, i.e. the word that would sit just below
/// bit zero after the shift.
pub fn shift_right(a: &mut [u8], shift: usize) -> u8 {
    let len = a.len() as isize;
    let word_shift = (shift / WORD_BITS) as isize;
    let bit_shift = (shift % WORD_BITS) as u32;

    let shifted = |a: &[u8], i: isize| -> u8 {
        let lo = word_at(a, i + word_shift);
        if bit_shift == 0 {
            lo
        } else {
            (lo >> bit_shift) | (word_at(a, i + word_shift + 1) << (WORD_BITS as u32 - bit_shift))
        }
    };

    let carry = shifted(a, -1);

    if bit_shift == 0 {
        let ws = (word_shift as usize).min(a.len());
        a.copy_within(ws.., 0);
        let keep = a.len() - ws;
        a[keep..].fill(0);
        return carry;
    }

    for i in 0..len {
        let w = shifted(a, i);
        a[i as usize] = w;
    }
    carry
}

/// XOR `b` into `a`. Words of `b` past the end of `a` must be zero.
#[inline]
pub fn add_assign(a: &mut [u8], b: &[u8]) {
    for (x, y) in a.iter_mut().zip(b) {
        *x ^= y;
    }
}

/// Field addition of two word sequences into a buffer of `width` words
pub fn add(a: &[u8], b: &[u8], width: usize) -> Vec<u8> {
    let mut out = vec![0u8; width];
    add_assign(&mut out, a);
    add_assign(&mut out, b);
    out
}

/// Shift-and-add multiplication.
///
/// The product has `a.len() + b.len()` words, enough for any degree.
pub fn multiply(a: &[u8], b: &[u8]) -> Vec<u8> {
    let width = a.len() + b.len();
    let mut acc = vec![0u8; width];
    let mut running = vec![0u8; width];
    running[..b.len()].copy_from_slice(b);

    let top = degree(a);
    for i in 0..=top {
        if words::test_bit(a, i as usize) {
            add_assign(&mut acc, &running);
        }
        shift_left(&mut running, 1);
    }
    acc
}

/// Reduce `c` modulo `modulus`, returning `width` words.
///
/// A table of the modulus shifted by every needed bit position is built
/// once per call; the top bits of `c` are then cleared from the highest
/// down to `degree(modulus)`.
pub fn general_mod(c: &[u8], modulus: &[u8], width: usize) -> Result<Vec<u8>> {
    let md = degree(modulus);
    if md < 0 {
        return Err(Error::DivisionByZero { context: "polynomial reduction" });
    }
    validate::parameter(
        width * WORD_BITS >= md as usize,
        "width",
        "too narrow for a remainder of this modulus",
    )?;
    Ok(reduce_by_table(c, modulus, md as usize, width))
}

/// Table-driven reduction for a modulus of known non-negative degree.
pub(crate) fn reduce_by_table(c: &[u8], modulus: &[u8], md: usize, width: usize) -> Vec<u8> {
    let sig_words = md / WORD_BITS + 1;
    let buf_len = c.len().max(sig_words);
    let mut r = vec![0u8; buf_len];
    r[..c.len()].copy_from_slice(c);

    let dc = degree(&r);
    if dc >= md as isize {
        let span = dc as usize - md;
        let mut table: Vec<Vec<u8>> = Vec::with_capacity(span + 1);
        let mut entry = vec![0u8; buf_len];
        entry[..sig_words].copy_from_slice(&modulus[..sig_words]);
        for _ in 0..=span {
            table.push(entry.clone());
            shift_left(&mut entry, 1);
        }

        for i in (md..=dc as usize).rev() {
            if words::test_bit(&r, i) {
                add_assign(&mut r, &table[i - md]);
            }
        }
    }

    r.resize(width.max(buf_len), 0);
    r.truncate(width);
    r
}

/// `general_mod(multiply(a, b), modulus)`
pub fn mul_mod(a: &[u8], b: &[u8], modulus: &[u8], width: usize) -> Result<Vec<u8>> {
    general_mod(&multiply(a, b), modulus, width)
}
