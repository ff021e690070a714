//! Curve-specific fast reduction
//!
//! A curve whose reduction polynomial is a trinomial or pentanomial can
//! fold high bits down with a handful of XORs instead of walking a table
//! of shifted moduli. The result is identical to
//! [`general_mod`](super::poly::general_mod).

use alloc::vec::Vec;
use core::fmt;

use super::poly;
use super::words::{self, WORD_BITS};
use crate::error::{validate, Result};

/// A reduction strategy bound to one reduction polynomial
pub trait FastReduction: fmt::Debug + Send + Sync {
    /// Degree m of the reduction polynomial
    fn degree(&self) -> usize;

    /// Reduce a polynomial of any width to `width` words
    fn reduce(&self, c: &[u8], width: usize) -> Vec<u8>;
}

/// Reduction by a sparse polynomial z^m + z^t1 + ... + 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseReduction {
    degree: usize,
    tail: Vec<usize>,
}

impl SparseReduction {
    /// Build from the degree and the exponents below it.
    ///
    /// Every tail exponent must be strictly below `degree`.
    pub fn new(degree: usize, tail: &[usize]) -> Result<Self> {
        validate::parameter(degree > 0, "degree", "must be positive")?;
        validate::parameter(
            tail.iter().all(|&t| t < degree),
            "tail",
            "exponents must be below the degree",
        )?;
        Ok(Self {
            degree,
            tail: tail.to_vec(),
        })
    }

    /// The polynomial as a word sequence of `width` words
    pub fn polynomial(&self, width: usize) -> Result<Vec<u8>> {
        let mut out = alloc::vec![0u8; width];
        words::set_bit(&mut out, self.degree)?;
        for &t in &self.tail {
            words::flip_bit(&mut out, t);
        }
        Ok(out)
    }
}

impl FastReduction for SparseReduction {
    fn degree(&self) -> usize {
        self.degree
    }

    fn reduce(&self, c: &[u8], width: usize) -> Vec<u8> {
        let m = self.degree;
        let mut r = c.to_vec();
        let top = poly::degree(&r);

        // z^i = z^(i-m) * (tail) mod q; each tail bit lands below i
        if top >= m as isize {
            for i in (m..=top as usize).rev() {
                if words::test_bit(&r, i) {
                    words::flip_bit(&mut r, i);
                    for &t in &self.tail {
                        words::flip_bit(&mut r, i - m + t);
                    }
                }
            }
        }

        r.resize(width.max(r.len()), 0);
        r.truncate(width);
        debug_assert!(width * WORD_BITS >= m);
        r
    }
}
