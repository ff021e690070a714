//! Division and inversion modulo a binary polynomial
//!
//! Two interchangeable algorithms compute `y / x mod f`. Both reduce their
//! inputs first, reject a zero divisor, and report a divisor that shares a
//! factor with `f` instead of looping; with an irreducible `f` that can
//! only happen for a zero divisor.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

use super::poly;
use super::words;
use crate::error::{validate, Error, Result};

/// Selects the binary division algorithm used by a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DivisionAlgorithm {
    /// Sun's halving algorithm
    #[default]
    Halving,
    /// Degree-reduction algorithm (Guide to ECC, Algorithm 2.48)
    DegreeReduction,
}

impl DivisionAlgorithm {
    /// Compute `y / x mod modulus` into `width` words
    pub fn divide(self, y: &[u8], x: &[u8], modulus: &[u8], width: usize) -> Result<Vec<u8>> {
        match self {
            DivisionAlgorithm::Halving => halving_divide(y, x, modulus, width),
            DivisionAlgorithm::DegreeReduction => degree_reduction_divide(y, x, modulus, width),
        }
    }

    /// Compute `1 / a mod modulus` into `width` words
    pub fn invert(self, a: &[u8], modulus: &[u8], width: usize) -> Result<Vec<u8>> {
        let mut one = vec![0u8; width.max(1)];
        one[0] = 1;
        self.divide(&one, a, modulus, width)
    }
}

/// Reduced operands shared by both algorithms
struct Operands {
    y: Vec<u8>,
    x: Vec<u8>,
    modulus: Vec<u8>,
}

/// Reduce `y` and `x`, resize everything to `width` words.
///
/// Returns `None` when the quotient is trivially zero.
fn prepare(
    y: &[u8],
    x: &[u8],
    modulus: &[u8],
    width: usize,
    context: &'static str,
) -> Result<Option<Operands>> {
    let md = poly::degree(modulus);
    validate::nonzero_divisor(md < 0, context)?;
    validate::parameter(
        (md as usize) < width * words::WORD_BITS,
        "width",
        "modulus does not fit the working width",
    )?;

    let x = poly::general_mod(x, modulus, width)?;
    validate::nonzero_divisor(words::is_zero(&x), context)?;

    let y = poly::general_mod(y, modulus, width)?;
    if words::is_zero(&y) {
        return Ok(None);
    }

    let mut m = vec![0u8; width];
    let sig = md as usize / words::WORD_BITS + 1;
    m[..sig].copy_from_slice(&modulus[..sig]);

    Ok(Some(Operands { y, x, modulus: m }))
}

#[inline]
fn is_even(a: &[u8]) -> bool {
    a.first().map_or(true, |w| w & 1 == 0)
}

/// Halve `acc` modulo `modulus`, adding the modulus first when `acc` is odd
#[inline]
fn halve_mod(acc: &mut [u8], modulus: &[u8]) {
    if !is_even(acc) {
        poly::add_assign(acc, modulus);
    }
    poly::shift_right(acc, 1);
}

/// Sun's halving division.
///
/// Works on `(A, U) = (x, y)` and `(B, V) = (f, 0)`, halving whichever of
/// A and B is even and otherwise folding the larger into the smaller,
/// until `A == B`. The modulus must have a non-zero constant term.
pub fn halving_divide(y: &[u8], x: &[u8], modulus: &[u8], width: usize) -> Result<Vec<u8>> {
    const CONTEXT: &str = "Sun division";

    let ops = match prepare(y, x, modulus, width, CONTEXT)? {
        Some(ops) => ops,
        None => return Ok(vec![0u8; width]),
    };
    validate::parameter(!is_even(&ops.modulus), "modulus", "constant term must be 1")?;

    let modulus = ops.modulus;
    let mut a = ops.x;
    let mut b = modulus.clone();
    let mut u = ops.y;
    let mut v = vec![0u8; width];

    loop {
        let cmp = words::compare(&a, &b);
        if cmp == Ordering::Equal {
            break;
        }

        if is_even(&a) {
            poly::shift_right(&mut a, 1);
            halve_mod(&mut u, &modulus);
        } else if is_even(&b) {
            poly::shift_right(&mut b, 1);
            halve_mod(&mut v, &modulus);
        } else if cmp == Ordering::Greater {
            poly::add_assign(&mut a, &b);
            poly::shift_right(&mut a, 1);
            poly::add_assign(&mut u, &v);
            halve_mod(&mut u, &modulus);
        } else {
            poly::add_assign(&mut b, &a);
            poly::shift_right(&mut b, 1);
            poly::add_assign(&mut v, &u);
            halve_mod(&mut v, &modulus);
        }
    }

    // A and B meet at gcd(x, f)
    if !words::is_number(&a, 1) {
        return Err(Error::NotInvertible { context: CONTEXT });
    }
    Ok(u)
}

/// Degree-reduction division.
///
/// Keeps `(u, v) = (x, f)` and `(g1, g2) = (y, 0)` with the invariant
/// `g1 * x = u * y` (and likewise for `g2`, `v`), cancelling the leading
/// term of `u` with a shifted `v` until `u == 1`. The accumulators grow
/// past the field width, so they run at double width and are reduced at
/// the end.
pub fn degree_reduction_divide(y: &[u8], x: &[u8], modulus: &[u8], width: usize) -> Result<Vec<u8>> {
    const CONTEXT: &str = "degree-reduction division";

    let ops = match prepare(y, x, modulus, width, CONTEXT)? {
        Some(ops) => ops,
        None => return Ok(vec![0u8; width]),
    };

    let wide = 2 * width;
    let mut u = ops.x;
    let mut v = ops.modulus.clone();
    let mut g1 = vec![0u8; wide];
    g1[..width].copy_from_slice(&ops.y);
    let mut g2 = vec![0u8; wide];

    let mut t = vec![0u8; wide];
    while !words::is_number(&u, 1) {
        if words::is_zero(&u) {
            return Err(Error::NotInvertible { context: CONTEXT });
        }

        let mut j = poly::degree(&u) - poly::degree(&v);
        if j < 0 {
            core::mem::swap(&mut u, &mut v);
            core::mem::swap(&mut g1, &mut g2);
            j = -j;
        }
        let j = j as usize;

        // u <- u + z^j * v
        t[..width].copy_from_slice(&v);
        t[width..].fill(0);
        poly::shift_left(&mut t, j);
        poly::add_assign(&mut u, &t[..width]);

        // g1 <- g1 + z^j * g2
        t.copy_from_slice(&g2);
        poly::shift_left(&mut t, j);
        poly::add_assign(&mut g1, &t);
    }

    poly::general_mod(&g1, &ops.modulus, width)
}
