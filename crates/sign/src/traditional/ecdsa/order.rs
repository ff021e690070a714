//! Arithmetic modulo the group order n
//!
//! Two conventions exist for the scalar side of ECDSA on binary curves.
//! [`OrderArithmetic::Integer`] treats scalars as integers and works in
//! Z/nZ. [`OrderArithmetic::FieldReduced`] keeps the older convention in
//! which `d·r`, `k⁻¹` and `s⁻¹` are computed in GF(2^m) and "mod n" is a
//! polynomial remainder. Signatures from the two are not interchangeable.

use bincurve_algorithms::{Curve, Error as AlgoError, FieldElement};
use num_bigint::BigUint;

use crate::error::Result;

/// How scalar quantities are reduced modulo the group order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderArithmetic {
    /// Integer arithmetic in Z/nZ; signatures round-trip
    #[default]
    Integer,
    /// Field products and inverses reduced as polynomials modulo n.
    ///
    /// Kept for compatibility with signatures produced under that
    /// convention. Verification of its own signatures is not guaranteed.
    FieldReduced,
}

/// Scalar operations bound to one curve and one convention
#[derive(Debug, Clone)]
pub(crate) struct OrderOps<'c> {
    curve: &'c Curve,
    arithmetic: OrderArithmetic,
    n: BigUint,
}

impl<'c> OrderOps<'c> {
    pub(crate) fn new(curve: &'c Curve, arithmetic: OrderArithmetic) -> Self {
        let n = BigUint::from_bytes_le(curve.order().as_words());
        Self { curve, arithmetic, n }
    }

    fn to_int(a: &FieldElement) -> BigUint {
        BigUint::from_bytes_le(a.as_words())
    }

    fn to_scalar(&self, v: &BigUint) -> Result<FieldElement> {
        let scalar = FieldElement::from_words(v.to_bytes_le()).resized(self.curve.scalar_words())?;
        Ok(scalar)
    }

    /// a mod n, as a scalar of the curve's scalar width
    pub(crate) fn reduce(&self, a: &FieldElement) -> Result<FieldElement> {
        match self.arithmetic {
            OrderArithmetic::Integer => self.to_scalar(&(Self::to_int(a) % &self.n)),
            OrderArithmetic::FieldReduced => Ok(a.rem(self.curve.order())?),
        }
    }

    /// s = k⁻¹(e + d·r) mod n.
    ///
    /// Returns `None` when this nonce cannot produce a usable s and the
    /// caller must draw again.
    pub(crate) fn signature_s(
        &self,
        d: &FieldElement,
        e: &FieldElement,
        r: &FieldElement,
        k: &FieldElement,
    ) -> Result<Option<FieldElement>> {
        let s = match self.arithmetic {
            OrderArithmetic::Integer => {
                let k_inv = match Self::to_int(k).modinv(&self.n) {
                    Some(inv) => inv,
                    None => return Ok(None),
                };
                let sum = Self::to_int(e) + Self::to_int(d) * Self::to_int(r);
                let s = (k_inv * sum) % &self.n;
                // A non-unit s could never be verified
                if s.modinv(&self.n).is_none() {
                    return Ok(None);
                }
                self.to_scalar(&s)?
            }
            OrderArithmetic::FieldReduced => {
                let f = self.curve.field();
                if f.reduce(k).is_zero() {
                    return Ok(None);
                }
                let t = f.add(e, &f.mul(d, r));
                self.reduce(&f.div(&t, k)?)?
            }
        };
        Ok(if s.is_zero() { None } else { Some(s) })
    }

    /// (u₁, u₂) = (e·w, r·w) mod n with w = s⁻¹.
    ///
    /// Returns `None` when s has no inverse under this convention.
    pub(crate) fn verification_scalars(
        &self,
        e: &FieldElement,
        r: &FieldElement,
        s: &FieldElement,
    ) -> Result<Option<(FieldElement, FieldElement)>> {
        match self.arithmetic {
            OrderArithmetic::Integer => {
                let w = match Self::to_int(s).modinv(&self.n) {
                    Some(w) => w,
                    None => return Ok(None),
                };
                let u1 = (Self::to_int(e) * &w) % &self.n;
                let u2 = (Self::to_int(r) * &w) % &self.n;
                Ok(Some((self.to_scalar(&u1)?, self.to_scalar(&u2)?)))
            }
            OrderArithmetic::FieldReduced => {
                let w = match self.curve.field().inv(s) {
                    Ok(inv) => self.reduce(&inv)?,
                    Err(AlgoError::DivisionByZero { .. }) => return Ok(None),
                    Err(err) => return Err(err.into()),
                };
                let order = self.curve.order();
                let u1 = e.mul_unreduced(&w).rem(order)?;
                let u2 = r.mul_unreduced(&w).rem(order)?;
                Ok(Some((u1, u2)))
            }
        }
    }
}
