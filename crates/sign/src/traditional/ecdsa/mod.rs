//! ECDSA over binary curves
//!
//! Follows the Guide to Elliptic Curve Cryptography, Algorithms 4.24
//! (key generation), 4.25 (public key validation), 4.29 (signing) and
//! 4.30 (verification). The digest is an input: callers hash and truncate
//! to the field width themselves.
//!
//! Nothing here is constant-time, the arithmetic beneath it branches on
//! the private scalar and the nonce.

mod keys;
mod nonce;
mod order;

pub use keys::{KeyPair, PrivateKey};
pub use nonce::{FixedNonce, NonceSource, RandomNonce};
pub use order::OrderArithmetic;

use bincurve_algorithms::{Curve, FieldElement, Point};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;

use crate::error::{Error, Result};
use order::OrderOps;

/// Default cap on signing attempts before giving up
pub const DEFAULT_MAX_SIGN_ATTEMPTS: usize = 256;

/// An ECDSA signature (r, s), both in [1, n-1]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    /// r = x(kP) mod n
    pub r: FieldElement,
    /// s = k⁻¹(e + d·r) mod n
    pub s: FieldElement,
}

/// Protocol configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcdsaConfig {
    /// Convention for arithmetic modulo n
    pub order_arithmetic: OrderArithmetic,
    /// Signing attempts before [`Error::SignatureGeneration`]
    pub max_sign_attempts: usize,
    /// Require n·Q = ∞ when validating public keys.
    ///
    /// Without it a point of small order on the curve (possible when the
    /// cofactor exceeds one) passes validation.
    pub check_subgroup: bool,
}

impl Default for EcdsaConfig {
    fn default() -> Self {
        Self {
            order_arithmetic: OrderArithmetic::default(),
            max_sign_attempts: DEFAULT_MAX_SIGN_ATTEMPTS,
            check_subgroup: true,
        }
    }
}

/// ECDSA bound to one curve
#[derive(Debug, Clone)]
pub struct Ecdsa<'c> {
    curve: &'c Curve,
    config: EcdsaConfig,
    ops: OrderOps<'c>,
}

impl<'c> Ecdsa<'c> {
    /// ECDSA with the default configuration
    pub fn new(curve: &'c Curve) -> Self {
        Self::with_config(curve, EcdsaConfig::default())
    }

    /// ECDSA with an explicit configuration
    pub fn with_config(curve: &'c Curve, config: EcdsaConfig) -> Self {
        Self {
            curve,
            config,
            ops: OrderOps::new(curve, config.order_arithmetic),
        }
    }

    /// The curve this instance signs over
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// The active configuration
    pub fn config(&self) -> &EcdsaConfig {
        &self.config
    }

    /// Generate a key pair
    ///
    /// 1. Draw a field-width random value
    /// 2. d = value mod n; if d = 0 fail with [`Error::DegenerateScalar`]
    /// 3. Q = d·P
    ///
    /// A zero d is surfaced, not retried; the caller decides whether to
    /// draw again.
    pub fn keygen<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<KeyPair> {
        let candidate = FieldElement::random(rng, self.curve.words())?;
        let d = self.ops.reduce(&candidate)?;
        if d.is_zero() {
            return Err(Error::DegenerateScalar);
        }

        let public = self.curve.mul_generator(&d)?;
        Ok(KeyPair {
            public,
            private: PrivateKey::from_scalar(d),
        })
    }

    /// Validate a public key, reporting the first failed check
    ///
    /// Checks in order: Q ≠ ∞, neither coordinate is the all-ones legacy
    /// infinity encoding, Q is not (0, 0), both coordinates are below the
    /// field polynomial q, Q is on the curve, and (when enabled) n·Q = ∞.
    pub fn check_public_key(&self, q: &Point) -> Result<()> {
        let (x, y) = match q {
            Point::Infinity => return Err(Error::InvalidPublicKey("point at infinity")),
            Point::Affine { x, y } => (x, y),
        };
        if x.is_saturated() || y.is_saturated() {
            return Err(Error::InvalidPublicKey("coordinate is the all-ones infinity encoding"));
        }
        if x.is_zero() && y.is_zero() {
            return Err(Error::InvalidPublicKey("zero point"));
        }

        // Coordinates are compared with q as integers, so values in
        // [2^m, q) pass and are reduced before any point arithmetic
        let field = self.curve.field();
        let q_poly = field.modulus();
        if x >= q_poly || y >= q_poly {
            return Err(Error::InvalidPublicKey("coordinate is not below the field polynomial"));
        }
        if !q.is_on_curve(self.curve) {
            return Err(Error::InvalidPublicKey("point is not on the curve"));
        }
        if self.config.check_subgroup {
            let reduced = Point::affine(field.reduce(x), field.reduce(y));
            if !reduced.mul(self.curve.order(), self.curve)?.is_infinity() {
                return Err(Error::InvalidPublicKey("point is outside the subgroup generated by P"));
            }
        }
        Ok(())
    }

    /// True when [`check_public_key`](Self::check_public_key) passes
    pub fn validate_public_key(&self, q: &Point) -> bool {
        self.check_public_key(q).is_ok()
    }

    /// Sign a digest with nonces drawn from `rng`
    pub fn sign<R: RngCore + CryptoRng>(
        &self,
        key: &PrivateKey,
        digest: &FieldElement,
        rng: &mut R,
    ) -> Result<Signature> {
        self.sign_with_nonce(key, digest, &mut RandomNonce::new(rng))
    }

    /// Sign a digest with nonces from an explicit source
    ///
    /// Algorithm:
    /// 1. Draw k; redraw if zero; k = k mod n
    /// 2. (x₁, y₁) = k·P
    /// 3. r = x₁ mod n; if r = 0, go back to step 1
    /// 4. s = k⁻¹(e + d·r) mod n; if s = 0, go back to step 1
    /// 5. Return (r, s)
    ///
    /// Every trip back to step 1 counts against `max_sign_attempts`.
    pub fn sign_with_nonce<N: NonceSource + ?Sized>(
        &self,
        key: &PrivateKey,
        digest: &FieldElement,
        nonces: &mut N,
    ) -> Result<Signature> {
        let d = key.scalar();
        if d.is_zero() || d >= self.curve.order() {
            return Err(Error::InvalidParameter(
                "private scalar must lie in [1, n-1]".into(),
            ));
        }
        let e = digest.resized(self.curve.words())?;

        for _ in 0..self.config.max_sign_attempts {
            // Step 1: select k in [1, n-1]
            let k = nonces.next_nonce(self.curve.words())?;
            if k.is_zero() {
                continue;
            }
            let k = self.ops.reduce(&k)?;
            if k.is_zero() {
                continue;
            }

            // Step 2: kP
            let point = self.curve.mul_generator(&k)?;
            let x1 = match point.x() {
                Some(x1) => x1,
                None => continue,
            };

            // Step 3: r = x₁ mod n
            let r = self.ops.reduce(x1)?;
            if r.is_zero() {
                continue;
            }

            // Step 4: s = k⁻¹(e + d·r) mod n
            if let Some(s) = self.ops.signature_s(d, &e, &r, &k)? {
                return Ok(Signature { r, s });
            }
        }

        Err(Error::SignatureGeneration {
            attempts: self.config.max_sign_attempts,
        })
    }

    /// Verify a signature, reporting why it was rejected
    ///
    /// Algorithm:
    /// 1. Verify that r and s are integers in [1, n-1]
    /// 2. w = s⁻¹ mod n
    /// 3. u₁ = e·w mod n and u₂ = r·w mod n
    /// 4. X = u₁·P + u₂·Q; reject if X = ∞
    /// 5. v = x(X) mod n
    /// 6. Accept if and only if v = r
    ///
    /// The public key is not validated here; run
    /// [`check_public_key`](Self::check_public_key) on untrusted keys.
    pub fn verify_strict(
        &self,
        public: &Point,
        digest: &FieldElement,
        signature: &Signature,
    ) -> Result<()> {
        let n = self.curve.order();
        let Signature { r, s } = signature;

        // Step 1
        if r.is_zero() || s.is_zero() {
            return Err(Error::Verification("r or s is zero"));
        }
        if r >= n || s >= n {
            return Err(Error::Verification("r or s is not below the group order"));
        }
        let e = digest
            .resized(self.curve.words())
            .map_err(|_| Error::Verification("digest is wider than a field element"))?;

        // Steps 2 and 3
        let (u1, u2) = self
            .ops
            .verification_scalars(&e, r, s)?
            .ok_or(Error::Verification("s has no inverse"))?;

        // Step 4
        let x = self
            .curve
            .mul_generator(&u1)?
            .add(&public.mul(&u2, self.curve)?, self.curve)?;
        let x1 = x
            .x()
            .ok_or(Error::Verification("u1*P + u2*Q is the point at infinity"))?;

        // Steps 5 and 6
        let v = self.ops.reduce(x1)?;
        if bool::from(v.ct_eq(r)) {
            Ok(())
        } else {
            Err(Error::Verification("v does not match r"))
        }
    }

    /// True when the signature verifies; every rejection maps to false
    pub fn verify(&self, public: &Point, digest: &FieldElement, signature: &Signature) -> bool {
        self.verify_strict(public, digest, signature).is_ok()
    }
}
