//! Shared fixtures for the bincurve integration tests

use bincurve_algorithms::{Curve, FieldElement};
use bincurve_params::{BinaryCurveParams, SECT163K1, TESTCURVE_GF2_9};
use bincurve_sign::{Ecdsa, Error, KeyPair};
use rand::{CryptoRng, RngCore};

/// Every parameter record shipped with the library
pub const ALL_CURVES: [&BinaryCurveParams; 2] = [&TESTCURVE_GF2_9, &SECT163K1];

/// Build a curve from a shipped record; the records are known-good
pub fn curve(params: &BinaryCurveParams) -> Curve {
    match Curve::from_params(params) {
        Ok(curve) => curve,
        Err(err) => panic!("{} rejected: {}", params.name, err),
    }
}

/// Draw a key pair, retrying when the scalar reduces to zero
pub fn keypair<R: RngCore + CryptoRng>(ecdsa: &Ecdsa<'_>, rng: &mut R) -> KeyPair {
    loop {
        match ecdsa.keygen(rng) {
            Ok(keys) => return keys,
            Err(Error::DegenerateScalar) => continue,
            Err(err) => panic!("keygen failed: {}", err),
        }
    }
}

/// Field element from little-endian words, reduced into `curve`'s field
pub fn element(curve: &Curve, words: &[u8]) -> FieldElement {
    let mut words = words.to_vec();
    words.resize(curve.words(), 0);
    curve.field().reduce(&FieldElement::from_words(words))
}

/// Decode a big-endian hex digest to field width
pub fn digest(curve: &Curve, hex_digest: &str) -> FieldElement {
    let bytes = match hex::decode(hex_digest) {
        Ok(bytes) => bytes,
        Err(err) => panic!("bad digest fixture: {}", err),
    };
    match FieldElement::from_be_bytes(&bytes, curve.words()) {
        Ok(e) => e,
        Err(err) => panic!("digest wider than the field: {}", err),
    }
}
