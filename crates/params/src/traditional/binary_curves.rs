//! Binary elliptic curves y² + xy = x³ + ax² + b over GF(2^m)
//!
//! Every multi-byte value is written big-endian, the way SEC 2 prints it.
//! Field elements occupy `words` bytes and the group order occupies
//! `words + 1` bytes.

/// Parameter record for a binary curve in polynomial basis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryCurveParams {
    /// Human readable curve name
    pub name: &'static str,
    /// Extension degree m of GF(2^m)
    pub m: usize,
    /// Number of 8-bit words in a field element
    pub words: usize,
    /// Reduction polynomial q, degree m
    pub reduction_poly: &'static [u8],
    /// Exponents of q below x^m, highest first, when q is a trinomial or
    /// pentanomial suited to sparse reduction
    pub sparse_terms: Option<&'static [usize]>,
    /// Curve coefficient a
    pub a: &'static [u8],
    /// Curve coefficient b
    pub b: &'static [u8],
    /// Base point x-coordinate
    pub gx: &'static [u8],
    /// Base point y-coordinate
    pub gy: &'static [u8],
    /// Order n of the base point
    pub order: &'static [u8],
    /// Cofactor h = #E / n
    pub cofactor: u32,
}

/// Size of a sect163k1 field element in bytes
pub const SECT163K1_FIELD_ELEMENT_SIZE: usize = 21;

/// Size of a sect163k1 scalar (group order width) in bytes
pub const SECT163K1_SCALAR_SIZE: usize = SECT163K1_FIELD_ELEMENT_SIZE + 1;

/// SEC 2 sect163k1 (NIST K-163)
///
/// - Field polynomial: x^163 + x^7 + x^6 + x^3 + 1
/// - a = b = 1
/// - n = 0x04000000000000000000020108A2E0CC0D99F8A5EF, h = 2
pub const SECT163K1: BinaryCurveParams = BinaryCurveParams {
    name: "sect163k1",
    m: 163,
    words: SECT163K1_FIELD_ELEMENT_SIZE,
    reduction_poly: &[
        0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC9,
    ],
    sparse_terms: Some(&[7, 6, 3, 0]),
    a: &[0x01],
    b: &[0x01],
    gx: &[
        0x02, 0xFE, 0x13, 0xC0, 0x53, 0x7B, 0xBC, 0x11, 0xAC, 0xAA, 0x07,
        0xD7, 0x93, 0xDE, 0x4E, 0x6D, 0x5E, 0x5C, 0x94, 0xEE, 0xE8,
    ],
    gy: &[
        0x02, 0x89, 0x07, 0x0F, 0xB0, 0x5D, 0x38, 0xFF, 0x58, 0x32, 0x1F,
        0x2E, 0x80, 0x05, 0x36, 0xD5, 0x38, 0xCC, 0xDA, 0xA3, 0xD9,
    ],
    order: &[
        0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x02, 0x01, 0x08, 0xA2, 0xE0, 0xCC, 0x0D, 0x99, 0xF8, 0xA5, 0xEF,
    ],
    cofactor: 2,
};

/// Toy curve over GF(2^9) for exhaustive testing
///
/// - Field polynomial: x^9 + x + 1
/// - a = b = 1
/// - The group has 518 = 2 · 7 · 37 points including infinity and is
///   cyclic, generated by (0xEE, 0xAF).
/// - The base point P = 14 · (0xEE, 0xAF) = (0x71, 0x166) generates the
///   subgroup of prime order n = 37, so h = 14.
///
/// n is tiny. Do not use this curve for anything but tests.
pub const TESTCURVE_GF2_9: BinaryCurveParams = BinaryCurveParams {
    name: "testcurve-gf2^9",
    m: 9,
    words: 2,
    reduction_poly: &[0x02, 0x03],
    sparse_terms: None,
    a: &[0x00, 0x01],
    b: &[0x00, 0x01],
    gx: &[0x00, 0x71],
    gy: &[0x01, 0x66],
    order: &[0x00, 0x00, 0x25],
    cofactor: 14,
};
