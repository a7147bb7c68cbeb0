//! BN254 point codec
//!
//! ## Wire format (alt_bn128 / EIP-197, big-endian):
//!
//! - G1: x (32) || y (32) = 64 bytes
//! - G2: x.im (32) || x.re (32) || y.im (32) || y.re (32) = 128 bytes
//!
//! The all-zero buffer of either width is the point at infinity.
//!
//! The G2 field order is shared with the verifier side and must not change.

use crate::errors::InvalidPointError;
use crate::field::{fq_from_be_bytes, fq_to_be_bytes};
use crate::types::{
    G1Point, G1Text, G2Point, G2Text, FIELD_SIZE, G1, G1_IDENTITY, G1_SIZE, G2, G2_IDENTITY,
    G2_SIZE,
};
use ark_bn254::{Fq, Fq2, G1Affine, G2Affine};
use num_bigint::BigUint;

/// Coordinate names in G2 wire order
const G2_COORDINATES: [&str; 4] = ["x.im", "x.re", "y.im", "y.re"];

/// Left-zero-pad an integer into one 32-byte big-endian field slot.
pub fn field_to_bytes(
    value: &BigUint,
    coordinate: &'static str,
) -> Result<[u8; FIELD_SIZE], InvalidPointError> {
    let be = value.to_bytes_be();
    if be.len() > FIELD_SIZE {
        return Err(InvalidPointError::CoordinateTooLarge {
            coordinate,
            len: be.len(),
        });
    }
    let mut out = [0u8; FIELD_SIZE];
    out[FIELD_SIZE - be.len()..].copy_from_slice(&be);
    Ok(out)
}

/// Serialize (x, y) into the 64-byte G1 wire format.
///
/// Only widths are checked here. Validity is decided by [`decode_g1`].
pub fn encode_g1(x: &BigUint, y: &BigUint) -> Result<G1, InvalidPointError> {
    let mut out = [0u8; G1_SIZE];
    out[..FIELD_SIZE].copy_from_slice(&field_to_bytes(x, "x")?);
    out[FIELD_SIZE..].copy_from_slice(&field_to_bytes(y, "y")?);
    Ok(out)
}

/// Serialize a G2 point into the 128-byte wire format [x.im, x.re, y.im, y.re].
pub fn encode_g2(
    x_im: &BigUint,
    x_re: &BigUint,
    y_im: &BigUint,
    y_re: &BigUint,
) -> Result<G2, InvalidPointError> {
    let mut out = [0u8; G2_SIZE];
    for (i, (value, coordinate)) in [x_im, x_re, y_im, y_re]
        .into_iter()
        .zip(G2_COORDINATES)
        .enumerate()
    {
        out[i * FIELD_SIZE..(i + 1) * FIELD_SIZE]
            .copy_from_slice(&field_to_bytes(value, coordinate)?);
    }
    Ok(out)
}

fn read_fq(chunk: &[u8], coordinate: &'static str) -> Result<Fq, InvalidPointError> {
    let mut word = [0u8; FIELD_SIZE];
    word.copy_from_slice(chunk);
    fq_from_be_bytes(&word).ok_or(InvalidPointError::NonCanonical { coordinate })
}

/// Parse and validate a 64-byte G1 encoding.
pub fn decode_g1(bytes: &[u8]) -> Result<G1Point, InvalidPointError> {
    let bytes: &G1 = bytes
        .try_into()
        .map_err(|_| InvalidPointError::InvalidLength {
            expected: G1_SIZE,
            actual: bytes.len(),
        })?;

    if *bytes == G1_IDENTITY {
        return Ok(G1Point::identity());
    }

    let x = read_fq(&bytes[..FIELD_SIZE], "x")?;
    let y = read_fq(&bytes[FIELD_SIZE..], "y")?;

    let p = G1Affine::new_unchecked(x, y);
    if !p.is_on_curve() {
        return Err(InvalidPointError::NotOnCurve);
    }
    if !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err(InvalidPointError::NotInSubgroup);
    }
    Ok(G1Point(p))
}

/// Parse and validate a 128-byte G2 encoding.
pub fn decode_g2(bytes: &[u8]) -> Result<G2Point, InvalidPointError> {
    let bytes: &G2 = bytes
        .try_into()
        .map_err(|_| InvalidPointError::InvalidLength {
            expected: G2_SIZE,
            actual: bytes.len(),
        })?;

    if *bytes == G2_IDENTITY {
        return Ok(G2Point::identity());
    }

    let mut fields = [Fq::from(0u64); 4];
    for (i, coordinate) in G2_COORDINATES.into_iter().enumerate() {
        fields[i] = read_fq(&bytes[i * FIELD_SIZE..(i + 1) * FIELD_SIZE], coordinate)?;
    }
    let [x_im, x_re, y_im, y_re] = fields;

    // arkworks: c0 is the real part, c1 the imaginary part
    let p = G2Affine::new_unchecked(Fq2::new(x_re, x_im), Fq2::new(y_re, y_im));
    if !p.is_on_curve() {
        return Err(InvalidPointError::NotOnCurve);
    }
    if !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err(InvalidPointError::NotInSubgroup);
    }
    Ok(G2Point(p))
}

/// Canonical 64-byte encoding of a G1 element
pub fn g1_to_bytes(point: &G1Point) -> G1 {
    if point.is_identity() {
        return G1_IDENTITY;
    }
    let mut out = [0u8; G1_SIZE];
    out[..FIELD_SIZE].copy_from_slice(&fq_to_be_bytes(&point.0.x));
    out[FIELD_SIZE..].copy_from_slice(&fq_to_be_bytes(&point.0.y));
    out
}

/// Canonical 128-byte encoding of a G2 element
pub fn g2_to_bytes(point: &G2Point) -> G2 {
    if point.is_identity() {
        return G2_IDENTITY;
    }
    let p = &point.0;
    let mut out = [0u8; G2_SIZE];
    for (i, fq) in [&p.x.c1, &p.x.c0, &p.y.c1, &p.y.c0].into_iter().enumerate() {
        out[i * FIELD_SIZE..(i + 1) * FIELD_SIZE].copy_from_slice(&fq_to_be_bytes(fq));
    }
    out
}

/// Render a big-endian word as `0x` + lowercase hex without leading zeros.
/// Zero renders as `0x0`.
pub fn render_field(word: &[u8]) -> String {
    render_scalar(&BigUint::from_bytes_be(word))
}

/// Render an integer in the canonical output form
pub fn render_scalar(value: &BigUint) -> String {
    format!("0x{:x}", value)
}

/// Textual `[x, y]` form of a G1 element
pub fn hex_g1(point: &G1Point) -> G1Text {
    let b = g1_to_bytes(point);
    [
        render_field(&b[..FIELD_SIZE]),
        render_field(&b[FIELD_SIZE..]),
    ]
}

/// Textual `[[x.im, x.re], [y.im, y.re]]` form of a G2 element
pub fn hex_g2(point: &G2Point) -> G2Text {
    let b = g2_to_bytes(point);
    let field = |i: usize| render_field(&b[i * FIELD_SIZE..(i + 1) * FIELD_SIZE]);
    [[field(0), field(1)], [field(2), field(3)]]
}
