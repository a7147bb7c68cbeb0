//! Groth16 proof re-randomization
//!
//! Given Delta, A, B, C and a blinding scalar eta:
//!
//! ```text
//! B' = Delta + eta * B     (G2)
//! C' = C + eta * A         (G1)
//! ```
//!
//! A and Delta are inputs only. The applied eta is returned with the result.
//!
//! ## Scalar range
//!
//! A caller-supplied eta is not range-checked. The group operations see
//! eta mod r, which names the same point in an order-r group, and the
//! returned eta is the caller's value unchanged.

use crate::codec::{decode_g1, decode_g2, encode_g1, encode_g2, hex_g1, hex_g2, render_scalar};
use crate::errors::RandomizeError;
use crate::field::scalar_to_bytes;
use crate::integer::parse_integer;
use crate::ops::{g1_add, g1_mul, g2_add, g2_mul};
use crate::random::{OsScalarSource, ScalarSource};
use crate::types::{G1Point, G1Text, G2Point, G2Text, ProofInput, ProofOutput, Randomized};
use num_bigint::BigUint;

/// Labels for a G1 input: point name, then x, y
type G1Labels = [&'static str; 3];

/// Labels for a G2 input: point name, then x.im, x.re, y.im, y.re
type G2Labels = [&'static str; 5];

const DELTA_LABELS: G2Labels = ["delta", "delta.x.im", "delta.x.re", "delta.y.im", "delta.y.re"];
const B_LABELS: G2Labels = ["b", "b.x.im", "b.x.re", "b.y.im", "b.y.re"];
const A_LABELS: G1Labels = ["a", "a.x", "a.y"];
const C_LABELS: G1Labels = ["c", "c.x", "c.y"];

fn parse_field(token: &str, field: &'static str) -> Result<BigUint, RandomizeError> {
    parse_integer(token).map_err(|source| RandomizeError::Parse { field, source })
}

fn parse_g1_point(text: &G1Text, labels: &G1Labels) -> Result<G1Point, RandomizeError> {
    let invalid = |source| RandomizeError::InvalidPoint {
        field: labels[0],
        source,
    };

    let x = parse_field(&text[0], labels[1])?;
    let y = parse_field(&text[1], labels[2])?;
    let bytes = encode_g1(&x, &y).map_err(invalid)?;
    decode_g1(&bytes).map_err(invalid)
}

fn parse_g2_point(text: &G2Text, labels: &G2Labels) -> Result<G2Point, RandomizeError> {
    let invalid = |source| RandomizeError::InvalidPoint {
        field: labels[0],
        source,
    };

    let x_im = parse_field(&text[0][0], labels[1])?;
    let x_re = parse_field(&text[0][1], labels[2])?;
    let y_im = parse_field(&text[1][0], labels[3])?;
    let y_re = parse_field(&text[1][1], labels[4])?;
    let bytes = encode_g2(&x_im, &x_re, &y_im, &y_re).map_err(invalid)?;
    decode_g2(&bytes).map_err(invalid)
}

/// Applies the blinding transform, drawing eta from `S` when none is given.
#[derive(Debug)]
pub struct ProofRandomizer<S = OsScalarSource> {
    source: S,
}

impl Default for ProofRandomizer<OsScalarSource> {
    fn default() -> Self {
        Self::new(OsScalarSource)
    }
}

impl<S: ScalarSource> ProofRandomizer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Give back the scalar source
    pub fn into_source(self) -> S {
        self.source
    }

    /// Re-randomize validated proof points.
    pub fn randomize(
        &mut self,
        delta: &G2Point,
        a: &G1Point,
        b: &G2Point,
        c: &G1Point,
        eta: Option<BigUint>,
    ) -> Result<Randomized, RandomizeError> {
        let eta = match eta {
            Some(eta) => {
                log::debug!("using caller-supplied eta");
                eta
            }
            None => {
                let eta = self.source.next_scalar()?;
                log::debug!("sampled fresh eta");
                log::trace!("eta = {}", render_scalar(&eta));
                eta
            }
        };

        let k = scalar_to_bytes(&eta);
        let b_prime = g2_add(delta, &g2_mul(b, &k));
        let c_prime = g1_add(c, &g1_mul(a, &k)?)?;

        Ok(Randomized {
            b: b_prime,
            c: c_prime,
            eta,
        })
    }

    /// Re-randomize a textual proof record.
    ///
    /// Every coordinate and eta is parsed and validated before any group
    /// operation runs. An empty or absent `eta` is sampled.
    pub fn randomize_text(&mut self, input: &ProofInput) -> Result<ProofOutput, RandomizeError> {
        let delta = parse_g2_point(&input.delta, &DELTA_LABELS)?;
        let a = parse_g1_point(&input.a, &A_LABELS)?;
        let b = parse_g2_point(&input.b, &B_LABELS)?;
        let c = parse_g1_point(&input.c, &C_LABELS)?;

        let eta = match input.eta.as_deref() {
            None | Some("") => None,
            Some(token) => Some(parse_field(token, "eta")?),
        };

        let out = self.randomize(&delta, &a, &b, &c, eta)?;
        Ok(ProofOutput {
            b: hex_g2(&out.b),
            c: hex_g1(&out.c),
            eta: render_scalar(&out.eta),
        })
    }
}
