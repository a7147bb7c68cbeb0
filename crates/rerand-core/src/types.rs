//! Core types for Groth16 proof re-randomization
//!
//! Byte aliases match the alt_bn128 (EIP-197) big-endian wire format used by
//! `solana-bn254`. Validated points wrap the arkworks affine representation.

use ark_bn254::{G1Affine, G2Affine};
use ark_ec::AffineRepr;
use hex_literal::hex;
use num_bigint::BigUint;

/// A 32-byte scalar field element (Fr for BN254).
/// Stored in big-endian format.
pub type Scalar = [u8; 32];

/// A 64-byte G1 point (uncompressed, big-endian x || y).
pub type G1 = [u8; 64];

/// A 128-byte G2 point (uncompressed, big-endian x.im || x.re || y.im || y.re).
pub type G2 = [u8; 128];

/// Width of one base field element on the wire
pub const FIELD_SIZE: usize = 32;

/// Width of an encoded G1 point
pub const G1_SIZE: usize = 2 * FIELD_SIZE;

/// Width of an encoded G2 point
pub const G2_SIZE: usize = 4 * FIELD_SIZE;

/// G1 identity point (point at infinity)
/// For BN254, the identity is represented as (0, 0)
pub const G1_IDENTITY: G1 = [0u8; G1_SIZE];

/// G2 identity point, all four coordinates zero
pub const G2_IDENTITY: G2 = [0u8; G2_SIZE];

/// BN254 G1 generator point
/// x = 1, y = 2
pub const G1_GENERATOR: G1 = {
    let mut g = [0u8; 64];
    g[31] = 1; // x = 1
    g[63] = 2; // y = 2
    g
};

/// BN254 scalar field modulus (r)
/// r = 21888242871839275222246405745257275088548364400416034343698204186575808495617
pub const FR_MODULUS: Scalar =
    hex!("30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001");

/// BN254 base field modulus (q)
/// q = 21888242871839275222246405745257275088696311157297823662689037894645226208583
pub const FQ_MODULUS: Scalar =
    hex!("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47");

/// A G1 element that has passed curve and canonical-coordinate checks.
///
/// BN254 G1 has cofactor 1, so every point on the curve is in the order-r
/// subgroup. Only [`crate::codec::decode_g1`] and the group operations
/// construct these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G1Point(pub(crate) G1Affine);

impl G1Point {
    /// The point at infinity
    pub fn identity() -> Self {
        Self(G1Affine::zero())
    }

    /// The standard generator (1, 2)
    pub fn generator() -> Self {
        Self(G1Affine::generator())
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    /// Borrow the arkworks representation
    pub fn as_affine(&self) -> &G1Affine {
        &self.0
    }
}

/// A G2 element on the twist and in the order-r subgroup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G2Point(pub(crate) G2Affine);

impl G2Point {
    /// The point at infinity
    pub fn identity() -> Self {
        Self(G2Affine::zero())
    }

    /// The standard generator
    pub fn generator() -> Self {
        Self(G2Affine::generator())
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    /// Borrow the arkworks representation
    pub fn as_affine(&self) -> &G2Affine {
        &self.0
    }
}

/// Textual G1 point: `[x, y]`
pub type G1Text = [String; 2];

/// Textual G2 point: `[[x.im, x.re], [y.im, y.re]]`
pub type G2Text = [[String; 2]; 2];

/// Proof components as they arrive from the outside world.
///
/// Coordinates accept any radix prefix understood by
/// [`crate::integer::parse_integer`]. An absent or empty `eta` asks for a
/// freshly sampled blinding scalar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProofInput {
    pub delta: G2Text,
    pub a: G1Text,
    pub b: G2Text,
    pub c: G1Text,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub eta: Option<String>,
}

/// Randomized proof components in canonical hex form
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProofOutput {
    pub b: G2Text,
    pub c: G1Text,
    pub eta: String,
}

/// Result of [`crate::randomizer::ProofRandomizer::randomize`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Randomized {
    /// B' = Delta + eta * B
    pub b: G2Point,
    /// C' = C + eta * A
    pub c: G1Point,
    /// The blinding scalar that was applied, as supplied or sampled
    pub eta: BigUint,
}
