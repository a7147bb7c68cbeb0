//! BN254 group operations
//!
//! G1 arithmetic goes through the `solana-bn254` alt_bn128 functions, which
//! take and return the same big-endian wire format as [`crate::codec`].
//! G2 arithmetic is done with arkworks directly.
//!
//! Every input here is an already validated point, and every G1 result is
//! decoded again before it is handed back.

use crate::codec::{decode_g1, g1_to_bytes};
use crate::errors::Bn254Error;
use crate::types::{G1Point, G2Point, Scalar, G1_SIZE};
use ark_bn254::Fr;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use solana_bn254::prelude::{alt_bn128_g1_addition_be, alt_bn128_g1_multiplication_be};

fn g1_from_output(result: &[u8]) -> Result<G1Point, Bn254Error> {
    decode_g1(result).map_err(|_| Bn254Error::InvalidG1)
}

/// Performs G1 addition using alt_bn128_g1_addition_be.
pub fn g1_add(a: &G1Point, b: &G1Point) -> Result<G1Point, Bn254Error> {
    let mut input = [0u8; 2 * G1_SIZE];
    input[..G1_SIZE].copy_from_slice(&g1_to_bytes(a));
    input[G1_SIZE..].copy_from_slice(&g1_to_bytes(b));

    let result = alt_bn128_g1_addition_be(&input)
        .map_err(|e| Bn254Error::SyscallError(format!("G1 addition failed: {:?}", e)))?;

    g1_from_output(&result)
}

/// Performs G1 scalar multiplication using alt_bn128_g1_multiplication_be.
///
/// The scalar is a 32-byte big-endian word, normally already reduced mod r.
pub fn g1_mul(point: &G1Point, scalar: &Scalar) -> Result<G1Point, Bn254Error> {
    let mut input = [0u8; G1_SIZE + 32];
    input[..G1_SIZE].copy_from_slice(&g1_to_bytes(point));
    input[G1_SIZE..].copy_from_slice(scalar);

    let result = alt_bn128_g1_multiplication_be(&input)
        .map_err(|e| Bn254Error::SyscallError(format!("G1 multiplication failed: {:?}", e)))?;

    g1_from_output(&result)
}

/// G2 addition
pub fn g2_add(a: &G2Point, b: &G2Point) -> G2Point {
    G2Point((a.0 + b.0).into_affine())
}

/// G2 scalar multiplication; the scalar is read mod r
pub fn g2_mul(point: &G2Point, scalar: &Scalar) -> G2Point {
    let k = Fr::from_be_bytes_mod_order(scalar);
    G2Point(point.0.mul_bigint(k.into_bigint()).into_affine())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::fr_to_be_bytes;
    use ark_bn254::{G1Affine, G2Affine};

    fn scalar(k: u64) -> Scalar {
        fr_to_be_bytes(&Fr::from(k))
    }

    fn ark_g1(k: u64) -> G1Point {
        G1Point((G1Affine::generator() * Fr::from(k)).into_affine())
    }

    fn ark_g2(k: u64) -> G2Point {
        G2Point((G2Affine::generator() * Fr::from(k)).into_affine())
    }

    #[test]
    fn test_g1_add_matches_arkworks() {
        let sum = g1_add(&ark_g1(2), &ark_g1(5)).unwrap();
        assert_eq!(sum, ark_g1(7));
    }

    #[test]
    fn test_g1_mul_matches_arkworks() {
        let p = g1_mul(&G1Point::generator(), &scalar(0x1234_5678)).unwrap();
        assert_eq!(p, ark_g1(0x1234_5678));
    }

    #[test]
    fn test_g1_identity_cases() {
        let p = ark_g1(9);
        assert_eq!(g1_add(&p, &G1Point::identity()).unwrap(), p);
        assert!(g1_mul(&p, &[0u8; 32]).unwrap().is_identity());
        assert!(g1_mul(&G1Point::identity(), &scalar(3))
            .unwrap()
            .is_identity());
    }

    #[test]
    fn test_g1_add_inverse_is_identity() {
        let p = ark_g1(11);
        let neg = G1Point(-p.0);
        assert!(g1_add(&p, &neg).unwrap().is_identity());
    }

    #[test]
    fn test_g2_ops() {
        assert_eq!(g2_add(&ark_g2(3), &ark_g2(4)), ark_g2(7));
        assert_eq!(g2_mul(&G2Point::generator(), &scalar(21)), ark_g2(21));
        assert!(g2_mul(&ark_g2(5), &[0u8; 32]).is_identity());
        assert_eq!(g2_add(&ark_g2(5), &G2Point::identity()), ark_g2(5));
    }
}
