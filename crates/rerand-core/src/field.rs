//! Field element conversions for BN254
//!
//! Bridges 32-byte big-endian words and arkworks field elements through
//! 4 x 64-bit limbs (little-endian limb order, as arkworks stores them).

use crate::types::Scalar;
use ark_bn254::{Fq, Fr};
use ark_ff::{BigInt, PrimeField};
use num_bigint::BigUint;

/// Convert 32-byte big-endian word to 4 x u64 limbs (little-endian limbs)
#[inline]
pub fn bytes_to_limbs(bytes: &[u8; 32]) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    for (i, chunk) in bytes.rchunks_exact(8).enumerate() {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        limbs[i] = u64::from_be_bytes(word);
    }
    limbs
}

/// Convert 4 x u64 limbs (little-endian) to 32-byte big-endian word
#[inline]
pub fn limbs_to_bytes(limbs: &[u64; 4]) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[24..32].copy_from_slice(&limbs[0].to_be_bytes());
    bytes[16..24].copy_from_slice(&limbs[1].to_be_bytes());
    bytes[8..16].copy_from_slice(&limbs[2].to_be_bytes());
    bytes[0..8].copy_from_slice(&limbs[3].to_be_bytes());
    bytes
}

/// Read a base field element, rejecting values >= q
pub fn fq_from_be_bytes(bytes: &[u8; 32]) -> Option<Fq> {
    Fq::from_bigint(BigInt::new(bytes_to_limbs(bytes)))
}

/// Canonical big-endian form of a base field element
pub fn fq_to_be_bytes(x: &Fq) -> [u8; 32] {
    limbs_to_bytes(&x.into_bigint().0)
}

/// Canonical big-endian form of a scalar field element
pub fn fr_to_be_bytes(x: &Fr) -> Scalar {
    limbs_to_bytes(&x.into_bigint().0)
}

/// Reduce an arbitrary non-negative integer mod r
pub fn reduce_scalar(value: &BigUint) -> Fr {
    Fr::from_be_bytes_mod_order(&value.to_bytes_be())
}

/// Reduce mod r and lay out as the 32-byte scalar operand of G1 multiplication
pub fn scalar_to_bytes(value: &BigUint) -> Scalar {
    fr_to_be_bytes(&reduce_scalar(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FQ_MODULUS, FR_MODULUS};
    use hex_literal::hex;

    #[test]
    fn test_limbs_roundtrip() {
        let bytes = hex!("0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20");
        let limbs = bytes_to_limbs(&bytes);
        assert_eq!(limbs[0], 0x191a1b1c1d1e1f20);
        assert_eq!(limbs[3], 0x0102030405060708);
        assert_eq!(limbs_to_bytes(&limbs), bytes);
    }

    #[test]
    fn test_fq_rejects_modulus() {
        assert!(fq_from_be_bytes(&FQ_MODULUS).is_none());
        assert!(fq_from_be_bytes(&[0xff; 32]).is_none());

        let mut q_minus_one = FQ_MODULUS;
        q_minus_one[31] -= 1;
        let x = fq_from_be_bytes(&q_minus_one).unwrap();
        assert_eq!(x, -Fq::from(1u64));
        assert_eq!(fq_to_be_bytes(&x), q_minus_one);
    }

    #[test]
    fn test_fq_small_value() {
        let mut bytes = [0u8; 32];
        bytes[31] = 2;
        assert_eq!(fq_from_be_bytes(&bytes), Some(Fq::from(2u64)));
    }

    #[test]
    fn test_reduce_scalar_wraps_at_r() {
        let r = BigUint::from_bytes_be(&FR_MODULUS);
        assert_eq!(reduce_scalar(&(r.clone() + 5u32)), Fr::from(5u64));
        assert_eq!(reduce_scalar(&r), Fr::from(0u64));

        let wide = (r << 300) + 7u32;
        assert_eq!(reduce_scalar(&wide), Fr::from(7u64));
    }

    #[test]
    fn test_scalar_to_bytes_layout() {
        let mut expected = [0u8; 32];
        expected[30] = 0x01;
        expected[31] = 0x02;
        assert_eq!(scalar_to_bytes(&BigUint::from(0x0102u32)), expected);
    }
}
