//! Blinding scalar sources
//!
//! The randomizer never reaches for process-wide randomness; it is handed a
//! [`ScalarSource`]. [`OsScalarSource`] is the production source,
//! [`FixedScalarSource`] replays a known sequence for tests.

use crate::errors::{EntropyError, RandomizeError};
use crate::field::scalar_to_bytes;
use crate::ops::g1_mul;
use crate::types::{G1Point, FR_MODULUS};
use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand::RngCore;
use std::collections::VecDeque;

/// Upper bound on rejection-sampling rounds. Each round is accepted with
/// probability r / 2^254 (about 0.76).
const MAX_SAMPLING_ROUNDS: usize = 128;

/// Produces blinding scalars in [0, r)
pub trait ScalarSource {
    fn next_scalar(&mut self) -> Result<BigUint, EntropyError>;
}

impl<S: ScalarSource + ?Sized> ScalarSource for &mut S {
    fn next_scalar(&mut self) -> Result<BigUint, EntropyError> {
        (**self).next_scalar()
    }
}

/// Uniform scalars from the operating system CSPRNG.
///
/// Every call reads fresh bytes; nothing is cached between calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsScalarSource;

impl ScalarSource for OsScalarSource {
    fn next_scalar(&mut self) -> Result<BigUint, EntropyError> {
        let r = BigUint::from_bytes_be(&FR_MODULUS);
        let mut buf = [0u8; 32];

        for _ in 0..MAX_SAMPLING_ROUNDS {
            OsRng
                .try_fill_bytes(&mut buf)
                .map_err(|e| EntropyError::Unavailable(e.to_string()))?;
            // r < 2^254
            buf[0] &= 0x3f;

            let candidate = BigUint::from_bytes_be(&buf);
            if candidate < r {
                return Ok(candidate);
            }
        }

        Err(EntropyError::Exhausted)
    }
}

/// Replays a fixed sequence of scalars, then reports exhaustion.
#[derive(Clone, Debug, Default)]
pub struct FixedScalarSource {
    scalars: VecDeque<BigUint>,
}

impl FixedScalarSource {
    pub fn new(scalars: impl IntoIterator<Item = BigUint>) -> Self {
        Self {
            scalars: scalars.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.scalars.len()
    }
}

impl ScalarSource for FixedScalarSource {
    fn next_scalar(&mut self) -> Result<BigUint, EntropyError> {
        self.scalars.pop_front().ok_or(EntropyError::Exhausted)
    }
}

/// Sample a scalar k together with k * G1 generator.
pub fn random_g1<S: ScalarSource>(source: &mut S) -> Result<(BigUint, G1Point), RandomizeError> {
    let k = source.next_scalar()?;
    let point = g1_mul(&G1Point::generator(), &scalar_to_bytes(&k))?;
    Ok((k, point))
}
