//! Groth16 proof re-randomization over BN254
//!
//! Takes a proof (A, B, C) and the verification key's Delta and produces
//! `B' = Delta + eta * B`, `C' = C + eta * A` for a blinding scalar eta.
//!
//! # Example
//!
//! ```ignore
//! use groth16_rerand_core::{OsScalarSource, ProofInput, ProofRandomizer};
//!
//! let input: ProofInput = load_input()?;
//! let output = ProofRandomizer::new(OsScalarSource).randomize_text(&input)?;
//! println!("eta = {}", output.eta);
//! ```

pub mod codec;
pub mod errors;
pub mod field;
pub mod integer;
pub mod ops;
pub mod random;
pub mod randomizer;
pub mod types;

pub use errors::{Bn254Error, EntropyError, InvalidPointError, ParseError, RandomizeError};
pub use integer::parse_integer;
pub use random::{random_g1, FixedScalarSource, OsScalarSource, ScalarSource};
pub use randomizer::ProofRandomizer;
pub use types::*;
