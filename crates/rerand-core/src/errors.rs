//! Error types for proof re-randomization

use thiserror::Error;

/// Top-level re-randomization error
#[derive(Debug, Error)]
pub enum RandomizeError {
    #[error("Parse error in {field}: {source}")]
    Parse {
        field: &'static str,
        #[source]
        source: ParseError,
    },

    #[error("Invalid point {field}: {source}")]
    InvalidPoint {
        field: &'static str,
        #[source]
        source: InvalidPointError,
    },

    #[error("Entropy error: {0}")]
    Entropy(#[from] EntropyError),

    #[error("BN254 error: {0}")]
    Bn254(#[from] Bn254Error),
}

/// Integer token errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("failed to parse {token:?}: no digits after prefix")]
    Empty { token: String },

    #[error("failed to parse {token:?}: invalid base-{radix} digits")]
    InvalidDigit { token: String, radix: u32 },
}

/// Point encoding/decoding errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidPointError {
    #[error("Invalid point size: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Coordinate {coordinate} does not fit in 32 bytes ({len} bytes)")]
    CoordinateTooLarge { coordinate: &'static str, len: usize },

    #[error("Coordinate {coordinate} is not below the field modulus")]
    NonCanonical { coordinate: &'static str },

    #[error("Point not on curve")]
    NotOnCurve,

    #[error("Point not in the order-r subgroup")]
    NotInSubgroup,
}

/// Entropy source errors
#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("Secure random source unavailable: {0}")]
    Unavailable(String),

    #[error("Scalar source exhausted")]
    Exhausted,
}

/// BN254 operation errors
#[derive(Debug, Error)]
pub enum Bn254Error {
    #[error("Syscall error: {0}")]
    SyscallError(String),

    #[error("Invalid G1 point")]
    InvalidG1,

    #[error("Invalid G2 point")]
    InvalidG2,
}
