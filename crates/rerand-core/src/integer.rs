//! Radix-prefixed integer tokens
//!
//! Prefix rules:
//! - `0x` / `0X` → base 16
//! - `0` followed by more characters → base 8
//! - `b` / `B` → base 2
//! - anything else → base 10
//!
//! The prefix is stripped before the digits are read. The bare token `"0"` is
//! decimal zero, not an octal prefix with nothing behind it.

use crate::errors::ParseError;
use num_bigint::BigUint;

/// Split a token into its radix and the digits that follow the prefix.
pub fn radix_of(token: &str) -> (u32, &str) {
    if let Some(rest) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        (16, rest)
    } else if token.len() > 1 && token.starts_with('0') {
        (8, &token[1..])
    } else if let Some(rest) = token.strip_prefix('b').or_else(|| token.strip_prefix('B')) {
        (2, rest)
    } else {
        (10, token)
    }
}

/// Parse an unsigned arbitrary-precision integer from a radix-prefixed token.
///
/// Signs, separators and whitespace are not digits of any radix and are
/// rejected with [`ParseError::InvalidDigit`].
pub fn parse_integer(token: &str) -> Result<BigUint, ParseError> {
    let (radix, digits) = radix_of(token);
    if digits.is_empty() {
        return Err(ParseError::Empty {
            token: token.to_string(),
        });
    }

    let invalid = || ParseError::InvalidDigit {
        token: token.to_string(),
        radix,
    };

    // num-bigint tolerates `_` separators, the token grammar does not
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }

    BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(invalid)
}
