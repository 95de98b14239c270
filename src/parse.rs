//! Scanner for the decimal string grammar accepted by `BigInt`.
//!
//! The accepted pattern is `[+|-]digits[(e|E)digits]`: an optional sign,
//! one or more decimal digits, and an optional non-negative power-of-ten
//! exponent. No decimal point, no whitespace, no negative exponent. The
//! grammar is simple enough that a character-by-character scanner beats
//! pulling in a regex engine.

use crate::digit::to_digit;
use crate::error::{Error, ErrorCode, Result};

/// Structured result of scanning a decimal string.
#[derive(Debug)]
pub(crate) struct Parts<'a> {
    /// True if the string carried a leading `-`.
    pub negative: bool,

    /// The ASCII digit run, possibly with leading zeros.
    pub digits: &'a [u8],

    /// Power-of-ten multiplier, counted in decimal digits.
    pub exponent: u32,
}

/// Scan a decimal string into its sign, digit run and exponent.
///
/// Errors carry the byte index of the offending character.
pub(crate) fn parse_decimal(s: &str) -> Result<Parts<'_>> {
    let bytes = s.as_bytes();
    let mut index = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            index += 1;
            true
        }
        Some(b'+') => {
            index += 1;
            false
        }
        _ => false,
    };

    let digits_start = index;
    while index < bytes.len() && bytes[index].is_ascii_digit() {
        index += 1;
    }
    if index == digits_start {
        return Err(Error::syntax(ErrorCode::ExpectedDigit, index));
    }
    let digits = &bytes[digits_start..index];

    let mut exponent = 0u32;
    if index < bytes.len() && (bytes[index] == b'e' || bytes[index] == b'E') {
        index += 1;
        let exponent_start = index;
        while index < bytes.len() {
            let digit = match to_digit(bytes[index]) {
                Some(d) => d,
                None => break,
            };
            exponent = exponent
                .checked_mul(10)
                .and_then(|e| e.checked_add(digit))
                .ok_or_else(|| Error::syntax(ErrorCode::ExponentOutOfRange, index))?;
            index += 1;
        }
        if index == exponent_start {
            return Err(Error::syntax(ErrorCode::ExpectedDigit, index));
        }
    }

    if index != bytes.len() {
        return Err(Error::syntax(ErrorCode::TrailingCharacters, index));
    }

    Ok(Parts {
        negative,
        digits,
        exponent,
    })
}
