//! Helpers for working with the decimal digits of a single limb.

use crate::math::Limb;

/// Convert an ASCII byte to a decimal digit.
#[inline]
pub(crate) fn to_digit(c: u8) -> Option<Limb> {
    (c as char).to_digit(10)
}

/// Sum the decimal digits of a limb.
///
/// A limb conceptually carries its full zero-padded width, but padding
/// zeros contribute nothing, so plain numeric decomposition suffices.
pub(crate) fn sum(mut n: Limb) -> Limb {
    let mut total = 0;
    while n > 0 {
        total += n % 10;
        n /= 10;
    }
    total
}

/// Numerically reverse the decimal digits of a limb, e.g. 123 -> 321.
///
/// Padding zeros are lost in the reversal: 1230 reverses to 321, not
/// 0321. See [`BigInt::reversed_digits`] for the consequences.
///
/// [`BigInt::reversed_digits`]: crate::BigInt::reversed_digits
pub(crate) fn reverse(mut n: Limb) -> Limb {
    let mut rev = 0;
    while n > 0 {
        rev = 10 * rev + n % 10;
        n /= 10;
    }
    rev
}

/// Collapse a run of ASCII digits into a single limb value.
///
/// The run must be at most one limb wide and contain only digits.
pub(crate) fn chunk_value(chunk: &[u8]) -> Limb {
    debug_assert!(chunk.len() <= crate::math::LIMB_DIGITS);
    debug_assert!(chunk.iter().all(u8::is_ascii_digit));
    chunk
        .iter()
        .fold(0, |acc, &b| acc * 10 + (b - b'0') as Limb)
}

/// Parity test used by exponentiation by squaring.
#[inline]
pub(crate) fn is_odd(n: u64) -> bool {
    n % 2 == 1
}
