//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the large integer
//! buffers, so for a `vec![0, 1, 2, 3]`, `3` is the most significant limb,
//! and `0` is the least significant limb.
//!
//! Unlike a binary bignum, the limbs here are decimal: each limb holds
//! eight decimal digits, so a limb is a value in `[0, BASE)` with
//! `BASE = 10^8`. A decimal base makes string conversion and per-digit
//! operations (digit sums, digit reversal) cheap, at the cost of wasting
//! a few bits per limb. `BASE` is sized so that a limb-by-limb product
//! plus carries cannot overflow the wide accumulator.

use core::cmp;

// ALIASES
// -------

/// Type for a single limb of the big integer.
///
/// A limb is analogous to a digit in base 10, except it stores eight
/// decimal digits at once.
pub(crate) type Limb = u32;

/// Wide type guaranteed to hold a limb-by-limb product plus carries.
type Wide = u64;

/// The radix of the representation.
pub(crate) const BASE: Limb = 100_000_000;

/// Number of decimal digits per limb.
pub(crate) const LIMB_DIGITS: usize = 8;

/// Small powers of ten, up to one limb's width.
pub(crate) const POW10: [Limb; LIMB_DIGITS] = [
    1, 10, 100, 1000, 10000, 100000, 1000000, 10000000,
];

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

pub(crate) mod scalar {
    use super::*;

    /// Add two limbs plus an incoming carry, in base `BASE`.
    ///
    /// Returns the reduced limb and the outgoing carry (0 or 1).
    #[inline]
    pub fn add(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
        debug_assert!(x < BASE && y < BASE && carry <= 1);
        let sum = x + y + carry;
        if sum >= BASE {
            (sum - BASE, 1)
        } else {
            (sum, 0)
        }
    }

    /// Subtract a limb plus an incoming borrow from a limb, in base `BASE`.
    ///
    /// Returns the reduced limb and the outgoing borrow (0 or 1).
    #[inline]
    pub fn sub(x: Limb, y: Limb, borrow: Limb) -> (Limb, Limb) {
        debug_assert!(x < BASE && y < BASE && borrow <= 1);
        let take = y + borrow;
        if x < take {
            (x + BASE - take, 1)
        } else {
            (x - take, 0)
        }
    }

    /// Multiply two limbs, add a partial sum and an incoming carry.
    ///
    /// Returns the reduced limb and the outgoing carry. The worst case
    /// `(BASE-1) + (BASE-1)^2 + (BASE-1)` stays well inside `Wide`, and
    /// the outgoing carry is always less than `BASE`.
    #[inline]
    pub fn mul(x: Limb, y: Limb, acc: Limb, carry: Limb) -> (Limb, Limb) {
        let wide = acc as Wide + x as Wide * y as Wide + carry as Wide;
        ((wide % BASE as Wide) as Limb, (wide / BASE as Wide) as Limb)
    }
}

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

pub(crate) mod small {
    use super::*;

    /// MulAssign a magnitude by a single limb.
    #[inline]
    pub fn imul(x: &mut Vec<Limb>, y: Limb) {
        debug_assert!(y < BASE);

        let mut carry: Limb = 0;
        for xi in x.iter_mut() {
            let wide = *xi as Wide * y as Wide + carry as Wide;
            *xi = (wide % BASE as Wide) as Limb;
            carry = (wide / BASE as Wide) as Limb;
        }

        // The carry of a one-limb multiplier is itself below BASE.
        if carry != 0 {
            x.push(carry);
        }
        normalize(x);
    }

    /// DivAssign a magnitude by a single limb, returning the remainder.
    ///
    /// Processes most-significant to least-significant, carrying the
    /// running remainder down into the next limb. The divisor must be in
    /// `(0, BASE)`; anything else is a precondition violation.
    pub fn short_div(x: &mut [Limb], d: Limb) -> Limb {
        debug_assert!(d > 0 && d < BASE);

        let mut carry: Limb = 0;
        for xi in x.iter_mut().rev() {
            let cur = *xi as Wide + carry as Wide * BASE as Wide;
            *xi = (cur / d as Wide) as Limb;
            carry = (cur % d as Wide) as Limb;
        }
        carry
    }

    /// Shift a magnitude left by `n` limbs, multiplying by `BASE^n`.
    #[inline]
    pub fn ishl_limbs(x: &mut Vec<Limb>, n: usize) {
        debug_assert!(n != 0);
        x.splice(0..0, core::iter::repeat(0).take(n));
    }

    /// Shift a magnitude right by `n` limbs, truncating towards zero.
    ///
    /// The caller must have checked that at least one limb survives.
    #[inline]
    pub fn ishr_limbs(x: &mut Vec<Limb>, n: usize) {
        debug_assert!(n != 0 && n < x.len());
        x.drain(..n);
    }

    /// Normalize the container by popping any leading zeros.
    ///
    /// The canonical zero keeps a single zero limb.
    #[inline]
    pub fn normalize(x: &mut Vec<Limb>) {
        while x.len() > 1 && x[x.len() - 1] == 0 {
            x.pop();
        }
    }
}

// LARGE
// -----

// Large-to-large operations, to modify a big integer from another.

pub(crate) mod large {
    use super::*;

    // RELATIVE OPERATORS

    /// Compare two magnitudes, in little-endian order.
    ///
    /// A longer normalized magnitude is always greater; equal lengths are
    /// compared lexicographically from the most significant limb down.
    pub fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
        if x.len() > y.len() {
            cmp::Ordering::Greater
        } else if x.len() < y.len() {
            cmp::Ordering::Less
        } else {
            let iter = x.iter().rev().zip(y.iter().rev());
            for (&xi, &yi) in iter {
                if xi > yi {
                    return cmp::Ordering::Greater;
                } else if xi < yi {
                    return cmp::Ordering::Less;
                }
            }
            cmp::Ordering::Equal
        }
    }

    /// Check if the x magnitude is less than the y magnitude.
    #[inline]
    pub fn less(x: &[Limb], y: &[Limb]) -> bool {
        compare(x, y) == cmp::Ordering::Less
    }

    /// Check if the x magnitude is greater than or equal to the y magnitude.
    #[inline]
    pub fn greater_equal(x: &[Limb], y: &[Limb]) -> bool {
        !less(x, y)
    }

    // ADDITION

    /// AddAssign one magnitude to another with carry propagation.
    ///
    /// Extends `x` with new limbs as needed, including a final carry limb.
    pub fn iadd(x: &mut Vec<Limb>, y: &[Limb]) {
        let mut carry: Limb = 0;
        let mut i = 0;
        while i < cmp::max(x.len(), y.len()) || carry != 0 {
            if i == x.len() {
                x.push(0);
            }
            let yi = if i < y.len() { y[i] } else { 0 };
            let (limb, c) = scalar::add(x[i], yi, carry);
            x[i] = limb;
            carry = c;
            i += 1;
        }
    }

    /// SubAssign one magnitude from another with borrow propagation.
    ///
    /// The receiver's magnitude must be at least as large as `y`; calling
    /// this with a smaller receiver is a precondition violation.
    pub fn isub(x: &mut Vec<Limb>, y: &[Limb]) {
        debug_assert!(greater_equal(x, y));

        let mut borrow: Limb = 0;
        let mut i = 0;
        while i < y.len() || borrow != 0 {
            let yi = if i < y.len() { y[i] } else { 0 };
            let (limb, b) = scalar::sub(x[i], yi, borrow);
            x[i] = limb;
            borrow = b;
            i += 1;
        }

        small::normalize(x);
    }

    // MULTIPLICATION

    /// Grade-school multiplication algorithm.
    ///
    /// Slow, naive algorithm working in O(n*m) limb operations. The result
    /// buffer is sized to the sum of both operand lengths; the inner loop
    /// keeps running past the multiplier while a carry remains.
    pub fn mul(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        let mut res: Vec<Limb> = vec![0; x.len() + y.len()];

        for (i, &xi) in x.iter().enumerate() {
            let mut carry: Limb = 0;
            let mut j = 0;
            while j < y.len() || carry != 0 {
                let yj = if j < y.len() { y[j] } else { 0 };
                let (limb, c) = scalar::mul(xi, yj, res[i + j], carry);
                res[i + j] = limb;
                carry = c;
                j += 1;
            }
        }

        small::normalize(&mut res);
        res
    }

    /// Squaring fast path: `mul` specialized to one operand against itself.
    ///
    /// This is the inner step of exponentiation by squaring, so it avoids
    /// the second borrow of the operand slice.
    pub fn square(x: &[Limb]) -> Vec<Limb> {
        let mut res: Vec<Limb> = vec![0; 2 * x.len()];

        for i in 0..x.len() {
            let mut carry: Limb = 0;
            let mut j = 0;
            while j < x.len() || carry != 0 {
                let xj = if j < x.len() { x[j] } else { 0 };
                let (limb, c) = scalar::mul(x[i], xj, res[i + j], carry);
                res[i + j] = limb;
                carry = c;
                j += 1;
            }
        }

        small::normalize(&mut res);
        res
    }
}

// TESTS
// -----
