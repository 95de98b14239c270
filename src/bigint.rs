//! The arbitrary precision signed integer type.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

use crate::digit;
use crate::error::{Error, ErrorCode, Result};
use crate::math::{large, small, Limb, BASE, LIMB_DIGITS, POW10};
use crate::parse::{self, Parts};

/// Sign of a [`BigInt`], stored independently of the magnitude.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[inline]
    fn flipped(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// A signed integer of unbounded magnitude.
///
/// The magnitude is a little-endian sequence of decimal limbs, each holding
/// eight decimal digits. Two invariants hold between operations: every limb
/// is in `[0, BASE)`, and the most significant limb is nonzero except for
/// the canonical zero, which is a single zero limb with positive sign.
///
/// Arithmetic is provided through the standard operator traits, each built
/// on its compound-assignment form, plus [`pow`](BigInt::pow) for
/// exponentiation. Division by zero is reported through
/// [`try_div`](BigInt::try_div); the `/` operator panics on it, like native
/// integer division.
///
/// This is puzzle-grade arithmetic: schoolbook multiplication and an
/// approximate-and-correct division, chosen for clarity over asymptotics.
/// There is no Karatsuba or FFT multiplication and no modular arithmetic.
#[derive(Clone)]
pub struct BigInt {
    sign: Sign,
    digits: Vec<Limb>,
}

impl BigInt {
    /// The value zero.
    pub fn zero() -> BigInt {
        BigInt {
            sign: Sign::Positive,
            digits: vec![0],
        }
    }

    /// Returns true if the value is zero, regardless of stored sign.
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Returns true if the value is strictly less than zero.
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative && !self.is_zero()
    }

    /// Parse a decimal string, yielding zero for anything outside the
    /// grammar.
    ///
    /// The accepted grammar is `[+|-]digits[(e|E)digits]` with a
    /// non-negative power-of-ten exponent. This constructor reproduces the
    /// interface this library grew up with, where a malformed string
    /// silently produced zero; use the [`FromStr`] impl to detect malformed
    /// input instead.
    pub fn from_str_lossy(s: &str) -> BigInt {
        match parse::parse_decimal(s) {
            Ok(parts) => BigInt::from_parts(parts),
            Err(_) => BigInt::zero(),
        }
    }

    // CONSTRUCTION

    fn from_unsigned(mut val: u64) -> BigInt {
        let mut digits = Vec::new();
        while val >= BASE as u64 {
            digits.push((val % BASE as u64) as Limb);
            val /= BASE as u64;
        }
        digits.push(val as Limb);
        BigInt {
            sign: Sign::Positive,
            digits,
        }
    }

    fn from_signed(val: i64) -> BigInt {
        let mut big = BigInt::from_unsigned(val.unsigned_abs());
        if val < 0 {
            big.sign = Sign::Negative;
        }
        big
    }

    /// Decompose a float, rounded to the nearest integer first.
    ///
    /// Exact for magnitudes up to 2^53; above that the input itself only
    /// identifies an integer to within its own precision. NaN and infinity
    /// are outside the contract.
    fn from_floating(val: f64) -> BigInt {
        debug_assert!(val.is_finite());

        let mut big = BigInt {
            sign: if val < 0.0 {
                Sign::Negative
            } else {
                Sign::Positive
            },
            digits: Vec::new(),
        };

        let base = BASE as f64;
        let mut val = val.abs().round();
        while val >= base {
            let rem = val % base;
            big.digits.push(rem as Limb);
            // The true quotient is an integer; rounding undoes any error
            // introduced by the subtraction and division.
            val = ((val - rem) / base).round();
        }
        big.digits.push(val as Limb);

        big.normalize();
        big
    }

    fn from_parts(parts: Parts) -> BigInt {
        // Chunk the digit run into limbs from the least significant end.
        let digits = parts.digits;
        let mut limbs = Vec::with_capacity(digits.len() / LIMB_DIGITS + 1);
        let mut i = digits.len();
        while i > LIMB_DIGITS {
            limbs.push(digit::chunk_value(&digits[i - LIMB_DIGITS..i]));
            i -= LIMB_DIGITS;
        }
        limbs.push(digit::chunk_value(&digits[..i]));

        let mut big = BigInt {
            sign: if parts.negative {
                Sign::Negative
            } else {
                Sign::Positive
            },
            digits: limbs,
        };
        big.normalize();

        // The exponent counts decimal digits. Limb-aligned portions become
        // a radix shift; the remainder is a small power-of-ten multiply.
        if parts.exponent > 0 && !big.is_zero() {
            let rem = parts.exponent as usize % LIMB_DIGITS;
            if rem != 0 {
                small::imul(&mut big.digits, POW10[rem]);
            }
            let shift = parts.exponent as usize / LIMB_DIGITS;
            if shift != 0 {
                big.radix_shift(shift as isize);
            }
        }
        big
    }

    // INVARIANT MAINTENANCE

    /// Pop leading zero limbs and canonicalize the sign of zero.
    fn normalize(&mut self) {
        small::normalize(&mut self.digits);
        if self.is_zero() {
            self.sign = Sign::Positive;
        }
    }

    // MAGNITUDE COMPARISON

    fn abs_eq(&self, rhs: &BigInt) -> bool {
        self.digits == rhs.digits
    }

    fn abs_lt(&self, rhs: &BigInt) -> bool {
        large::less(&self.digits, &rhs.digits)
    }

    // ARITHMETIC

    /// Shared core of `+=` and `-=`, with the effective right-hand sign
    /// passed in.
    fn add_with_sign(&mut self, rhs: &BigInt, rhs_sign: Sign) {
        if self.sign == rhs_sign {
            // Same sign: magnitudes simply add.
            large::iadd(&mut self.digits, &rhs.digits);
        } else if self.abs_lt(rhs) {
            // Opposite signs with |rhs| dominant: subtract into a copy of
            // the larger magnitude and adopt its sign.
            let mut larger = rhs.digits.clone();
            large::isub(&mut larger, &self.digits);
            self.digits = larger;
            self.sign = rhs_sign;
        } else {
            large::isub(&mut self.digits, &rhs.digits);
        }
        self.normalize();
    }

    fn mul_assign_ref(&mut self, rhs: &BigInt) {
        self.digits = large::mul(&self.digits, &rhs.digits);
        if rhs.sign == Sign::Negative {
            self.sign = self.sign.flipped();
        }
        self.normalize();
    }

    /// Square in place. The result is never negative.
    fn square_assign(&mut self) {
        self.digits = large::square(&self.digits);
        self.sign = Sign::Positive;
        self.normalize();
    }

    /// Divide the magnitude by a single limb in `(0, BASE)`, keeping the
    /// sign.
    fn abs_short_div_assign(&mut self, d: Limb) {
        small::short_div(&mut self.digits, d);
        self.normalize();
    }

    /// Magnitude division by the estimate-and-correct method.
    ///
    /// The initial estimate short-divides the numerator by the
    /// denominator's leading limb, radix-shifted into alignment. Each round
    /// recomputes the remainder, short-divides it into a correction term
    /// and averages the correction into the estimate, until the remainder's
    /// magnitude drops below the denominator's. Substantially slower than
    /// multiplication; fine for puzzle-sized operands.
    fn abs_div_assign(&mut self, rhs: &BigInt) -> Result<()> {
        if rhs.is_zero() {
            return Err(Error::arithmetic(ErrorCode::DivisionByZero));
        }

        if self.abs_eq(rhs) {
            self.digits = vec![1];
            return Ok(());
        }
        if self.abs_lt(rhs) {
            self.digits = vec![0];
            return Ok(());
        }

        let mut numerator = self.clone();
        let mut denominator = rhs.clone();
        numerator.sign = Sign::Positive;
        denominator.sign = Sign::Positive;

        let denominator_len = denominator.digits.len() as isize;
        // The quick divisor: a one-limb stand-in for the denominator.
        let quick_d = denominator.digits[denominator.digits.len() - 1];

        let mut quotient = numerator.clone();
        quotient.abs_short_div_assign(quick_d);
        quotient.radix_shift(1 - denominator_len);

        let one = BigInt::from(1u32);
        let mut remainder = &denominator + &one;
        while !remainder.abs_lt(&denominator) {
            remainder = &numerator - &(&quotient * &denominator);
            let mut correction = remainder.clone();
            correction.abs_short_div_assign(quick_d);
            correction.radix_shift(1 - denominator_len);
            correction += &quotient;
            quotient += &correction;
            quotient.abs_short_div_assign(2);
        }

        // The estimate can overshoot by one; a negative final remainder
        // means the quotient must step back to truncate towards zero.
        remainder = &numerator - &(&quotient * &denominator);
        if remainder.is_negative() {
            quotient -= &one;
        }

        self.digits = quotient.digits;
        Ok(())
    }

    /// Divide, reporting division by zero as an error.
    pub fn try_div(&self, rhs: &BigInt) -> Result<BigInt> {
        let mut quotient = self.clone();
        quotient.try_div_assign(rhs)?;
        Ok(quotient)
    }

    /// Divide in place, reporting division by zero as an error.
    ///
    /// The quotient truncates towards zero and takes the product of the
    /// operand signs.
    pub fn try_div_assign(&mut self, rhs: &BigInt) -> Result<()> {
        self.abs_div_assign(rhs)?;
        if rhs.sign == Sign::Negative {
            self.sign = self.sign.flipped();
        }
        self.normalize();
        Ok(())
    }

    /// Raise to a non-negative integer power by repeated squaring.
    ///
    /// O(log exponent) squarings. An exponent of zero yields one, the
    /// usual convention, including for a zero base.
    pub fn pow(&self, exponent: u64) -> BigInt {
        if exponent == 0 {
            return BigInt::from(1u32);
        }

        let mut base = self.clone();
        let mut acc = BigInt::from(1u32);
        let mut exp = exponent;
        while exp > 1 {
            if digit::is_odd(exp) {
                // Odd exponents park a factor in the accumulator before
                // the squaring halves them.
                acc.mul_assign_ref(&base);
            }
            base.square_assign();
            exp /= 2;
        }

        base.mul_assign_ref(&acc);
        base
    }

    /// Shift by `n` limb positions: left for positive `n` (multiplying by
    /// `BASE^n`), right for negative `n` (integer-dividing by `BASE^|n|`).
    ///
    /// Analogous to `<<` and `>>` on binary representations. A right shift
    /// past every limb leaves zero.
    pub fn radix_shift(&mut self, n: isize) {
        if self.digits.len() as isize + n <= 0 {
            self.digits.clear();
            self.digits.push(0);
            self.sign = Sign::Positive;
            return;
        }

        if n > 0 {
            small::ishl_limbs(&mut self.digits, n as usize);
            self.normalize();
        } else if n < 0 {
            small::ishr_limbs(&mut self.digits, n.unsigned_abs());
        }
    }

    /// Sum the decimal digits of the magnitude.
    ///
    /// Returns a `BigInt` rather than a native integer so that digit sums
    /// of enormous values cannot overflow, even though in practice they
    /// stay small.
    pub fn sum_digits(&self) -> BigInt {
        let mut total = BigInt::zero();
        for &limb in &self.digits {
            total += BigInt::from(digit::sum(limb));
        }
        total
    }

    /// Reverse the decimal digits of the magnitude, keeping the sign.
    ///
    /// Reverses the limb order, then the digits within each limb. With
    /// multi-digit limbs this is an approximation of a full decimal
    /// reversal: interior zero padding does not survive the per-limb
    /// numeric reversal, so values whose decimal form has zeros at limb
    /// boundaries (or a short leading limb alongside more limbs) may not
    /// reverse digit-for-digit.
    pub fn reversed_digits(&self) -> BigInt {
        let mut rev = self.clone();
        rev.digits.reverse();
        for limb in rev.digits.iter_mut() {
            *limb = digit::reverse(*limb);
        }
        rev.normalize();
        rev
    }

    // CONVERSION TO NATIVE TYPES

    /// Convert to `i64`, saturating at the type's bounds.
    pub fn to_i64(&self) -> i64 {
        let max = BigInt::from(i64::MAX);

        // More limbs than i64::MAX needs: definitely out of range.
        if self.digits.len() > max.digits.len() {
            return if self.sign == Sign::Negative {
                i64::MIN
            } else {
                i64::MAX
            };
        }

        // Exactly at the bound: decide against the wrapped sentinels.
        if self.digits.len() == max.digits.len() {
            if *self > max {
                return i64::MAX;
            }
            if *self < BigInt::from(i64::MIN) {
                return i64::MIN;
            }
        }

        let mut magnitude: u64 = 0;
        for &limb in self.digits.iter().rev() {
            magnitude = magnitude * BASE as u64 + limb as u64;
        }

        if self.sign == Sign::Negative {
            // i64::MIN's magnitude is one past i64::MAX and has no
            // positive counterpart.
            if magnitude == i64::MAX as u64 + 1 {
                i64::MIN
            } else {
                -(magnitude as i64)
            }
        } else {
            magnitude as i64
        }
    }

    /// Convert to `u64`, saturating at the type's bounds.
    ///
    /// Negative values convert to zero.
    pub fn to_u64(&self) -> u64 {
        if self.is_negative() {
            return 0;
        }

        let max = BigInt::from(u64::MAX);
        if self.digits.len() > max.digits.len() {
            return u64::MAX;
        }
        if self.digits.len() == max.digits.len() && large::less(&max.digits, &self.digits) {
            return u64::MAX;
        }

        let mut sum: u64 = 0;
        for &limb in self.digits.iter().rev() {
            sum = sum * BASE as u64 + limb as u64;
        }
        sum
    }

    /// Convert to `f64`, saturating at the type's finite bounds.
    ///
    /// Values within range convert with at most the rounding error of the
    /// accumulation.
    pub fn to_f64(&self) -> f64 {
        let max = BigInt::from(f64::MAX);
        if self.digits.len() > max.digits.len()
            || (self.digits.len() == max.digits.len()
                && large::less(&max.digits, &self.digits))
        {
            return if self.sign == Sign::Negative {
                -f64::MAX
            } else {
                f64::MAX
            };
        }

        let mut sum = 0.0f64;
        for &limb in self.digits.iter().rev() {
            sum = sum * BASE as f64 + limb as f64;
        }
        if self.sign == Sign::Negative {
            -sum
        } else {
            sum
        }
    }

    /// The decimal string form: a minus sign if negative, the leading limb
    /// unpadded, then each remaining limb zero-padded to the limb width.
    pub fn to_decimal_string(&self) -> String {
        self.to_string()
    }
}

impl Default for BigInt {
    /// The default value is zero.
    fn default() -> BigInt {
        BigInt::zero()
    }
}

// CONSTRUCTION FROM NATIVE TYPES

macro_rules! from_unsigned {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(val: $ty) -> BigInt {
                    BigInt::from_unsigned(val as u64)
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(val: $ty) -> BigInt {
                    BigInt::from_signed(val as i64)
                }
            }
        )*
    };
}

macro_rules! from_floating {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigInt {
                /// Rounds to the nearest integer. NaN and infinity are
                /// outside the contract.
                fn from(val: $ty) -> BigInt {
                    BigInt::from_floating(val as f64)
                }
            }
        )*
    };
}

from_unsigned!(u8 u16 u32 u64 usize);
from_signed!(i8 i16 i32 i64 isize);
from_floating!(f32 f64);

impl FromStr for BigInt {
    type Err = Error;

    /// Parse `[+|-]digits[(e|E)digits]`, rejecting anything else with a
    /// positioned syntax error.
    fn from_str(s: &str) -> Result<BigInt> {
        parse::parse_decimal(s).map(BigInt::from_parts)
    }
}

// COMPARISON

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        // Any signed zero equals any other zero.
        if self.is_zero() && other.is_zero() {
            return Ordering::Equal;
        }

        match (self.sign, other.sign) {
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Positive, Sign::Positive) => large::compare(&self.digits, &other.digits),
            // Between negatives the larger magnitude orders lower.
            (Sign::Negative, Sign::Negative) => large::compare(&other.digits, &self.digits),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}

// UNARY AND BINARY OPERATORS

impl Neg for BigInt {
    type Output = BigInt;

    /// Flip the sign, leaving the magnitude untouched. Observably a no-op
    /// on zero.
    fn neg(mut self) -> BigInt {
        if !self.is_zero() {
            self.sign = self.sign.flipped();
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        self.add_with_sign(rhs, rhs.sign);
    }
}

impl SubAssign<&BigInt> for BigInt {
    /// Subtraction is addition of the negation.
    fn sub_assign(&mut self, rhs: &BigInt) {
        self.add_with_sign(rhs, rhs.sign.flipped());
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        self.mul_assign_ref(rhs);
    }
}

impl DivAssign<&BigInt> for BigInt {
    /// Panics on division by zero; use
    /// [`try_div_assign`](BigInt::try_div_assign) to handle it as an error.
    fn div_assign(&mut self, rhs: &BigInt) {
        if let Err(err) = self.try_div_assign(rhs) {
            panic!("{}", err);
        }
    }
}

// The binary operators reuse the compound forms: the left operand is taken
// (or cloned) and mutated in place.
macro_rules! forward_binop {
    ($imp:ident::$method:ident, $assign:ident::$assign_method:ident) => {
        impl $assign<BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                $assign::$assign_method(self, &rhs);
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(mut self, rhs: &BigInt) -> BigInt {
                $assign::$assign_method(&mut self, rhs);
                self
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(mut self, rhs: BigInt) -> BigInt {
                $assign::$assign_method(&mut self, &rhs);
                self
            }
        }

        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                $imp::$method(self.clone(), rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $imp::$method(self.clone(), &rhs)
            }
        }
    };
}

forward_binop!(Add::add, AddAssign::add_assign);
forward_binop!(Sub::sub, SubAssign::sub_assign);
forward_binop!(Mul::mul, MulAssign::mul_assign);
forward_binop!(Div::div, DivAssign::div_assign);

// FORMATTING

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        if self.sign == Sign::Negative {
            f.write_str("-")?;
        }

        let mut buffer = itoa::Buffer::new();
        let mut iter = self.digits.iter().rev();
        if let Some(&most) = iter.next() {
            f.write_str(buffer.format(most))?;
        }
        for &limb in iter {
            let formatted = buffer.format(limb);
            f.write_str(&"0000000"[..LIMB_DIGITS - formatted.len()])?;
            f.write_str(formatted)?;
        }
        Ok(())
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}
