//! Arbitrary precision signed integer arithmetic for puzzle-sized numbers.
//!
//! This crate grew out of Project Euler solutions that outgrow native
//! integers: hundred-digit sums, `2^1000`, `100!`. It provides a single
//! value type, [`BigInt`], storing a sign and a little-endian sequence of
//! decimal limbs, with the four arithmetic operators, comparisons,
//! exponentiation by squaring, radix shifts and digit-level utilities
//! (digit sums, digit reversal) on top.
//!
//! ```
//! use pe_bigint::BigInt;
//!
//! let sum: BigInt = "2".parse::<BigInt>().unwrap().pow(1000).sum_digits();
//! assert_eq!(sum, BigInt::from(1366u32));
//! ```
//!
//! Construction is possible from any native integer type, from floats
//! (rounded to the nearest integer), and from decimal strings with an
//! optional sign and power-of-ten exponent (`"123e45"`, `"-872"`).
//! Conversion back out saturates: a value beyond `u64::MAX` converts to
//! `u64::MAX`, never wrapping.
//!
//! The algorithms are deliberately simple (schoolbook multiplication and
//! an approximate-and-correct division), favoring clarity and edge-case
//! correctness over asymptotic speed. For production-grade bignum
//! workloads, use a dedicated library.

#![deny(missing_docs)]

mod bigint;
mod digit;
mod error;
mod math;
mod parse;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod ser;

pub use crate::bigint::BigInt;
pub use crate::error::{Category, Error, ErrorCode, Result};
