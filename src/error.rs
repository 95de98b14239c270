//! When big integer arithmetic or parsing goes wrong.

use core::fmt::{self, Debug, Display};
use core::result;
use std::error;

/// This type represents all possible errors that can occur when parsing a
/// decimal string into a [`BigInt`] or performing arithmetic on one.
///
/// [`BigInt`]: crate::BigInt
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible.
    /// A larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `pe_bigint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Zero-based byte index at which the error was detected.
    ///
    /// Only meaningful for syntax errors; arithmetic errors report index 0.
    pub fn index(&self) -> usize {
        self.err.index
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> ErrorCode {
        self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Syntax` - input that does not match the accepted decimal
    ///   grammar
    /// - `Category::Arithmetic` - an operation with no defined result, such
    ///   as division by zero
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::DivisionByZero => Category::Arithmetic,
            ErrorCode::ExpectedDigit
            | ErrorCode::TrailingCharacters
            | ErrorCode::ExponentOutOfRange => Category::Syntax,
        }
    }

    /// Returns true if this error was caused by input that did not match the
    /// accepted decimal grammar.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by an arithmetic operation with
    /// no defined result.
    pub fn is_arithmetic(&self) -> bool {
        self.classify() == Category::Arithmetic
    }
}

/// Categorizes the cause of a `pe_bigint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by input that did not match the accepted decimal
    /// grammar.
    Syntax,

    /// The error was caused by an arithmetic operation with no defined
    /// result.
    Arithmetic,
}

struct ErrorImpl {
    code: ErrorCode,
    index: usize,
}

/// This type describes all possible errors that can occur when working with
/// big integers.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Division with a zero-magnitude divisor.
    DivisionByZero,

    /// Expected a decimal digit, found something else or end of input.
    ExpectedDigit,

    /// Input continues past a complete number.
    TrailingCharacters,

    /// Exponent does not fit in 32 bits.
    ExponentOutOfRange,
}

impl Error {
    #[cold]
    pub(crate) fn syntax(code: ErrorCode, index: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, index }),
        }
    }

    #[cold]
    pub(crate) fn arithmetic(code: ErrorCode) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, index: 0 }),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::DivisionByZero => f.write_str("division by zero"),
            ErrorCode::ExpectedDigit => f.write_str("expected digit"),
            ErrorCode::TrailingCharacters => f.write_str("trailing characters"),
            ErrorCode::ExponentOutOfRange => f.write_str("exponent out of range"),
        }
    }
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.code {
            ErrorCode::DivisionByZero => Display::fmt(&self.code, f),
            _ => write!(f, "{} at index {}", self.code, self.index),
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, index: {})",
            self.err.to_string(),
            self.err.index,
        )
    }
}
