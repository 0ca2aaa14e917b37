#[cfg(doc)]
use crate::UnscaledDecimal128;
use core::fmt;

/// An error which can be returned by the arithmetic kernel.
///
/// Every fallible operation on [`UnscaledDecimal128`] reports through this
/// type; the one deliberate exception is `add_with_overflow`, which returns
/// its overflow indication as an integer so callers can aggregate a long
/// sum and inspect overflow once at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The mathematically correct result has a magnitude exceeding
    /// 10<sup>38</sup> - 1, or a conversion target cannot hold the value.
    Overflow,
    /// `divide` was called with a rescaled divisor of zero.
    DivisionByZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Overflow => "Decimal overflow".fmt(f),
            Error::DivisionByZero => "Division by zero".fmt(f),
        }
    }
}

impl std::error::Error for Error {}
