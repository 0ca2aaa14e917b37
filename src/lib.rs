//! Fixed-precision 128-bit decimal arithmetic for SQL `DECIMAL(p, s)` types
//! with precision up to 38.
//!
//! The crate works on *unscaled* values: the signed integer coefficient of a
//! decimal number, stored in a 16-byte little-endian sign-magnitude layout.
//! The scale is not part of the value; a query engine pairs each coefficient
//! with its own scale and asks this crate for the arithmetic: checked
//! addition and multiplication, division with remainder over base-2^32
//! limbs, power-of-ten rescaling with half-up rounding, binary shifts,
//! comparison, and the big-integer / `i64` / string bridges.
//!
//! Everything is a pure function over immutable inputs: no global state, no
//! I/O, no allocation on the arithmetic paths. Results stay within
//! ±(10<sup>38</sup> - 1); operations that would exceed that range fail with
//! [`Error::Overflow`].
//!
//! ```
//! use unscaled_decimal128::UnscaledDecimal128;
//!
//! // 150.5 / 8.25 at scale 1: divide 1505 * 10^1 by 825
//! let dividend = UnscaledDecimal128::from(1505);
//! let divisor = UnscaledDecimal128::from(825);
//! let (quotient, remainder) = UnscaledDecimal128::divide(&dividend, 1, &divisor, 0)?;
//! assert_eq!(quotient, UnscaledDecimal128::from(18));
//! assert_eq!(remainder, UnscaledDecimal128::from(200));
//! # Ok::<(), unscaled_decimal128::Error>(())
//! ```

mod constants;
mod error;
mod ops;
mod rescale;
mod str;
mod unscaled;

#[cfg(feature = "proptest")]
mod proptest;
#[cfg(feature = "serde")]
mod serde;

pub use constants::{MAX_PRECISION, MAX_UNSCALED};
pub use error::Error;
pub use ops::{
    multiply_256_destructive, shift_left_128, shift_left_multi_precision,
    shift_right_multi_precision,
};
pub use unscaled::UnscaledDecimal128;
