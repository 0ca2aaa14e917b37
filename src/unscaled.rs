use crate::constants::{MAGNITUDE_MASK, MAX_UNSCALED, NUM_LIMBS, SIGN_BIT};
use crate::error::Error;
use crate::ops;
use crate::rescale;
use crate::str::to_str_internal;
use core::{cmp::Ordering, fmt, ops::Neg};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::ToPrimitive;

/// A signed 128-bit unscaled decimal coefficient.
///
/// The value is stored as a 16-byte little-endian sign-magnitude integer:
/// bytes 0..8 are the low 64 bits of the magnitude, bytes 8..15 continue the
/// magnitude, and bit 7 of byte 15 is the sign (1 = negative). The magnitude
/// of any value produced by this crate is at most 10<sup>38</sup> - 1, so a
/// `DECIMAL(38, s)` coefficient always fits. The scale is not part of the
/// value; callers pair each coefficient with its own scale.
///
/// The byte layout is a public contract: query engines store the 16 bytes
/// directly in page-level binary formats and read them back with
/// [`UnscaledDecimal128::try_from_bytes`]. Zero has a single canonical
/// encoding (all bytes zero); no public operation produces a negative zero.
///
/// # Example
///
/// ```
/// use unscaled_decimal128::UnscaledDecimal128;
///
/// let a = UnscaledDecimal128::from(1500);
/// let b = UnscaledDecimal128::from(-300);
/// assert_eq!(a.add(&b)?, UnscaledDecimal128::from(1200));
/// assert_eq!(a.rescale(-2)?, UnscaledDecimal128::from(15));
/// # Ok::<(), unscaled_decimal128::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct UnscaledDecimal128([u8; 16]);

impl UnscaledDecimal128 {
    /// The canonical zero.
    pub const ZERO: UnscaledDecimal128 = UnscaledDecimal128([0u8; 16]);

    /// The largest representable value, 10<sup>38</sup> - 1.
    pub const MAX: UnscaledDecimal128 = UnscaledDecimal128(MAX_UNSCALED.to_le_bytes());

    /// The smallest representable value, -(10<sup>38</sup> - 1).
    pub const MIN: UnscaledDecimal128 = UnscaledDecimal128((MAX_UNSCALED | SIGN_BIT).to_le_bytes());

    pub(crate) const fn to_bits(self) -> u128 {
        u128::from_le_bytes(self.0)
    }

    pub(crate) const fn from_bits(bits: u128) -> UnscaledDecimal128 {
        UnscaledDecimal128(bits.to_le_bytes())
    }

    /// The unsigned magnitude, always below 2<sup>127</sup>.
    pub(crate) const fn magnitude(self) -> u128 {
        self.to_bits() & MAGNITUDE_MASK
    }

    /// Builds a value from a sign and magnitude, canonicalizing zero.
    /// The magnitude must already be within 127 bits.
    pub(crate) fn from_sign_magnitude(negative: bool, magnitude: u128) -> UnscaledDecimal128 {
        debug_assert!(magnitude & SIGN_BIT == 0);
        if negative && magnitude != 0 {
            UnscaledDecimal128::from_bits(magnitude | SIGN_BIT)
        } else {
            UnscaledDecimal128::from_bits(magnitude)
        }
    }

    /// Fallible variant of [`from_sign_magnitude`](Self::from_sign_magnitude)
    /// that enforces the 10<sup>38</sup> - 1 magnitude bound.
    pub(crate) fn try_from_sign_magnitude(
        negative: bool,
        magnitude: u128,
    ) -> Result<UnscaledDecimal128, Error> {
        if magnitude > MAX_UNSCALED {
            return Err(Error::Overflow);
        }
        Ok(UnscaledDecimal128::from_sign_magnitude(negative, magnitude))
    }

    /// The magnitude as four little-endian 32-bit limbs.
    pub(crate) fn magnitude_limbs(&self) -> [u32; NUM_LIMBS] {
        let magnitude = self.magnitude();
        [
            magnitude as u32,
            (magnitude >> 32) as u32,
            (magnitude >> 64) as u32,
            (magnitude >> 96) as u32,
        ]
    }

    /// The packed 16-byte little-endian representation.
    pub const fn to_bytes(&self) -> [u8; 16] {
        self.0
    }

    /// Reconstructs a value from its packed representation, e.g. read back
    /// from a page. A stored negative zero is canonicalized; a magnitude
    /// above 10<sup>38</sup> - 1 fails with [`Error::Overflow`].
    pub fn try_from_bytes(bytes: [u8; 16]) -> Result<UnscaledDecimal128, Error> {
        let value = UnscaledDecimal128(bytes);
        UnscaledDecimal128::try_from_sign_magnitude(value.is_negative(), value.magnitude())
    }

    /// Bytes 0..8 of the packed representation as a little-endian integer.
    pub const fn low64(&self) -> u64 {
        self.to_bits() as u64
    }

    /// Bytes 8..16 of the packed representation, sign bit still embedded.
    pub const fn high64(&self) -> u64 {
        (self.to_bits() >> 64) as u64
    }

    /// True iff the sign bit is set. Canonical zero is never negative.
    pub const fn is_negative(&self) -> bool {
        self.to_bits() & SIGN_BIT != 0
    }

    pub const fn is_zero(&self) -> bool {
        self.magnitude() == 0
    }

    /// Flips the sign. Negating zero yields zero.
    pub fn negate(self) -> UnscaledDecimal128 {
        UnscaledDecimal128::from_sign_magnitude(!self.is_negative(), self.magnitude())
    }

    /// Converts an arbitrary-precision integer, failing with
    /// [`Error::Overflow`] when the magnitude exceeds 10<sup>38</sup> - 1.
    pub fn try_from_big_int(value: &BigInt) -> Result<UnscaledDecimal128, Error> {
        let magnitude = value.magnitude().to_u128().ok_or(Error::Overflow)?;
        UnscaledDecimal128::try_from_sign_magnitude(value.sign() == Sign::Minus, magnitude)
    }

    /// The exact arbitrary-precision value.
    pub fn to_big_int(&self) -> BigInt {
        let sign = if self.is_zero() {
            Sign::NoSign
        } else if self.is_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        };
        BigInt::from_biguint(sign, BigUint::from(self.magnitude()))
    }

    /// Narrows to a signed 64-bit integer, failing with
    /// [`Error::Overflow`] when the value does not fit. `i64::MIN`
    /// round-trips even though its magnitude needs the full 64th bit.
    pub fn try_to_i64(&self) -> Result<i64, Error> {
        let magnitude = self.magnitude();
        if self.is_negative() {
            if magnitude > i64::MAX as u128 + 1 {
                return Err(Error::Overflow);
            }
            Ok((magnitude as u64).wrapping_neg() as i64)
        } else {
            if magnitude > i64::MAX as u128 {
                return Err(Error::Overflow);
            }
            Ok(magnitude as i64)
        }
    }

    /// Signed addition. Fails with [`Error::Overflow`] when the result's
    /// magnitude exceeds 10<sup>38</sup> - 1.
    pub fn add(&self, other: &UnscaledDecimal128) -> Result<UnscaledDecimal128, Error> {
        ops::add_impl(self, other)
    }

    /// Subtraction, implemented as addition of the negated operand.
    pub fn subtract(&self, other: &UnscaledDecimal128) -> Result<UnscaledDecimal128, Error> {
        ops::add_impl(self, &other.negate())
    }

    /// Wrapping addition within the 127-bit sign-magnitude space.
    ///
    /// Returns the wrapped sum together with an overflow indicator
    /// `k in {-1, 0, 1}` such that the true signed sum equals
    /// `sum + k * 2`<sup>`127`</sup>. This never signals an error, so a
    /// caller can fold a long sequence of additions and inspect the
    /// accumulated overflow once at the end. The wrapped sum is the one
    /// value this crate returns whose magnitude may exceed
    /// 10<sup>38</sup> - 1; run [`throw_if_overflows`](Self::throw_if_overflows)
    /// on it before treating it as a decimal.
    pub fn add_with_overflow(&self, other: &UnscaledDecimal128) -> (UnscaledDecimal128, i64) {
        ops::add_with_overflow_impl(self, other)
    }

    /// Signed multiplication. Fails with [`Error::Overflow`] when the
    /// result's magnitude exceeds 10<sup>38</sup> - 1.
    pub fn multiply(&self, other: &UnscaledDecimal128) -> Result<UnscaledDecimal128, Error> {
        ops::mul_impl(self, other)
    }

    /// Multiplication by a short 64-bit operand; same contract as
    /// [`multiply`](Self::multiply) without widening the right-hand side.
    pub fn multiply_i64(&self, other: i64) -> Result<UnscaledDecimal128, Error> {
        ops::mul_i64_impl(self, other)
    }

    /// Divides `dividend * 10`<sup>`dividend_rescale`</sup> by
    /// `divisor * 10`<sup>`divisor_rescale`</sup>, returning quotient and
    /// remainder.
    ///
    /// The outputs satisfy `rescaled_dividend = q * rescaled_divisor + r`
    /// with `|r| < |rescaled_divisor|` and `r` carrying the rescaled
    /// dividend's sign when nonzero; the quotient's sign is the XOR of the
    /// operand signs. Fails with [`Error::DivisionByZero`] when the rescaled
    /// divisor is zero and with [`Error::Overflow`] when either output's
    /// magnitude reaches 10<sup>38</sup>.
    ///
    /// # Panics
    ///
    /// Panics if either rescale factor exceeds 38.
    pub fn divide(
        dividend: &UnscaledDecimal128,
        dividend_rescale: u32,
        divisor: &UnscaledDecimal128,
        divisor_rescale: u32,
    ) -> Result<(UnscaledDecimal128, UnscaledDecimal128), Error> {
        ops::divide_impl(dividend, dividend_rescale, divisor, divisor_rescale)
    }

    /// Multiplies by 10<sup>`exponent`</sup> when `exponent` is positive and
    /// divides, rounding half-up away from zero, when it is negative.
    ///
    /// A tie (the discarded digits are exactly half the divisor) rounds away
    /// from zero: `15.rescale(-1)` is 2, `(-15).rescale(-1)` is -2. An
    /// exponent of -39 or below always yields zero; an exponent of zero is a
    /// no-op. Fails with [`Error::Overflow`] when scaling up exceeds
    /// 10<sup>38</sup> - 1.
    pub fn rescale(&self, exponent: i32) -> Result<UnscaledDecimal128, Error> {
        rescale::rescale_impl(self, exponent)
    }

    /// True iff the magnitude is at least 10<sup>`precision`</sup>, i.e. the
    /// value no longer fits a `DECIMAL(precision, s)` coefficient.
    /// `precision` must be in `[1, 38]`.
    pub fn overflows(&self, precision: u8) -> bool {
        rescale::overflows(self, precision)
    }

    /// Fails with [`Error::Overflow`] iff the magnitude exceeds
    /// 10<sup>38</sup> - 1. Useful on the wrapped sum produced by
    /// [`add_with_overflow`](Self::add_with_overflow).
    pub fn throw_if_overflows(&self) -> Result<(), Error> {
        rescale::throw_if_overflows(self)
    }

    /// Form of [`throw_if_overflows`](Self::throw_if_overflows) for callers
    /// holding a candidate result as raw `(low64, high64)` halves, sign bit
    /// still embedded in `high64`.
    pub fn throw_if_overflows_raw(low64: u64, high64: u64) -> Result<(), Error> {
        rescale::throw_if_overflows_raw(low64, high64)
    }

    /// Multiplies in place by 2<sup>`shift`</sup>, preserving sign. Fails
    /// with [`Error::Overflow`] when the result's magnitude would exceed
    /// 10<sup>38</sup> - 1, leaving the value untouched.
    pub fn shift_left_destructive(&mut self, shift: u32) -> Result<(), Error> {
        ops::shift_left_destructive_impl(self, shift)
    }

    /// Shifts the magnitude right by `shift` bits, preserving sign. When
    /// `round_up` is set and any discarded bit was nonzero, the shifted
    /// magnitude is incremented. That is sticky rounding on the binary
    /// fraction, not the decimal half-up rounding of
    /// [`rescale`](Self::rescale). A shift of zero copies the value.
    pub fn shift_right(&self, shift: u32, round_up: bool) -> UnscaledDecimal128 {
        ops::shift_right_impl(self, shift, round_up)
    }

    /// Total-order comparison consistent with the big-integer value.
    pub fn compare(&self, other: &UnscaledDecimal128) -> Ordering {
        ops::cmp_impl(self, other)
    }
}

impl From<i64> for UnscaledDecimal128 {
    fn from(value: i64) -> UnscaledDecimal128 {
        UnscaledDecimal128::from_sign_magnitude(value < 0, value.unsigned_abs() as u128)
    }
}

impl TryFrom<&BigInt> for UnscaledDecimal128 {
    type Error = Error;

    fn try_from(value: &BigInt) -> Result<UnscaledDecimal128, Error> {
        UnscaledDecimal128::try_from_big_int(value)
    }
}

impl TryFrom<&UnscaledDecimal128> for i64 {
    type Error = Error;

    fn try_from(value: &UnscaledDecimal128) -> Result<i64, Error> {
        value.try_to_i64()
    }
}

impl Neg for UnscaledDecimal128 {
    type Output = UnscaledDecimal128;

    fn neg(self) -> UnscaledDecimal128 {
        self.negate()
    }
}

impl PartialOrd for UnscaledDecimal128 {
    fn partial_cmp(&self, other: &UnscaledDecimal128) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UnscaledDecimal128 {
    fn cmp(&self, other: &UnscaledDecimal128) -> Ordering {
        ops::cmp_impl(self, other)
    }
}

impl fmt::Display for UnscaledDecimal128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(to_str_internal(self).as_str())
    }
}

impl fmt::Debug for UnscaledDecimal128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
