//! Power-of-ten rescaling and the precision range checks.

use crate::constants::{MAX_PRECISION, MAX_UNSCALED, POWERS_OF_TEN, SIGN_BIT_HIGH64};
use crate::error::Error;
use crate::UnscaledDecimal128;

pub(crate) fn rescale_impl(
    value: &UnscaledDecimal128,
    exponent: i32,
) -> Result<UnscaledDecimal128, Error> {
    if exponent == 0 || value.is_zero() {
        return Ok(*value);
    }
    let negative = value.is_negative();
    let magnitude = value.magnitude();

    if exponent > 0 {
        let power = POWERS_OF_TEN.get(exponent as usize).ok_or(Error::Overflow)?;
        let scaled = magnitude.checked_mul(*power).ok_or(Error::Overflow)?;
        return UnscaledDecimal128::try_from_sign_magnitude(negative, scaled);
    }

    // Scale down, rounding half-up away from zero. Anything shifted by 39
    // digits or more is gone entirely: 2 * 10^38 < 10^39 rounds to zero.
    let shrink = exponent.unsigned_abs() as usize;
    if shrink > MAX_PRECISION as usize {
        return Ok(UnscaledDecimal128::ZERO);
    }
    let divisor = POWERS_OF_TEN[shrink];
    let mut quotient = magnitude / divisor;
    let remainder = magnitude % divisor;
    if remainder >= divisor - remainder {
        quotient += 1;
    }
    Ok(UnscaledDecimal128::from_sign_magnitude(negative, quotient))
}

pub(crate) fn overflows(value: &UnscaledDecimal128, precision: u8) -> bool {
    debug_assert!((1..=MAX_PRECISION).contains(&precision));
    value.magnitude() >= POWERS_OF_TEN[precision as usize]
}

pub(crate) fn throw_if_overflows(value: &UnscaledDecimal128) -> Result<(), Error> {
    if value.magnitude() > MAX_UNSCALED {
        return Err(Error::Overflow);
    }
    Ok(())
}

pub(crate) fn throw_if_overflows_raw(low64: u64, high64: u64) -> Result<(), Error> {
    let magnitude = ((high64 & !SIGN_BIT_HIGH64) as u128) << 64 | low64 as u128;
    if magnitude > MAX_UNSCALED {
        return Err(Error::Overflow);
    }
    Ok(())
}
