use crate::constants::{MAGNITUDE_MASK, MAX_UNSCALED};
use crate::error::Error;
use crate::UnscaledDecimal128;

pub(crate) fn add_impl(
    a: &UnscaledDecimal128,
    b: &UnscaledDecimal128,
) -> Result<UnscaledDecimal128, Error> {
    let (sum, overflow) = add_with_overflow_impl(a, b);
    if overflow != 0 || sum.magnitude() > MAX_UNSCALED {
        return Err(Error::Overflow);
    }
    Ok(sum)
}

pub(crate) fn add_with_overflow_impl(
    a: &UnscaledDecimal128,
    b: &UnscaledDecimal128,
) -> (UnscaledDecimal128, i64) {
    let a_negative = a.is_negative();
    let a_magnitude = a.magnitude();
    let b_magnitude = b.magnitude();

    if a_negative == b.is_negative() {
        // Both magnitudes are below 2^127, so their sum fits a u128 and the
        // bit escaping the 127-bit magnitude space is the overflow.
        let sum = a_magnitude + b_magnitude;
        let overflow = (sum >> 127) as i64;
        let result = UnscaledDecimal128::from_sign_magnitude(a_negative, sum & MAGNITUDE_MASK);
        (result, if a_negative { -overflow } else { overflow })
    } else if a_magnitude >= b_magnitude {
        // Opposite signs subtract and can never leave the magnitude space.
        (
            UnscaledDecimal128::from_sign_magnitude(a_negative, a_magnitude - b_magnitude),
            0,
        )
    } else {
        (
            UnscaledDecimal128::from_sign_magnitude(!a_negative, b_magnitude - a_magnitude),
            0,
        )
    }
}
