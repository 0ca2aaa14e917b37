use crate::constants::MAX_UNSCALED;
use crate::error::Error;
use crate::UnscaledDecimal128;

/// Unchecked left shift of a 128-bit value viewed as a raw bit pattern.
/// Bits shifted past position 127 are discarded; the sign bit is not given
/// any special treatment. `shift` must be below 128.
pub fn shift_left_128(low: u64, high: u64, shift: u32) -> (u64, u64) {
    debug_assert!(shift < 128);
    let shifted = (((high as u128) << 64) | low as u128) << shift;
    (shifted as u64, (shifted >> 64) as u64)
}

/// Multiplies the value in place by 2^shift, preserving sign. Fails with
/// overflow when the result's magnitude would exceed 10^38 - 1, leaving the
/// value untouched.
pub(crate) fn shift_left_destructive_impl(
    value: &mut UnscaledDecimal128,
    shift: u32,
) -> Result<(), Error> {
    let magnitude = value.magnitude();
    if magnitude == 0 || shift == 0 {
        return Ok(());
    }
    if shift >= magnitude.leading_zeros() {
        return Err(Error::Overflow);
    }
    let shifted = magnitude << shift;
    if shifted > MAX_UNSCALED {
        return Err(Error::Overflow);
    }
    *value = UnscaledDecimal128::from_sign_magnitude(value.is_negative(), shifted);
    Ok(())
}

/// Shifts the magnitude right, preserving sign. With `round_up` set, the
/// result is incremented when any discarded bit was nonzero (sticky-bit
/// rounding on the binary fraction, not decimal half-up).
pub(crate) fn shift_right_impl(
    value: &UnscaledDecimal128,
    shift: u32,
    round_up: bool,
) -> UnscaledDecimal128 {
    if shift == 0 {
        return *value;
    }
    let magnitude = value.magnitude();
    let (mut shifted, lost_bits) = if shift >= 127 {
        (0, magnitude != 0)
    } else {
        (magnitude >> shift, magnitude & ((1u128 << shift) - 1) != 0)
    };
    if round_up && lost_bits {
        shifted += 1;
    }
    UnscaledDecimal128::from_sign_magnitude(value.is_negative(), shifted)
}

/// Shifts a little-endian array of 32-bit limbs left in place. Only the
/// first `length` limbs participate; the caller guarantees the buffer is
/// long enough that no significant bit is pushed past it.
pub fn shift_left_multi_precision(number: &mut [u32], length: usize, shifts: u32) {
    debug_assert!((shifts as usize) < length * 32);
    if shifts == 0 {
        return;
    }
    let limb_shifts = (shifts / 32) as usize;
    let bit_shifts = shifts % 32;
    for i in (limb_shifts..length).rev() {
        let mut limb = number[i - limb_shifts] << bit_shifts;
        if bit_shifts > 0 && i > limb_shifts {
            limb |= number[i - limb_shifts - 1] >> (32 - bit_shifts);
        }
        number[i] = limb;
    }
    for limb in &mut number[..limb_shifts] {
        *limb = 0;
    }
}

/// Mirror of [`shift_left_multi_precision`]: shifts right in place, zero
/// filling from the top. Whole-limb moves handle shifts of 32 and beyond;
/// the residual bit shift is the low five bits of `shifts`.
pub fn shift_right_multi_precision(number: &mut [u32], length: usize, shifts: u32) {
    debug_assert!((shifts as usize) < length * 32);
    if shifts == 0 {
        return;
    }
    let limb_shifts = (shifts / 32) as usize;
    let bit_shifts = shifts % 32;
    for i in 0..length - limb_shifts {
        let mut limb = number[i + limb_shifts] >> bit_shifts;
        if bit_shifts > 0 && i + limb_shifts + 1 < length {
            limb |= number[i + limb_shifts + 1] << (32 - bit_shifts);
        }
        number[i] = limb;
    }
    for limb in &mut number[length - limb_shifts..length] {
        *limb = 0;
    }
}
