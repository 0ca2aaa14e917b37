use crate::constants::{MAX_PRECISION, NUM_LIMBS, POWERS_OF_TEN, PRODUCT_LIMBS};
use crate::error::Error;
use crate::ops::array::{is_all_zero, significant_limbs};
use crate::ops::mul::multiply_256_destructive;
use crate::ops::shift::{shift_left_multi_precision, shift_right_multi_precision};
use crate::UnscaledDecimal128;

// One guard limb beyond the 256-bit product so the normalization shift of
// Algorithm D always has room for the dividend's top bits.
const DIVIDEND_LIMBS: usize = PRODUCT_LIMBS + 1;

const BASE: u64 = 1 << 32;
const LOW_32_MASK: u64 = 0xFFFF_FFFF;

/// Divides `dividend * 10^dividend_rescale` by `divisor * 10^divisor_rescale`,
/// producing quotient and remainder over base-2^32 limbs.
pub(crate) fn divide_impl(
    dividend: &UnscaledDecimal128,
    dividend_rescale: u32,
    divisor: &UnscaledDecimal128,
    divisor_rescale: u32,
) -> Result<(UnscaledDecimal128, UnscaledDecimal128), Error> {
    assert!(
        dividend_rescale <= MAX_PRECISION as u32 && divisor_rescale <= MAX_PRECISION as u32,
        "rescale factor exceeds the maximum precision of {MAX_PRECISION}"
    );
    let quotient_negative = dividend.is_negative() ^ divisor.is_negative();
    let remainder_negative = dividend.is_negative();

    let mut remainder_limbs = [0u32; DIVIDEND_LIMBS];
    remainder_limbs[..NUM_LIMBS].copy_from_slice(&dividend.magnitude_limbs());
    if dividend_rescale > 0 {
        multiply_256_destructive(
            &mut remainder_limbs,
            POWERS_OF_TEN[dividend_rescale as usize],
        );
    }

    let mut divisor_limbs = [0u32; PRODUCT_LIMBS];
    divisor_limbs[..NUM_LIMBS].copy_from_slice(&divisor.magnitude_limbs());
    if divisor_rescale > 0 {
        multiply_256_destructive(&mut divisor_limbs, POWERS_OF_TEN[divisor_rescale as usize]);
    }

    let divisor_length = significant_limbs(&divisor_limbs);
    if divisor_length == 0 {
        return Err(Error::DivisionByZero);
    }
    let dividend_length = significant_limbs(&remainder_limbs);

    let mut quotient_limbs = [0u32; PRODUCT_LIMBS];
    if dividend_length >= divisor_length {
        if divisor_length == 1 {
            divide_by_single_limb(
                &mut remainder_limbs,
                dividend_length,
                divisor_limbs[0],
                &mut quotient_limbs,
            );
        } else {
            divide_knuth(
                &mut remainder_limbs,
                dividend_length,
                &mut divisor_limbs,
                divisor_length,
                &mut quotient_limbs,
            );
        }
    }
    // A dividend shorter than the divisor leaves the quotient at zero and
    // the rescaled dividend in place as the remainder.

    let quotient = pack(quotient_negative, &quotient_limbs)?;
    let remainder = pack(remainder_negative, &remainder_limbs)?;
    Ok((quotient, remainder))
}

// Single-pass long division with a 64-bit accumulator; the remainder ends
// up in `remainder_limbs[0]`.
fn divide_by_single_limb(
    remainder_limbs: &mut [u32],
    dividend_length: usize,
    divisor: u32,
    quotient_limbs: &mut [u32],
) {
    let divisor = divisor as u64;
    let mut remainder = 0u64;
    for i in (0..dividend_length).rev() {
        let accumulator = (remainder << 32) | remainder_limbs[i] as u64;
        quotient_limbs[i] = (accumulator / divisor) as u32;
        remainder = accumulator % divisor;
    }
    for limb in &mut remainder_limbs[..dividend_length] {
        *limb = 0;
    }
    remainder_limbs[0] = remainder as u32;
}

// Knuth's Algorithm D over base-2^32 limbs. On entry `u` holds the dividend
// with one spare limb above `dividend_length`; on exit it holds the
// remainder and `quotient_limbs` the quotient. `v` is clobbered by the
// normalization shift.
fn divide_knuth(
    u: &mut [u32],
    dividend_length: usize,
    v: &mut [u32],
    divisor_length: usize,
    quotient_limbs: &mut [u32],
) {
    let n = divisor_length;
    let m = dividend_length - n;

    // D1: scale both operands so the divisor's top limb has its high bit
    // set, which keeps every qhat estimate within two of the true digit.
    let shift = v[n - 1].leading_zeros();
    if shift > 0 {
        shift_left_multi_precision(u, dividend_length + 1, shift);
        shift_left_multi_precision(v, n, shift);
    }

    for j in (0..=m).rev() {
        // D3: trial digit from the top two dividend limbs, then correct it
        // against the next divisor limb. qhat stays within u32 range when
        // the loop exits.
        let numerator = ((u[j + n] as u64) << 32) | u[j + n - 1] as u64;
        let v_top = v[n - 1] as u64;
        let mut qhat = numerator / v_top;
        let mut rhat = numerator - qhat * v_top;
        while qhat >= BASE
            || qhat * v[n - 2] as u64 > (rhat << 32) | u[j + n - 2] as u64
        {
            qhat -= 1;
            rhat += v_top;
            if rhat >= BASE {
                break;
            }
        }

        // D4-D6: multiply-and-subtract, and if qhat was still one too
        // large, add the divisor back once.
        if multiply_and_subtract(u, j, &v[..n], qhat) {
            qhat -= 1;
            add_back(u, j, &v[..n]);
        }
        quotient_limbs[j] = qhat as u32;
    }

    // D8: undo the normalization to recover the remainder.
    if shift > 0 {
        shift_right_multi_precision(u, dividend_length + 1, shift);
    }
}

// Subtracts `qhat * v` from the dividend window starting at `j`, returning
// true when the subtraction borrows out of the window, i.e. qhat was too
// large.
fn multiply_and_subtract(u: &mut [u32], j: usize, v: &[u32], qhat: u64) -> bool {
    let n = v.len();
    let mut borrow = 0i64;
    for i in 0..n {
        let product = qhat * v[i] as u64;
        let difference = u[i + j] as i64 - borrow - (product & LOW_32_MASK) as i64;
        u[i + j] = difference as u32;
        borrow = (product >> 32) as i64 - (difference >> 32);
    }
    let difference = u[j + n] as i64 - borrow;
    u[j + n] = difference as u32;
    difference < 0
}

fn add_back(u: &mut [u32], j: usize, v: &[u32]) {
    let n = v.len();
    let mut carry = 0u64;
    for i in 0..n {
        let sum = u[i + j] as u64 + v[i] as u64 + carry;
        u[i + j] = sum as u32;
        carry = sum >> 32;
    }
    // The final carry cancels the borrow left in the top limb.
    u[j + n] = (u[j + n] as u64 + carry) as u32;
}

fn pack(negative: bool, limbs: &[u32]) -> Result<UnscaledDecimal128, Error> {
    if !is_all_zero(&limbs[NUM_LIMBS..]) {
        return Err(Error::Overflow);
    }
    let magnitude = limbs[0] as u128
        | (limbs[1] as u128) << 32
        | (limbs[2] as u128) << 64
        | (limbs[3] as u128) << 96;
    UnscaledDecimal128::try_from_sign_magnitude(negative, magnitude)
}
