use crate::constants::{NUM_LIMBS, PRODUCT_LIMBS};
use crate::error::Error;
use crate::ops::array::is_all_zero;
use crate::UnscaledDecimal128;

/// Computes `left[0..4] * right` as an unsigned 256-bit product across
/// `left[0..8]`, schoolbook style with a 64-bit accumulator. `left` must
/// hold at least eight limbs; limbs beyond the product are left untouched.
///
/// This is the widening step behind [`multiply`](UnscaledDecimal128::multiply)
/// and behind the power-of-ten pre-scaling in
/// [`divide`](UnscaledDecimal128::divide), where intermediate products
/// legitimately exceed 128 bits.
pub fn multiply_256_destructive(left: &mut [u32], right: u128) {
    debug_assert!(left.len() >= PRODUCT_LIMBS);
    let left_limbs = [left[0], left[1], left[2], left[3]];
    let right_limbs = [
        right as u32,
        (right >> 32) as u32,
        (right >> 64) as u32,
        (right >> 96) as u32,
    ];

    let mut product = [0u32; PRODUCT_LIMBS];
    for (i, &left_limb) in left_limbs.iter().enumerate() {
        if left_limb == 0 {
            continue;
        }
        let mut carry = 0u64;
        for (j, &right_limb) in right_limbs.iter().enumerate() {
            let accumulator =
                product[i + j] as u64 + left_limb as u64 * right_limb as u64 + carry;
            product[i + j] = accumulator as u32;
            carry = accumulator >> 32;
        }
        // The slot above this row has not been written yet.
        product[i + NUM_LIMBS] = carry as u32;
    }
    left[..PRODUCT_LIMBS].copy_from_slice(&product);
}

pub(crate) fn mul_impl(
    a: &UnscaledDecimal128,
    b: &UnscaledDecimal128,
) -> Result<UnscaledDecimal128, Error> {
    let negative = a.is_negative() ^ b.is_negative();
    let mut product = [0u32; PRODUCT_LIMBS];
    product[..NUM_LIMBS].copy_from_slice(&a.magnitude_limbs());
    multiply_256_destructive(&mut product, b.magnitude());
    if !is_all_zero(&product[NUM_LIMBS..]) {
        return Err(Error::Overflow);
    }
    let magnitude = product[0] as u128
        | (product[1] as u128) << 32
        | (product[2] as u128) << 64
        | (product[3] as u128) << 96;
    UnscaledDecimal128::try_from_sign_magnitude(negative, magnitude)
}

pub(crate) fn mul_i64_impl(
    a: &UnscaledDecimal128,
    b: i64,
) -> Result<UnscaledDecimal128, Error> {
    let negative = a.is_negative() ^ (b < 0);
    let a_magnitude = a.magnitude();
    let b_magnitude = b.unsigned_abs() as u128;

    // 128 x 64 in two u128 partial products; a carry past bit 127 of the
    // high half means the true product needs more than 128 bits.
    let low = (a_magnitude as u64 as u128) * b_magnitude;
    let high = (a_magnitude >> 64) * b_magnitude + (low >> 64);
    if high >> 64 != 0 {
        return Err(Error::Overflow);
    }
    let magnitude = (high << 64) | (low as u64 as u128);
    UnscaledDecimal128::try_from_sign_magnitude(negative, magnitude)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn schoolbook_rows_accumulate_carries() {
        // (2^128 - 1) * (2^128 - 1) = 2^256 - 2^129 + 1
        let mut limbs = [u32::MAX, u32::MAX, u32::MAX, u32::MAX, 0, 0, 0, 0];
        multiply_256_destructive(&mut limbs, u128::MAX);
        assert_eq!(limbs, [1, 0, 0, 0, u32::MAX - 1, u32::MAX, u32::MAX, u32::MAX]);
    }

    #[test]
    fn short_operand_path_agrees_with_the_full_multiply() {
        let a = UnscaledDecimal128::from(123_456_789_012_345_678);
        for b in [0i64, 1, -1, 42, -981_273_465, i64::MAX, i64::MIN] {
            assert_eq!(
                mul_i64_impl(&a, b),
                mul_impl(&a, &UnscaledDecimal128::from(b))
            );
        }
    }
}
