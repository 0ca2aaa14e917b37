use crate::constants::MAX_STR_BUFFER_SIZE;
use crate::ops::array::{div_by_u32, is_all_zero};
use crate::UnscaledDecimal128;

use arrayvec::{ArrayString, ArrayVec};

// Renders the signed unscaled integer without allocating: digits are peeled
// off the limbs lowest first, then emitted in reverse behind the sign.
pub(crate) fn to_str_internal(value: &UnscaledDecimal128) -> ArrayString<MAX_STR_BUFFER_SIZE> {
    let mut digits = ArrayVec::<u8, MAX_STR_BUFFER_SIZE>::new();
    let mut working = value.magnitude_limbs();
    while !is_all_zero(&working) {
        let remainder = div_by_u32(&mut working, 10u32);
        digits.push(b'0' + remainder as u8);
    }

    let mut rep = ArrayString::new();
    if value.is_negative() {
        rep.push('-');
    }
    if digits.is_empty() {
        rep.push('0');
    }
    for digit in digits.iter().rev() {
        rep.push(char::from(*digit));
    }
    rep
}
