use crate::UnscaledDecimal128;

use core::cmp::Ordering;

pub(crate) fn cmp_impl(a: &UnscaledDecimal128, b: &UnscaledDecimal128) -> Ordering {
    // Canonical zero is sign-positive, so a sign mismatch settles it.
    if a.is_negative() != b.is_negative() {
        return if a.is_negative() {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
    let ordering = a.magnitude().cmp(&b.magnitude());
    if a.is_negative() {
        ordering.reverse()
    } else {
        ordering
    }
}
