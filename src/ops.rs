// Pure sign/magnitude wrappers at the boundary, destructive 32-bit limb
// primitives underneath for the multi-precision paths. The division kernel
// is Knuth's Algorithm D; see also the divmnu64 reference code from
// Hacker's Delight for the qhat correction structure.

pub(crate) mod array;

mod add;
mod cmp;
mod div;
mod mul;
mod shift;

pub(crate) use add::{add_impl, add_with_overflow_impl};
pub(crate) use cmp::cmp_impl;
pub(crate) use div::divide_impl;
pub(crate) use mul::{mul_i64_impl, mul_impl};
pub(crate) use shift::{shift_left_destructive_impl, shift_right_impl};

pub use mul::multiply_256_destructive;
pub use shift::{shift_left_128, shift_left_multi_precision, shift_right_multi_precision};
