use crate::constants::MAX_UNSCALED;
use crate::UnscaledDecimal128;

use proptest::arbitrary::{Arbitrary, StrategyFor};
use proptest::prelude::*;
use proptest::strategy::Map;

impl Arbitrary for UnscaledDecimal128 {
    type Parameters = ();
    type Strategy = Map<StrategyFor<(u128, bool)>, fn((u128, bool)) -> Self>;

    fn arbitrary_with(_parameters: Self::Parameters) -> Self::Strategy {
        // any magnitude within the decimal range, either sign
        any::<(u128, bool)>().prop_map(|(magnitude, negative)| {
            UnscaledDecimal128::from_sign_magnitude(negative, magnitude % (MAX_UNSCALED + 1))
        })
    }
}
