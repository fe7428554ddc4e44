use proptest::prelude::*;
use crate::check::{CheckRequest, CriticalMode};


pub(crate) fn critical_mode_strategy() -> impl Strategy<Value = CriticalMode> {
    prop_oneof![
        Just(CriticalMode::Standard),
        Just(CriticalMode::Gunslinger),
        Just(CriticalMode::NoTriumph),
    ]
}

pub(crate) fn check_strategy() -> impl Strategy<Value = CheckRequest> {
    (1..=30u16, 1..=6u16, critical_mode_strategy(), prop_oneof![Just(0u16), 1..=100u16])
        .prop_map(|(dice_count, target, mode, damage)| {
            CheckRequest::builder(dice_count)
                .target(target)
                .mode(mode)
                .damage(damage)
                .build()
                .unwrap()
        })
}
