use proptest::prelude::*;


pub(crate) fn keyword_strategy() -> impl Strategy<Value = String> {
    "[aA][lL]"
}

pub(crate) fn mode_letter_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["", "[cC]", "[gG]"]
}

pub(crate) fn target_strategy() -> impl Strategy<Value = String> {
    prop::option::of(1u16..=6).prop_map(|target| match target {
        Some(target) => target.to_string(),
        None => String::new()
    })
}

pub(crate) fn damage_strategy() -> impl Strategy<Value = String> {
    (prop_oneof!["x", "X", "\\*"], prop::option::of(0u16..=100))
        .prop_map(|(times, damage)| match damage {
            Some(damage) => format!("{times}{damage}"),
            None => String::new()
        })
}

pub(crate) fn check_command_strategy() -> impl Strategy<Value = String> {
    (
        1u16..=30,
        keyword_strategy(),
        mode_letter_strategy(),
        target_strategy(),
        damage_strategy()
    ).prop_map(|(dice_count, keyword, mode, target, damage)| {
        format!("{dice_count}{keyword}{mode}{target}{damage}")
    })
}
