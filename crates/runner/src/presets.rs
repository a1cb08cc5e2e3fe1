//! Built-in strategies selectable by name

use rust_decimal_macros::dec;

use crate::config::{LegConfig, StrategyConfig};

/// Names accepted by [`preset`]
pub const PRESET_NAMES: &[&str] = &[
    "straddle",
    "strangle",
    "bull_call_spread",
    "bear_put_spread",
    "butterfly",
    "iron_condor",
];

/// Look up a built-in strategy (names are case-insensitive, `-` and `_` interchangeable)
pub fn preset(name: &str) -> Option<StrategyConfig> {
    let key = name.trim().to_lowercase().replace('-', "_");
    let config = match key.as_str() {
        "straddle" => StrategyConfig::new("Long straddle")
            .with_leg(LegConfig::new("call", dec!(100), dec!(5), "L"))
            .with_leg(LegConfig::new("put", dec!(100), dec!(5), "L")),
        "strangle" => StrategyConfig::new("Long strangle")
            .with_leg(LegConfig::new("put", dec!(90), dec!(3), "L"))
            .with_leg(LegConfig::new("call", dec!(110), dec!(3), "L")),
        "bull_call_spread" => StrategyConfig::new("Bull call spread")
            .with_leg(LegConfig::new("call", dec!(90), dec!(12), "L"))
            .with_leg(LegConfig::new("call", dec!(110), dec!(4), "S")),
        "bear_put_spread" => StrategyConfig::new("Bear put spread")
            .with_leg(LegConfig::new("put", dec!(110), dec!(12), "L"))
            .with_leg(LegConfig::new("put", dec!(90), dec!(4), "S")),
        "butterfly" => StrategyConfig::new("Long call butterfly")
            .with_leg(LegConfig::new("call", dec!(90), dec!(12), "L"))
            .with_leg(LegConfig::new("call", dec!(100), dec!(6), "S").with_quantity(2))
            .with_leg(LegConfig::new("call", dec!(110), dec!(2), "L")),
        "iron_condor" => StrategyConfig::new("Iron condor")
            .with_leg(LegConfig::new("put", dec!(80), dec!(1), "L"))
            .with_leg(LegConfig::new("put", dec!(90), dec!(3), "S"))
            .with_leg(LegConfig::new("call", dec!(110), dec!(3), "S"))
            .with_leg(LegConfig::new("call", dec!(120), dec!(1), "L")),
        _ => return None,
    };
    Some(config)
}
