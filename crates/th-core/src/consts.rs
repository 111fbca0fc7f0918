//! Game constants

/// Number of treasure slots a hunter carries; filling the last one wins
pub const TREASURE_SLOTS: usize = 3;

/// Default sell-back multiplier (normal, samurai and test modes)
pub const DEFAULT_MARKDOWN: f64 = 0.25;
/// Default town toughness (normal, samurai and test modes)
pub const DEFAULT_TOUGHNESS: f64 = 0.4;

pub const EASY_MARKDOWN: f64 = 0.0;
pub const EASY_TOUGHNESS: f64 = 0.2;

pub const HARD_MARKDOWN: f64 = 0.5;
pub const HARD_TOUGHNESS: f64 = 0.75;

/// Starting gold in every mode except easy and test
pub const STARTING_GOLD: i32 = 10;
pub const EASY_STARTING_GOLD: i32 = 20;
pub const TEST_STARTING_GOLD: i32 = 100;

/// Chance of finding trouble in a tough town; brawls there are won with
/// the complementary chance
pub const TOUGH_TROUBLE_CHANCE: f64 = 0.66;
/// Chance of finding trouble in a quiet town
pub const QUIET_TROUBLE_CHANCE: f64 = 0.33;

/// Largest purse fought over in a brawl
pub const MAX_BRAWL_GOLD: u32 = 10;
/// Largest amount dug up in one go
pub const MAX_DIG_GOLD: u32 = 20;

/// Percent chance that digging turns up gold
pub const DIG_SUCCESS_PERCENT: u32 = 50;
/// Percent chance that a kit item breaks while crossing terrain
pub const ITEM_BREAK_PERCENT: u32 = 50;
