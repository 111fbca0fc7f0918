//! The hunter: name, purse, kit and treasure slots

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::TREASURE_SLOTS;
use crate::mode::Mode;

use super::kit::{Item, Kit};
use super::treasure::{Treasure, TreasureOutcome};

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hunter {
    name: String,
    /// May go negative, which loses the game
    gold: i32,
    kit: Kit,
    treasures: [Option<Treasure>; TREASURE_SLOTS],
    mode: Mode,
}

impl Hunter {
    /// Create a hunter with the starting purse for `mode`.
    ///
    /// Test mode starts with every ordinary shop item already in the kit.
    pub fn new(name: impl Into<String>, mode: Mode) -> Self {
        let kit = if mode == Mode::Test {
            Kit::standard()
        } else {
            Kit::empty()
        };
        Self::with_gold(name, mode.config().starting_gold, mode).with_kit(kit)
    }

    /// Create a hunter with an explicit amount of gold and an empty kit
    pub fn with_gold(name: impl Into<String>, gold: i32, mode: Mode) -> Self {
        Self {
            name: name.into(),
            gold,
            kit: Kit::empty(),
            treasures: [None; TREASURE_SLOTS],
            mode,
        }
    }

    /// Replace the kit
    pub fn with_kit(mut self, kit: Kit) -> Self {
        self.kit = kit;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn kit(&self) -> Kit {
        self.kit
    }

    pub fn treasures(&self) -> &[Option<Treasure>; TREASURE_SLOTS] {
        &self.treasures
    }

    pub fn has_item_in_kit(&self, item: Item) -> bool {
        self.kit.has_item(item)
    }

    /// Owned items as text
    pub fn inventory(&self) -> String {
        self.kit.describe()
    }

    /// Pay `cost` for `item`.
    ///
    /// Fails without touching anything when the hunter can't afford it or
    /// already owns one.
    pub fn buy_item(&mut self, item: Item, cost: i32) -> bool {
        if self.gold < cost || self.kit.has_item(item) {
            return false;
        }
        self.gold -= cost;
        self.kit.add_item(item);
        true
    }

    /// Hand over `item` for `price`. Fails if the item isn't owned.
    pub fn sell_item(&mut self, item: Item, price: i32) -> bool {
        if !self.kit.take_item(item) {
            return false;
        }
        self.gold += price;
        true
    }

    /// Put `item` in the kit at no cost, whether or not it is already there
    pub fn grant_item(&mut self, item: Item) {
        self.kit.add_item(item);
    }

    /// Lose `item`; returns false if it wasn't owned
    pub fn lose_item(&mut self, item: Item) -> bool {
        self.kit.take_item(item)
    }

    /// Adjust gold by `delta`. Never clamped: a negative purse is a loss.
    pub fn change_gold(&mut self, delta: i32) {
        self.gold += delta;
    }

    pub fn has_treasure(&self, treasure: Treasure) -> bool {
        self.treasures.contains(&Some(treasure))
    }

    /// Keep a treasure in the next free slot
    pub fn add_treasure(&mut self, treasure: Treasure) -> TreasureOutcome {
        if !treasure.is_collectible() {
            return TreasureOutcome::Worthless;
        }
        if self.has_treasure(treasure) {
            return TreasureOutcome::Duplicate;
        }
        match self.treasures.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(treasure);
                TreasureOutcome::Collected
            }
            None => TreasureOutcome::Full,
        }
    }

    /// Gold below zero
    pub fn is_bankrupt(&self) -> bool {
        self.gold < 0
    }

    /// The last treasure slot is filled
    pub fn has_all_treasures(&self) -> bool {
        self.treasures[TREASURE_SLOTS - 1].is_some()
    }

    fn describe_treasures(&self) -> String {
        let found: Vec<String> = self
            .treasures
            .iter()
            .flatten()
            .map(|t| format!("a {}", t))
            .collect();
        if found.is_empty() {
            "none".to_string()
        } else {
            found.join(", ")
        }
    }
}

impl fmt::Display for Hunter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has {} gold", self.name, self.gold)?;
        if !self.kit.is_empty() {
            write!(f, " and {}", self.kit.describe())?;
        }
        write!(f, "\nTreasures found: {}", self.describe_treasures())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_purse_per_mode() {
        assert_eq!(Hunter::new("a", Mode::Easy).gold(), 20);
        assert_eq!(Hunter::new("a", Mode::Normal).gold(), 10);
        assert_eq!(Hunter::new("a", Mode::Hard).gold(), 10);
        assert_eq!(Hunter::new("a", Mode::Samurai).gold(), 10);
        assert_eq!(Hunter::new("a", Mode::Test).gold(), 100);
    }

    #[test]
    fn test_test_mode_starts_kitted() {
        let hunter = Hunter::new("tester", Mode::Test);
        assert_eq!(hunter.kit(), Kit::standard());
        assert!(!hunter.has_item_in_kit(Item::Sword));
        assert!(Hunter::new("n", Mode::Normal).kit().is_empty());
    }

    #[test]
    fn test_buy_item() {
        let mut hunter = Hunter::with_gold("h", 5, Mode::Normal);
        assert!(hunter.buy_item(Item::Rope, 4));
        assert_eq!(hunter.gold(), 1);
        assert!(hunter.has_item_in_kit(Item::Rope));

        // Already owned
        hunter.change_gold(10);
        assert!(!hunter.buy_item(Item::Rope, 4));
        assert_eq!(hunter.gold(), 11);

        // Too expensive
        assert!(!hunter.buy_item(Item::Boat, 20));
        assert!(!hunter.has_item_in_kit(Item::Boat));
        assert_eq!(hunter.gold(), 11);
    }

    #[test]
    fn test_buy_with_exact_gold() {
        let mut hunter = Hunter::with_gold("h", 2, Mode::Normal);
        assert!(hunter.buy_item(Item::Water, 2));
        assert_eq!(hunter.gold(), 0);
    }

    #[test]
    fn test_sell_item() {
        let mut hunter = Hunter::with_gold("h", 0, Mode::Normal);
        assert!(!hunter.sell_item(Item::Boots, 2));
        assert_eq!(hunter.gold(), 0);

        hunter.grant_item(Item::Boots);
        assert!(hunter.sell_item(Item::Boots, 2));
        assert_eq!(hunter.gold(), 2);
        assert!(!hunter.has_item_in_kit(Item::Boots));
    }

    #[test]
    fn test_gold_goes_negative() {
        let mut hunter = Hunter::with_gold("h", 3, Mode::Hard);
        hunter.change_gold(-7);
        assert_eq!(hunter.gold(), -4);
        assert!(hunter.is_bankrupt());
    }

    #[test]
    fn test_treasure_slots() {
        let mut hunter = Hunter::with_gold("h", 0, Mode::Normal);
        assert_eq!(hunter.add_treasure(Treasure::Dust), TreasureOutcome::Worthless);
        assert_eq!(hunter.add_treasure(Treasure::Gem), TreasureOutcome::Collected);
        assert_eq!(hunter.add_treasure(Treasure::Gem), TreasureOutcome::Duplicate);
        assert_eq!(hunter.add_treasure(Treasure::Crown), TreasureOutcome::Collected);
        assert!(!hunter.has_all_treasures());
        assert_eq!(hunter.add_treasure(Treasure::Trophy), TreasureOutcome::Collected);
        assert!(hunter.has_all_treasures());
        assert_eq!(
            hunter.treasures(),
            &[Some(Treasure::Gem), Some(Treasure::Crown), Some(Treasure::Trophy)]
        );
    }

    #[test]
    fn test_display() {
        let mut hunter = Hunter::with_gold("Ada", 7, Mode::Normal);
        assert_eq!(hunter.to_string(), "Ada has 7 gold\nTreasures found: none");

        hunter.grant_item(Item::Water);
        hunter.add_treasure(Treasure::Crown);
        assert_eq!(
            hunter.to_string(),
            "Ada has 7 gold and water\nTreasures found: a crown"
        );
    }

    #[test]
    fn test_serde_snapshot() {
        let mut hunter = Hunter::with_gold("Ada", 4, Mode::Samurai);
        hunter.grant_item(Item::Sword);
        hunter.add_treasure(Treasure::Trophy);

        let json = serde_json::to_value(&hunter).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["gold"], 4);
        assert_eq!(json["kit"], Kit::SWORD.bits());
        assert_eq!(json["mode"], "Samurai");

        let back: Hunter = serde_json::from_value(json).unwrap();
        assert_eq!(back, hunter);
    }
}
