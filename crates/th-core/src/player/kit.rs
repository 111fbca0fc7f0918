//! Shop items and the hunter's kit

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Every item a shop can sell
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Item {
    Water,
    Rope,
    Machete,
    Boots,
    Horse,
    Boat,
    Shovel,
    /// Only stocked in samurai mode, and free
    Sword,
}

impl Item {
    /// Base price before any markdown
    pub const fn base_cost(self) -> i32 {
        match self {
            Item::Water => 2,
            Item::Rope => 4,
            Item::Machete => 6,
            Item::Boots => 8,
            Item::Horse => 12,
            Item::Boat => 20,
            Item::Shovel => 8,
            Item::Sword => 0,
        }
    }

    /// Hidden from ordinary shops
    pub const fn is_secret(self) -> bool {
        matches!(self, Item::Sword)
    }

    /// Parse an item name typed by the player, ignoring case and padding
    pub fn parse(name: &str) -> Option<Self> {
        name.trim().parse().ok()
    }

    /// Name with a leading capital, as shown on the shop's price list
    pub fn title(self) -> String {
        let name = self.to_string();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => name,
        }
    }

    /// The kit bit for this item
    pub const fn kit_flag(self) -> Kit {
        match self {
            Item::Water => Kit::WATER,
            Item::Rope => Kit::ROPE,
            Item::Machete => Kit::MACHETE,
            Item::Boots => Kit::BOOTS,
            Item::Horse => Kit::HORSE,
            Item::Boat => Kit::BOAT,
            Item::Shovel => Kit::SHOVEL,
            Item::Sword => Kit::SWORD,
        }
    }
}

bitflags! {
    /// Items the hunter currently owns, at most one of each
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Kit: u8 {
        const WATER = 0x01;
        const ROPE = 0x02;
        const MACHETE = 0x04;
        const BOOTS = 0x08;
        const HORSE = 0x10;
        const BOAT = 0x20;
        const SHOVEL = 0x40;
        const SWORD = 0x80;
    }
}

// Manual serde impl for Kit
impl Serialize for Kit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Kit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Kit::from_bits_truncate(bits))
    }
}

impl Kit {
    /// Everything an ordinary shop sells
    pub fn standard() -> Self {
        Item::iter()
            .filter(|item| !item.is_secret())
            .fold(Kit::empty(), |kit, item| kit | item.kit_flag())
    }

    pub fn has_item(&self, item: Item) -> bool {
        self.contains(item.kit_flag())
    }

    /// Add an item; returns false if it was already owned
    pub fn add_item(&mut self, item: Item) -> bool {
        if self.has_item(item) {
            return false;
        }
        self.insert(item.kit_flag());
        true
    }

    /// Remove an item; returns false if it was not owned
    pub fn take_item(&mut self, item: Item) -> bool {
        if !self.has_item(item) {
            return false;
        }
        self.remove(item.kit_flag());
        true
    }

    /// Owned items in shop order
    pub fn items(&self) -> impl Iterator<Item = Item> + use<> {
        let kit = *self;
        Item::iter().filter(move |item| kit.has_item(*item))
    }

    /// Human readable listing, e.g. "water, rope"
    pub fn describe(&self) -> String {
        if self.is_empty() {
            return "nothing".to_string();
        }
        self.items()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_parse_case_insensitive() {
        assert_eq!(Item::parse("water"), Some(Item::Water));
        assert_eq!(Item::parse("MaChEtE"), Some(Item::Machete));
        assert_eq!(Item::parse("  boots\n"), Some(Item::Boots));
        assert_eq!(Item::parse("sword"), Some(Item::Sword));
        assert_eq!(Item::parse("lasso"), None);
        assert_eq!(Item::parse(""), None);
    }

    #[test]
    fn test_item_display_and_title() {
        assert_eq!(Item::Horse.to_string(), "horse");
        assert_eq!(Item::Horse.title(), "Horse");
    }

    #[test]
    fn test_price_table() {
        assert_eq!(Item::Water.base_cost(), 2);
        assert_eq!(Item::Rope.base_cost(), 4);
        assert_eq!(Item::Machete.base_cost(), 6);
        assert_eq!(Item::Boots.base_cost(), 8);
        assert_eq!(Item::Horse.base_cost(), 12);
        assert_eq!(Item::Boat.base_cost(), 20);
        assert_eq!(Item::Shovel.base_cost(), 8);
        assert_eq!(Item::Sword.base_cost(), 0);
    }

    #[test]
    fn test_only_sword_is_secret() {
        let secret: Vec<_> = Item::iter().filter(|i| i.is_secret()).collect();
        assert_eq!(secret, vec![Item::Sword]);
    }

    #[test]
    fn test_kit_flags_are_distinct() {
        let all = Item::iter().fold(Kit::empty(), |kit, item| {
            assert!(!kit.intersects(item.kit_flag()));
            kit | item.kit_flag()
        });
        assert_eq!(all, Kit::all());
    }

    #[test]
    fn test_kit_add_take() {
        let mut kit = Kit::default();
        assert!(kit.add_item(Item::Rope));
        assert!(!kit.add_item(Item::Rope));
        assert!(kit.has_item(Item::Rope));

        assert!(kit.take_item(Item::Rope));
        assert!(!kit.take_item(Item::Rope));
        assert!(kit.is_empty());
    }

    #[test]
    fn test_kit_describe() {
        let mut kit = Kit::default();
        assert_eq!(kit.describe(), "nothing");
        kit.add_item(Item::Shovel);
        kit.add_item(Item::Water);
        assert_eq!(kit.describe(), "water, shovel");
    }

    #[test]
    fn test_standard_kit() {
        let kit = Kit::standard();
        assert_eq!(kit.items().count(), 7);
        assert!(!kit.has_item(Item::Sword));
    }
}
