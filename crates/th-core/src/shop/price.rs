//! Price book: buy prices, sell-back prices and the stocked item list

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::player::Item;

/// A stocked item's price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub cost: i32,
    /// Given away on purpose rather than merely cheap
    pub free: bool,
}

/// Prices for one shop visit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBook {
    markdown: f64,
    secret_mode: bool,
}

impl PriceBook {
    /// `markdown` is clamped to [0, 1] so a sell price can never exceed
    /// the buy price.
    pub fn new(markdown: f64, secret_mode: bool) -> Self {
        Self {
            markdown: markdown.clamp(0.0, 1.0),
            secret_mode,
        }
    }

    pub fn markdown(&self) -> f64 {
        self.markdown
    }

    pub fn secret_mode(&self) -> bool {
        self.secret_mode
    }

    /// Whether this shop sells `item` at all
    pub fn stocks(&self, item: Item) -> bool {
        !item.is_secret() || self.secret_mode
    }

    /// Buy price, or `None` if the item isn't stocked here
    pub fn price_of(&self, item: Item) -> Option<Price> {
        if !self.stocks(item) {
            return None;
        }
        Some(Price {
            cost: item.base_cost(),
            free: item.is_secret(),
        })
    }

    /// Buy price, 0 when not stocked
    pub fn cost_of(&self, item: Item) -> i32 {
        self.price_of(item).map_or(0, |price| price.cost)
    }

    /// What the shop pays for `item`: `floor(cost * markdown)`
    pub fn buy_back_cost(&self, item: Item) -> i32 {
        (self.cost_of(item) as f64 * self.markdown).floor() as i32
    }

    /// Buy price for a name typed by the player
    pub fn quote_buy(&self, name: &str) -> Option<(Item, Price)> {
        let item = Item::parse(name)?;
        self.price_of(item).map(|price| (item, price))
    }

    /// Sell-back price for a name typed by the player
    pub fn quote_sell(&self, name: &str) -> Option<(Item, i32)> {
        let item = Item::parse(name)?;
        self.stocks(item)
            .then(|| (item, self.buy_back_cost(item)))
    }

    /// One "Item: N gold" line per stocked item
    pub fn listing(&self) -> String {
        Item::iter()
            .filter(|item| self.stocks(*item))
            .map(|item| format!("{}: {} gold\n", item.title(), item.base_cost()))
            .collect()
    }
}
