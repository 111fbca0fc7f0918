//! Shop system
//!
//! Every town has the same shop: a fixed price list, a sell-back markdown
//! chosen by the difficulty mode, and (in samurai mode) a free sword.
//! The hunter is passed to each transaction; the shop keeps no customer.

mod price;

pub use price::{Price, PriceBook};

use strum::EnumString;
use tracing::debug;

use crate::errors::GameError;
use crate::io::{InputSource, OutputWindow, TextColor};
use crate::player::{Hunter, Item};

/// Whether the hunter came in to buy or to sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ShopMode {
    #[strum(serialize = "b")]
    Buy,
    #[strum(serialize = "s")]
    Sell,
}

/// Result of a single trade attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeOutcome {
    Bought { item: Item, cost: i32 },
    /// Handed over for nothing to a hunter carrying the sword
    Freebie { item: Item },
    /// Can't afford it, or already owns one
    BuyRefused { item: Item },
    /// Unknown item, or the sword outside samurai mode
    NotStocked,
    Sold { item: Item, price: i32 },
    /// Unknown item, or worth nothing after markdown
    NotWanted,
    /// Tried to sell something not in the kit
    NotOwned { item: Item },
    /// Player said no at the price quote
    Declined,
}

impl TradeOutcome {
    /// Whether gold or kit changed hands
    pub fn is_trade(&self) -> bool {
        matches!(
            self,
            TradeOutcome::Bought { .. } | TradeOutcome::Freebie { .. } | TradeOutcome::Sold { .. }
        )
    }
}

/// A town's shop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shop {
    prices: PriceBook,
}

impl Shop {
    pub fn new(markdown: f64, secret_mode: bool) -> Self {
        Self {
            prices: PriceBook::new(markdown, secret_mode),
        }
    }

    pub fn prices(&self) -> &PriceBook {
        &self.prices
    }

    /// The shop's wares, one per line
    pub fn inventory(&self) -> String {
        self.prices.listing()
    }

    /// Walk the hunter through one purchase or sale.
    ///
    /// Returns `Ok(None)` if input ran out before the hunter chose.
    pub fn enter(
        &self,
        hunter: &mut Hunter,
        mode: ShopMode,
        input: &mut impl InputSource,
        window: &mut impl OutputWindow,
    ) -> Result<Option<TradeOutcome>, GameError> {
        match mode {
            ShopMode::Buy => self.enter_to_buy(hunter, input, window),
            ShopMode::Sell => self.enter_to_sell(hunter, input, window),
        }
    }

    fn enter_to_buy(
        &self,
        hunter: &mut Hunter,
        input: &mut impl InputSource,
        window: &mut impl OutputWindow,
    ) -> Result<Option<TradeOutcome>, GameError> {
        window.add_text(
            "\n\nWelcome to the shop! We have the finest wares in town.",
            TextColor::Black,
        );
        window.add_text("Currently we have the following items:", TextColor::Black);
        window.add_text(&self.inventory(), TextColor::Black);
        window.add_text("What're you lookin' to buy? ", TextColor::Black);

        let Some(name) = input.read_line()? else {
            return Ok(None);
        };
        let Some((_, price)) = self.prices.quote_buy(&name) else {
            return Ok(Some(self.buy_item(hunter, &name, window)));
        };

        window.add_text(
            &format!("It'll cost you {} gold. Buy it (y/n)? ", price.cost),
            TextColor::Black,
        );
        match input.read_line()? {
            None => Ok(None),
            Some(answer) if is_yes(&answer) => Ok(Some(self.buy_item(hunter, &name, window))),
            Some(_) => Ok(Some(TradeOutcome::Declined)),
        }
    }

    fn enter_to_sell(
        &self,
        hunter: &mut Hunter,
        input: &mut impl InputSource,
        window: &mut impl OutputWindow,
    ) -> Result<Option<TradeOutcome>, GameError> {
        window.add_text("What're you lookin' to sell? ", TextColor::Black);
        window.add_text(
            &format!("You currently have the following items: {}", hunter.inventory()),
            TextColor::Black,
        );

        let Some(name) = input.read_line()? else {
            return Ok(None);
        };
        let price = match self.prices.quote_sell(&name) {
            Some((_, price)) if price > 0 => price,
            _ => return Ok(Some(self.sell_item(hunter, &name, window))),
        };

        window.add_text(
            &format!("It'll get you {} gold. Sell it (y/n)? ", price),
            TextColor::Black,
        );
        match input.read_line()? {
            None => Ok(None),
            Some(answer) if is_yes(&answer) => Ok(Some(self.sell_item(hunter, &name, window))),
            Some(_) => Ok(Some(TradeOutcome::Declined)),
        }
    }

    /// Try to sell `name` to the hunter. Prints exactly one line.
    pub fn buy_item(
        &self,
        hunter: &mut Hunter,
        name: &str,
        window: &mut impl OutputWindow,
    ) -> TradeOutcome {
        let Some((item, price)) = self.prices.quote_buy(name) else {
            window.add_text("We ain't got none of those.", TextColor::Red);
            debug!(name = name.trim(), "buy refused: not stocked");
            return TradeOutcome::NotStocked;
        };

        let outcome = if hunter.buy_item(item, price.cost) {
            window.add_text(
                &format!("Ye' got yerself a {}. Come again soon.", item),
                TextColor::Orange,
            );
            TradeOutcome::Bought {
                item,
                cost: price.cost,
            }
        } else if hunter.has_item_in_kit(Item::Sword) {
            hunter.grant_item(item);
            window.add_text(
                "Just take anything ye want! I don't want any trouble...",
                TextColor::Black,
            );
            TradeOutcome::Freebie { item }
        } else {
            window.add_text(
                "Hmm, either you don't have enough gold or you've already got one of those!",
                TextColor::Red,
            );
            TradeOutcome::BuyRefused { item }
        };

        debug!(?outcome, gold = hunter.gold(), "buy");
        outcome
    }

    /// Try to buy `name` back from the hunter. Prints exactly one line.
    pub fn sell_item(
        &self,
        hunter: &mut Hunter,
        name: &str,
        window: &mut impl OutputWindow,
    ) -> TradeOutcome {
        let (item, price) = match self.prices.quote_sell(name) {
            Some((item, price)) if price > 0 => (item, price),
            _ => {
                window.add_text("We don't want none of those.", TextColor::Red);
                debug!(name = name.trim(), "sell refused: not wanted");
                return TradeOutcome::NotWanted;
            }
        };

        let outcome = if hunter.sell_item(item, price) {
            window.add_text("Pleasure doin' business with you.", TextColor::Black);
            TradeOutcome::Sold { item, price }
        } else {
            window.add_text("Stop stringin' me along!", TextColor::Red);
            TradeOutcome::NotOwned { item }
        };

        debug!(?outcome, gold = hunter.gold(), "sell");
        outcome
    }
}

fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
