//! Towns: terrain, brawls, digging and hidden treasure
//!
//! A new town is built every time the hunter moves on. Each town hides one
//! treasure and lets the hunter search for it and dig for gold once.

mod terrain;

pub use terrain::Terrain;

use std::fmt;

use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::consts::*;
use crate::errors::GameError;
use crate::io::{InputSource, OutputWindow};
use crate::mode::ModeConfig;
use crate::player::{Hunter, Item, Treasure, TreasureOutcome};
use crate::rng::GameRng;
use crate::shop::{Shop, ShopMode, TradeOutcome};

/// The town the hunter is currently in
#[derive(Debug, Clone)]
pub struct Town {
    shop: Shop,
    terrain: Terrain,
    tough: bool,
    treasure: Treasure,
    kit_breaks: bool,
    searched: bool,
    dug: bool,
    news: String,
}

impl Town {
    /// Build a random town around `shop`
    pub fn new(shop: Shop, config: &ModeConfig, rng: &mut GameRng) -> Self {
        let terrains: Vec<Terrain> = Terrain::iter().collect();
        let treasures: Vec<Treasure> = Treasure::iter().collect();
        let terrain = rng.choose(&terrains).copied().unwrap_or(Terrain::Plains);
        let treasure = rng.choose(&treasures).copied().unwrap_or(Treasure::Dust);
        let tough = rng.chance(config.toughness);

        Self::with_layout(shop, terrain, tough, treasure, config.kit_breaks)
    }

    /// Build a town with everything fixed up front
    pub fn with_layout(
        shop: Shop,
        terrain: Terrain,
        tough: bool,
        treasure: Treasure,
        kit_breaks: bool,
    ) -> Self {
        Self {
            shop,
            terrain,
            tough,
            treasure,
            kit_breaks,
            searched: false,
            dug: false,
            news: String::new(),
        }
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    pub fn is_tough(&self) -> bool {
        self.tough
    }

    /// What happened most recently in town
    pub fn latest_news(&self) -> &str {
        &self.news
    }

    pub fn hunter_arrives(&mut self, hunter: &Hunter) {
        let mood = if self.tough {
            "It's pretty rough around here, so watch yourself."
        } else {
            "We're just a sleepy little town with mild mannered folk."
        };
        self.news = format!("Welcome to town, {}.\n{}", hunter.name(), mood);
        info!(terrain = %self.terrain, tough = self.tough, "hunter arrived in town");
    }

    /// Let the hunter buy or sell one thing at the shop
    pub fn enter_shop(
        &mut self,
        hunter: &mut Hunter,
        mode: ShopMode,
        input: &mut impl InputSource,
        window: &mut impl OutputWindow,
    ) -> Result<Option<TradeOutcome>, GameError> {
        let outcome = self.shop.enter(hunter, mode, input, window)?;
        self.news = "You left the shop.".to_string();
        Ok(outcome)
    }

    /// Try to cross the terrain. Returns true if the hunter may leave.
    pub fn leave_town(&mut self, hunter: &mut Hunter, rng: &mut GameRng) -> bool {
        let item = self.terrain.needed_item();
        if !hunter.has_item_in_kit(item) {
            self.news = format!(
                "You can't leave town, {}. You need {} to cross the {}.",
                hunter.name(),
                item,
                self.terrain
            );
            return false;
        }

        self.news = format!("You used your {} to cross the {}.", item, self.terrain);
        if self.kit_breaks && rng.percent(ITEM_BREAK_PERCENT) {
            hunter.lose_item(item);
            self.news.push_str(&format!("\nUnfortunately, your {} broke.", item));
            debug!(%item, "kit item broke");
        }
        true
    }

    /// Go looking for a brawl
    pub fn look_for_trouble(&mut self, hunter: &mut Hunter, rng: &mut GameRng) {
        let trouble_chance = if self.tough {
            TOUGH_TROUBLE_CHANCE
        } else {
            QUIET_TROUBLE_CHANCE
        };

        if !rng.chance(trouble_chance) {
            self.news = "You couldn't find any trouble.".to_string();
            return;
        }

        let purse = rng.rnd(MAX_BRAWL_GOLD) as i32;
        let mut news = String::from("You want trouble, stranger! You got it!\nOof! Umph! Ow!\n");
        if hunter.has_item_in_kit(Item::Sword) {
            news.push_str(&format!(
                "The brawler takes one look at your sword and flees, leaving {} gold behind.",
                purse
            ));
            hunter.change_gold(purse);
        } else if !rng.chance(trouble_chance) {
            news.push_str(&format!("You won the brawl and receive {} gold.", purse));
            hunter.change_gold(purse);
        } else {
            news.push_str(&format!(
                "That'll teach you to go lookin' fer trouble! You lost the brawl and pay {} gold.",
                purse
            ));
            hunter.change_gold(-purse);
        }
        debug!(purse, gold = hunter.gold(), "brawl");
        self.news = news;
    }

    /// Dig for gold; needs a shovel and works once per town
    pub fn dig_for_gold(&mut self, hunter: &mut Hunter, rng: &mut GameRng) {
        if self.dug {
            self.news = "You already dug for gold in this town.".to_string();
            return;
        }
        if !hunter.has_item_in_kit(Item::Shovel) {
            self.news = "You can't dig for gold without a shovel.".to_string();
            return;
        }

        self.dug = true;
        if rng.percent(DIG_SUCCESS_PERCENT) {
            let found = rng.rnd(MAX_DIG_GOLD) as i32;
            hunter.change_gold(found);
            self.news = format!("You dug up {} gold!", found);
            debug!(found, "dug up gold");
        } else {
            self.news = "You dug but only found dirt.".to_string();
        }
    }

    /// Search the town for its treasure; works once per town
    pub fn look_for_treasure(&mut self, hunter: &mut Hunter) -> String {
        if self.searched {
            return "You have already searched this town.".to_string();
        }
        self.searched = true;

        let treasure = self.treasure;
        let outcome = hunter.add_treasure(treasure);
        debug!(%treasure, ?outcome, "searched for treasure");
        match outcome {
            TreasureOutcome::Collected => format!("You found a {}!", treasure),
            TreasureOutcome::Worthless => "You found dust. It's worthless.".to_string(),
            TreasureOutcome::Duplicate => format!(
                "You found a {}, but you already have one, so you leave it.",
                treasure
            ),
            TreasureOutcome::Full => format!(
                "You found a {}, but you have no room left to carry it.",
                treasure
            ),
        }
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "This nice little town is surrounded by {}.", self.terrain)
    }
}
