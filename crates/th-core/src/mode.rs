//! Difficulty modes and the parameters derived from them

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::consts::*;
use crate::errors::GameError;

/// Difficulty mode chosen at the start of a game
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    #[strum(to_string = "easy", serialize = "e")]
    Easy,
    #[default]
    #[strum(to_string = "normal", serialize = "n")]
    Normal,
    #[strum(to_string = "hard", serialize = "h")]
    Hard,
    /// Unlocks the free sword at the shop
    #[strum(to_string = "samurai", serialize = "s")]
    Samurai,
    /// Fixed, generous starting state for trying things out
    #[strum(to_string = "test")]
    Test,
}

impl Mode {
    /// Parse a mode tag typed by the player.
    ///
    /// Accepts the single-letter codes and the full names, in any case.
    pub fn from_tag(tag: &str) -> Result<Self, GameError> {
        tag.trim()
            .parse()
            .map_err(|_| GameError::UnknownMode(tag.trim().to_string()))
    }

    /// Parameters for this mode
    pub fn config(self) -> ModeConfig {
        ModeConfig::for_mode(self)
    }
}

/// Parameters derived from the mode, applied each time a town is entered
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeConfig {
    pub mode: Mode,
    /// Sell-back multiplier in [0, 1]
    pub markdown: f64,
    /// Chance that a new town is a tough one
    pub toughness: f64,
    pub starting_gold: i32,
    /// Shop stocks the free sword
    pub secret_shop: bool,
    /// Kit items can break while crossing terrain
    pub kit_breaks: bool,
}

impl ModeConfig {
    pub fn for_mode(mode: Mode) -> Self {
        let (markdown, toughness, starting_gold) = match mode {
            Mode::Easy => (EASY_MARKDOWN, EASY_TOUGHNESS, EASY_STARTING_GOLD),
            Mode::Hard => (HARD_MARKDOWN, HARD_TOUGHNESS, STARTING_GOLD),
            Mode::Normal | Mode::Samurai => (DEFAULT_MARKDOWN, DEFAULT_TOUGHNESS, STARTING_GOLD),
            Mode::Test => (DEFAULT_MARKDOWN, DEFAULT_TOUGHNESS, TEST_STARTING_GOLD),
        };

        Self {
            mode,
            markdown,
            toughness,
            starting_gold,
            secret_shop: mode == Mode::Samurai,
            kit_breaks: mode != Mode::Easy,
        }
    }
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self::for_mode(Mode::default())
    }
}
