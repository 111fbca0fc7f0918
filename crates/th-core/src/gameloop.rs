//! Main game loop
//!
//! One turn: show the news, check for a win or a loss, show the menu, read
//! a command and carry it out. The loop owns the hunter and the current
//! town and lends the hunter to the shop and town for each action.

use strum::EnumString;
use tracing::{debug, info};

use crate::errors::GameError;
use crate::io::{InputSource, OutputWindow, TextColor};
use crate::mode::{Mode, ModeConfig};
use crate::player::Hunter;
use crate::rng::GameRng;
use crate::shop::{Shop, ShopMode};
use crate::town::Town;

const MENU: [&str; 7] = [
    "(B)uy something at the shop.",
    "(S)ell something at the shop.",
    "(M)ove on to a different town.",
    "(L)ook for trouble!",
    "(H)unt for treasure!",
    "(D)ig for gold!",
    "Give up the hunt and e(X)it.",
];

/// A menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Command {
    #[strum(serialize = "b")]
    Buy,
    #[strum(serialize = "s")]
    Sell,
    #[strum(serialize = "m")]
    Move,
    #[strum(serialize = "l")]
    LookForTrouble,
    #[strum(serialize = "d")]
    DigForGold,
    #[strum(serialize = "h")]
    HuntForTreasure,
    #[strum(serialize = "x")]
    Exit,
}

impl Command {
    /// Parse a line typed at the menu prompt
    pub fn parse(line: &str) -> Option<Self> {
        line.trim().parse().ok()
    }
}

/// Where the game stands at the start of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Result of a game loop tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// Last treasure slot filled
    PlayerWon,
    /// Gold went negative
    PlayerLost,
    /// Player gave up, or input ran out
    PlayerQuit,
}

/// The game session
pub struct GameLoop<I, W> {
    hunter: Hunter,
    town: Town,
    config: ModeConfig,
    rng: GameRng,
    input: I,
    window: W,
}

impl<I: InputSource, W: OutputWindow> GameLoop<I, W> {
    /// Greet the player, ask for a name and a mode, and set up the first
    /// town.
    ///
    /// Unknown modes are rejected and asked for again. Returns `Ok(None)`
    /// if input runs out first.
    pub fn welcome(mut input: I, mut window: W, rng: GameRng) -> Result<Option<Self>, GameError> {
        window.add_text("Welcome to TREASURE HUNTER!", TextColor::Orange);
        window.add_text("Going hunting for the big treasure, eh?", TextColor::Black);
        window.add_text("What's your name, Hunter? ", TextColor::Black);
        let Some(name) = input.read_line()? else {
            return Ok(None);
        };
        let name = name.trim().to_string();

        let mode = loop {
            window.add_text("Select mode? (e/n/h): ", TextColor::Black);
            let Some(tag) = input.read_line()? else {
                return Ok(None);
            };
            match Mode::from_tag(&tag) {
                Ok(mode) => break mode,
                Err(err) => {
                    debug!(%err, "rejected mode");
                    window.add_text(
                        "That's no mode I've heard of. Pick (e)asy, (n)ormal or (h)ard.",
                        TextColor::Red,
                    );
                }
            }
        };

        Ok(Some(Self::new(Hunter::new(name, mode), rng, input, window)))
    }

    /// Start a game for an existing hunter in a fresh town
    pub fn new(hunter: Hunter, mut rng: GameRng, input: I, window: W) -> Self {
        let config = hunter.mode().config();
        let town = Self::build_town(&hunter, &config, &mut rng);
        info!(name = hunter.name(), mode = %config.mode, seed = rng.seed(), "game started");

        Self {
            hunter,
            town,
            config,
            rng,
            input,
            window,
        }
    }

    pub fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    pub fn hunter_mut(&mut self) -> &mut Hunter {
        &mut self.hunter
    }

    pub fn town(&self) -> &Town {
        &self.town
    }

    /// Replace the current town, e.g. to fix its layout
    pub fn set_town(&mut self, mut town: Town) {
        town.hunter_arrives(&self.hunter);
        self.town = town;
    }

    pub fn config(&self) -> &ModeConfig {
        &self.config
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Win or loss, checked at the start of every turn
    pub fn status(&self) -> GameStatus {
        if self.hunter.is_bankrupt() {
            GameStatus::Lost
        } else if self.hunter.has_all_treasures() {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    /// Play turns until the game is won, lost or abandoned
    pub fn run(&mut self) -> Result<GameLoopResult, GameError> {
        loop {
            self.window.add_text("", TextColor::Black);
            self.window.add_text(self.town.latest_news(), TextColor::Black);
            self.window.add_text("***", TextColor::Black);

            match self.status() {
                GameStatus::Lost => {
                    self.window.add_text("You lose!", TextColor::Red);
                    info!(gold = self.hunter.gold(), "game lost");
                    return Ok(GameLoopResult::PlayerLost);
                }
                GameStatus::Won => {
                    self.window.add_text(
                        "Congratulations! You found the last of the hidden treasures!",
                        TextColor::Orange,
                    );
                    self.window.add_text("You win!", TextColor::Orange);
                    info!(gold = self.hunter.gold(), "game won");
                    return Ok(GameLoopResult::PlayerWon);
                }
                GameStatus::Playing => {}
            }

            self.show_menu();
            let Some(choice) = self.input.read_line()? else {
                info!("input closed, leaving the game");
                return Ok(GameLoopResult::PlayerQuit);
            };
            self.window.clear();

            match self.tick(&choice)? {
                GameLoopResult::Continue => {}
                result => return Ok(result),
            }
        }
    }

    /// Carry out one menu choice.
    ///
    /// Win and loss are not checked here; `run` does that at the start of
    /// the next turn.
    pub fn tick(&mut self, choice: &str) -> Result<GameLoopResult, GameError> {
        let Some(command) = Command::parse(choice) else {
            self.window
                .add_text("Yikes! That's an invalid option! Try again.", TextColor::Red);
            return Ok(GameLoopResult::Continue);
        };
        debug!(?command, "turn");

        match command {
            Command::Buy | Command::Sell => {
                let mode = if command == Command::Buy {
                    ShopMode::Buy
                } else {
                    ShopMode::Sell
                };
                self.town
                    .enter_shop(&mut self.hunter, mode, &mut self.input, &mut self.window)?;
            }
            Command::Move => {
                if self.town.leave_town(&mut self.hunter, &mut self.rng) {
                    // This town is going away so print its news now
                    self.window.add_text(self.town.latest_news(), TextColor::Black);
                    self.town = Self::build_town(&self.hunter, &self.config, &mut self.rng);
                }
            }
            Command::LookForTrouble => {
                self.town.look_for_trouble(&mut self.hunter, &mut self.rng);
            }
            Command::DigForGold => {
                self.town.dig_for_gold(&mut self.hunter, &mut self.rng);
            }
            Command::HuntForTreasure => {
                let found = self.town.look_for_treasure(&mut self.hunter);
                self.window.add_text(&found, TextColor::Black);
            }
            Command::Exit => {
                self.window.add_text(
                    &format!("Fare thee well, {}!", self.hunter.name()),
                    TextColor::Black,
                );
                return Ok(GameLoopResult::PlayerQuit);
            }
        }

        Ok(GameLoopResult::Continue)
    }

    fn show_menu(&mut self) {
        self.window.add_text(&self.hunter.to_string(), TextColor::Black);
        self.window.add_text(&self.town.to_string(), TextColor::Black);
        for line in MENU {
            self.window.add_text(line, TextColor::Black);
        }
        self.window.add_text("What's your next move? ", TextColor::Black);
    }

    /// A new town and shop with parameters from the mode
    fn build_town(hunter: &Hunter, config: &ModeConfig, rng: &mut GameRng) -> Town {
        let shop = Shop::new(config.markdown, config.secret_shop);
        let mut town = Town::new(shop, config, rng);
        town.hunter_arrives(hunter);
        town
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{BufferedWindow, ScriptedInput};

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("b"), Some(Command::Buy));
        assert_eq!(Command::parse("S"), Some(Command::Sell));
        assert_eq!(Command::parse(" m "), Some(Command::Move));
        assert_eq!(Command::parse("l"), Some(Command::LookForTrouble));
        assert_eq!(Command::parse("d"), Some(Command::DigForGold));
        assert_eq!(Command::parse("h"), Some(Command::HuntForTreasure));
        assert_eq!(Command::parse("X"), Some(Command::Exit));
        assert_eq!(Command::parse("buy"), None);
        assert_eq!(Command::parse(""), None);
    }

    fn game(hunter: Hunter) -> GameLoop<ScriptedInput, BufferedWindow> {
        GameLoop::new(
            hunter,
            GameRng::new(42),
            ScriptedInput::default(),
            BufferedWindow::new(),
        )
    }

    #[test]
    fn test_status_lost_when_gold_negative() {
        let mut g = game(Hunter::with_gold("Ada", 0, Mode::Normal));
        assert_eq!(g.status(), GameStatus::Playing);
        g.hunter_mut().change_gold(-1);
        assert_eq!(g.status(), GameStatus::Lost);
    }

    #[test]
    fn test_status_won_with_three_treasures() {
        use crate::player::Treasure;

        let mut g = game(Hunter::with_gold("Ada", 0, Mode::Normal));
        g.hunter_mut().add_treasure(Treasure::Crown);
        g.hunter_mut().add_treasure(Treasure::Gem);
        assert_eq!(g.status(), GameStatus::Playing);
        g.hunter_mut().add_treasure(Treasure::Trophy);
        assert_eq!(g.status(), GameStatus::Won);

        // Loss is checked first
        g.hunter_mut().change_gold(-5);
        assert_eq!(g.status(), GameStatus::Lost);
    }

    #[test]
    fn test_invalid_choice_continues() {
        let mut g = game(Hunter::new("Ada", Mode::Normal));
        let result = g.tick("q").unwrap();
        assert_eq!(result, GameLoopResult::Continue);
        assert_eq!(
            g.window().last_line(),
            Some("Yikes! That's an invalid option! Try again.")
        );
        assert_eq!(g.hunter().gold(), 10);
    }

    #[test]
    fn test_exit_says_farewell() {
        let mut g = game(Hunter::new("Ada", Mode::Normal));
        assert_eq!(g.tick("x").unwrap(), GameLoopResult::PlayerQuit);
        assert_eq!(g.window().last_line(), Some("Fare thee well, Ada!"));
    }

    #[test]
    fn test_new_game_arrives_in_town() {
        let g = game(Hunter::new("Ada", Mode::Samurai));
        assert!(g.town().latest_news().starts_with("Welcome to town, Ada."));
        assert!(g.town().shop().prices().secret_mode());
        assert_eq!(g.config().mode, Mode::Samurai);
    }
}
