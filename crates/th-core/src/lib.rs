//! th-core: Core game logic for Treasure Hunter
//!
//! This crate contains all game logic with no terminal dependencies.
//! Player input and text output go through the traits in [`io`], so the
//! whole game can be driven from tests with scripted input.

pub mod io;
pub mod player;
pub mod shop;
pub mod town;

mod consts;
mod errors;
mod gameloop;
mod mode;
mod rng;

pub use consts::*;
pub use errors::GameError;
pub use gameloop::{Command, GameLoop, GameLoopResult, GameStatus};
pub use mode::{Mode, ModeConfig};
pub use rng::GameRng;
