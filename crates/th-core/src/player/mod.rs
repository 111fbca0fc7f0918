//! Player character: the hunter, their kit and their treasures

mod hunter;
mod kit;
mod treasure;

pub use hunter::Hunter;
pub use kit::{Item, Kit};
pub use treasure::{Treasure, TreasureOutcome};
