//! Treasures hidden in towns

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A treasure a town may hide
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Treasure {
    Crown,
    Trophy,
    Gem,
    /// Worthless; never collected
    Dust,
}

impl Treasure {
    pub const fn is_collectible(self) -> bool {
        !matches!(self, Treasure::Dust)
    }
}

/// What happened when a hunter tried to keep a treasure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreasureOutcome {
    Collected,
    Worthless,
    Duplicate,
    /// All slots already filled
    Full,
}
