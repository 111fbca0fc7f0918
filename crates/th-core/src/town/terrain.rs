//! Terrain surrounding a town

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::player::Item;

/// What a hunter has to cross to leave town
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Terrain {
    Mountains,
    Ocean,
    Plains,
    Desert,
    Jungle,
    Marsh,
}

impl Terrain {
    /// The kit item needed to cross
    pub const fn needed_item(self) -> Item {
        match self {
            Terrain::Mountains => Item::Rope,
            Terrain::Ocean => Item::Boat,
            Terrain::Plains => Item::Horse,
            Terrain::Desert => Item::Water,
            Terrain::Jungle => Item::Machete,
            Terrain::Marsh => Item::Boots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_each_terrain_needs_a_different_item() {
        let mut needed: Vec<Item> = Terrain::iter().map(Terrain::needed_item).collect();
        needed.sort();
        needed.dedup();
        assert_eq!(needed.len(), 6);
        assert!(!needed.contains(&Item::Shovel));
        assert!(!needed.contains(&Item::Sword));
    }
}
