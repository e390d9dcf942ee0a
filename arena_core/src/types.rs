//! Core types shared across the arena modules

use serde::{Deserialize, Serialize};
use std::fmt;

/// What an item does once it sits in an inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Bonus adds to attack
    Weapon,
    /// Bonus adds to defense
    Armor,
    /// Bonus adds to max health
    Consumable,
}

impl ItemKind {
    /// Get all item kinds, in display order
    pub fn all() -> &'static [ItemKind] {
        &[ItemKind::Weapon, ItemKind::Armor, ItemKind::Consumable]
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemKind::Weapon => "weapon",
            ItemKind::Armor => "armor",
            ItemKind::Consumable => "consumable",
        };
        f.write_str(label)
    }
}

/// Market rarity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Get all rarities, lowest first
    pub fn all() -> &'static [Rarity] {
        &[Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary]
    }

    /// Inclusive discount range (percent) rolled for this rarity
    pub fn discount_range(self) -> (u32, u32) {
        match self {
            Rarity::Common => (5, 25),
            Rarity::Rare => (10, 40),
            Rarity::Epic => (15, 55),
            Rarity::Legendary => (20, 70),
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        };
        f.write_str(label)
    }
}

/// Final classification of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Every encounter won
    Pro,
    /// At least one win, at least one loss or draw
    Partial,
    /// No wins at all
    Loser,
}

impl Tier {
    /// Headline shown on the final screen
    pub fn headline(self) -> &'static str {
        match self {
            Tier::Pro => "You're a machine!",
            Tier::Partial => "You stopped halfway!",
            Tier::Loser => "You're a loser!",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::Pro => "PRO",
            Tier::Partial => "PARTIAL",
            Tier::Loser => "LOSER",
        };
        f.write_str(label)
    }
}
