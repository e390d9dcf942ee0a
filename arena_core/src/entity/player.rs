//! Player - The character carried through a run

use super::{BuildError, CharacterBuild, Fighter, Inventory, Item};
use crate::config::PlayerConstants;
use crate::source::{BaseStatsSource, ItemSource, StatSource};
use crate::stat_block::{aggregate_from_sources, EffectiveStats};
use crate::types::ItemKind;
use serde::{Deserialize, Serialize};

/// The player character
///
/// Effective attack, defense and max health are never stored; they are
/// recomputed from base stats and inventory on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    score: u64,
    /// Health left after the last fight
    pub current_health: u32,
    /// Max health before consumable bonuses
    pub max_health: u32,
    pub base_attack: u32,
    pub base_defense: u32,
    inventory: Inventory,
    /// Balance in cents
    currency: u32,
}

impl Player {
    /// Create a player with default constants and no allocated points
    pub fn new(name: impl Into<String>) -> Self {
        let constants = PlayerConstants::default();
        Player {
            name: name.into(),
            score: 0,
            current_health: constants.base_max_health,
            max_health: constants.base_max_health,
            base_attack: 0,
            base_defense: 0,
            inventory: Inventory::new(),
            currency: constants.starting_currency,
        }
    }

    /// Create a player from a point allocation
    pub fn from_build(
        name: impl Into<String>,
        build: CharacterBuild,
        constants: &PlayerConstants,
    ) -> Result<Self, BuildError> {
        build.validate(constants.build_budget)?;
        let max_health = constants.base_max_health.saturating_add(build.health);
        Ok(Player {
            name: normalize_name(&name.into(), &constants.default_name),
            score: 0,
            current_health: max_health,
            max_health,
            base_attack: build.attack,
            base_defense: build.defense,
            inventory: Inventory::new(),
            currency: constants.starting_currency,
        })
    }

    /// Builder-style stat override, mostly for fixtures
    pub fn with_stats(mut self, max_health: u32, base_attack: u32, base_defense: u32) -> Self {
        self.max_health = max_health;
        self.current_health = max_health;
        self.base_attack = base_attack;
        self.base_defense = base_defense;
        self
    }

    pub fn with_currency(mut self, currency: u32) -> Self {
        self.currency = currency;
        self
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Add points to the cumulative score; the score never decreases
    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    pub fn currency(&self) -> u32 {
        self.currency
    }

    /// Spend currency if the balance covers it; returns whether it did
    pub fn spend_currency(&mut self, amount: u32) -> bool {
        match self.currency.checked_sub(amount) {
            Some(rest) => {
                self.currency = rest;
                true
            }
            None => false,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Append an item; the inventory keeps its own copy
    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    pub fn inventory_by_kind(&self) -> Vec<(ItemKind, Vec<&Item>)> {
        self.inventory.by_kind()
    }

    /// Every stat source contributing to this player, unordered
    pub fn stat_sources(&self) -> Vec<Box<dyn StatSource + '_>> {
        let mut sources: Vec<Box<dyn StatSource + '_>> = Vec::with_capacity(self.inventory.len() + 1);
        sources.push(Box::new(BaseStatsSource::from_player(self)));
        for item in &self.inventory {
            sources.push(Box::new(ItemSource::new(item)));
        }
        sources
    }

    pub fn stats(&self) -> EffectiveStats {
        aggregate_from_sources(&self.stat_sources())
    }

    pub fn effective_attack(&self) -> u32 {
        self.stats().attack
    }

    pub fn effective_defense(&self) -> u32 {
        self.stats().defense
    }

    pub fn effective_max_health(&self) -> u32 {
        self.stats().max_health
    }

    /// Display view with effective stats filled in
    pub fn snapshot(&self) -> PlayerSnapshot {
        let stats = self.stats();
        PlayerSnapshot {
            name: self.name.clone(),
            score: self.score,
            current_health: self.current_health,
            max_health: stats.max_health,
            attack: stats.attack,
            defense: stats.defense,
            currency: self.currency,
            item_count: self.inventory.len(),
        }
    }
}

/// Longest player name kept, in characters
pub const MAX_NAME_LEN: usize = 20;

/// Strip all whitespace and cap the length; an empty result becomes `fallback`
pub fn normalize_name(raw: &str, fallback: &str) -> String {
    let name: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .take(MAX_NAME_LEN)
        .collect();
    if name.is_empty() {
        fallback.to_string()
    } else {
        name
    }
}

impl Fighter for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn attack(&self) -> u32 {
        self.effective_attack()
    }

    fn defense(&self) -> Option<u32> {
        Some(self.effective_defense())
    }
}

/// Read-only view of a player for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub score: u64,
    pub current_health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub currency: u32,
    pub item_count: usize,
}
