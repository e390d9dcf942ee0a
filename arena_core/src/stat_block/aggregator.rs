//! StatAccumulator - Collects stat contributions before they become EffectiveStats

use super::EffectiveStats;
use crate::types::ItemKind;

/// Accumulates contributions from every stat source
///
/// Used while aggregating a player's stats to collect base stats and item
/// bonuses before producing an `EffectiveStats` snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatAccumulator {
    pub attack_flat: u32,
    pub defense_flat: u32,
    pub max_health_flat: u32,
}

impl StatAccumulator {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        StatAccumulator::default()
    }

    /// Route an item bonus to the stat its kind affects
    pub fn add_bonus(&mut self, kind: ItemKind, amount: u32) {
        match kind {
            ItemKind::Weapon => self.attack_flat = self.attack_flat.saturating_add(amount),
            ItemKind::Armor => self.defense_flat = self.defense_flat.saturating_add(amount),
            ItemKind::Consumable => {
                self.max_health_flat = self.max_health_flat.saturating_add(amount)
            }
        }
    }

    pub fn finish(&self) -> EffectiveStats {
        EffectiveStats {
            attack: self.attack_flat,
            defense: self.defense_flat,
            max_health: self.max_health_flat,
        }
    }
}
