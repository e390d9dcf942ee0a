//! Scoring - Points awarded for beating a foe

use crate::entity::Combatant;
use serde::{Deserialize, Serialize};

/// Maps a beaten foe to the points the player earns
///
/// Only consulted on a player victory; losses and draws are worth nothing.
pub trait ScoringRule {
    fn victory_points(&self, foe: &Combatant) -> u64;
}

impl<F> ScoringRule for F
where
    F: Fn(&Combatant) -> u64,
{
    fn victory_points(&self, foe: &Combatant) -> u64 {
        self(foe)
    }
}

/// `base_points + attack + bounty`, and for bosses
/// `floor(that * multiplier) + boss_bonus`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardScoring {
    #[serde(default = "default_base_points")]
    pub base_points: u64,
    /// Flat bounty added for every victory
    #[serde(default = "default_bounty")]
    pub bounty: u64,
    /// Added after the boss multiplier
    #[serde(default = "default_boss_bonus")]
    pub boss_bonus: u64,
}

impl Default for StandardScoring {
    fn default() -> Self {
        StandardScoring {
            base_points: default_base_points(),
            bounty: default_bounty(),
            boss_bonus: default_boss_bonus(),
        }
    }
}

fn default_base_points() -> u64 {
    100
}
fn default_bounty() -> u64 {
    5
}
fn default_boss_bonus() -> u64 {
    10
}

impl StandardScoring {
    /// Points before any boss multiplier
    pub fn base_total(&self, enemy_attack: u32) -> u64 {
        self.base_points
            .saturating_add(u64::from(enemy_attack))
            .saturating_add(self.bounty)
    }
}

impl ScoringRule for StandardScoring {
    fn victory_points(&self, foe: &Combatant) -> u64 {
        let base = self.base_total(foe.attack_power());
        match foe {
            Combatant::Enemy(_) => base,
            Combatant::Boss(boss) => {
                let scaled = (base as f64 * boss.damage_multiplier).floor();
                // Float to int casts saturate; validated multipliers are positive.
                (scaled as u64).saturating_add(self.boss_bonus)
            }
        }
    }
}
