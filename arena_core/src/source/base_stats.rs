//! BaseStatsSource - Stats allocated at character creation

use crate::entity::Player;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

/// The player's own stats, before any item
pub struct BaseStatsSource {
    pub attack: u32,
    pub defense: u32,
    pub max_health: u32,
}

impl BaseStatsSource {
    pub fn new(attack: u32, defense: u32, max_health: u32) -> Self {
        BaseStatsSource {
            attack,
            defense,
            max_health,
        }
    }

    pub fn from_player(player: &Player) -> Self {
        Self::new(player.base_attack, player.base_defense, player.max_health)
    }
}

impl StatSource for BaseStatsSource {
    fn id(&self) -> &str {
        "base_stats"
    }

    fn priority(&self) -> i32 {
        -100 // Base stats apply first
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.attack_flat = stats.attack_flat.saturating_add(self.attack);
        stats.defense_flat = stats.defense_flat.saturating_add(self.defense);
        stats.max_health_flat = stats.max_health_flat.saturating_add(self.max_health);
    }
}
