//! Game constants configuration

use super::ConfigError;
use crate::combat::{BattleRules, StandardScoring};
use serde::{Deserialize, Serialize};

/// Tunable game constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub battle: BattleConstants,
    #[serde(default)]
    pub scoring: StandardScoring,
    #[serde(default)]
    pub player: PlayerConstants,
}

impl GameConstants {
    /// Rules handed to the battle resolver
    pub fn battle_rules(&self) -> BattleRules {
        BattleRules {
            turn_cap: self.battle.turn_cap,
            scoring: self.scoring.clone(),
        }
    }

    /// Reject values the resolver cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.battle.turn_cap == 0 {
            return Err(ConfigError::ValidationError(
                "battle.turn_cap must be at least 1".to_string(),
            ));
        }
        if self.player.base_max_health == 0 {
            return Err(ConfigError::ValidationError(
                "player.base_max_health must be positive".to_string(),
            ));
        }
        if self.player.default_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "player.default_name must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleConstants {
    /// Turns played before a fight is declared a draw
    #[serde(default = "default_turn_cap")]
    pub turn_cap: u32,
}

impl Default for BattleConstants {
    fn default() -> Self {
        BattleConstants {
            turn_cap: default_turn_cap(),
        }
    }
}

fn default_turn_cap() -> u32 {
    100
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConstants {
    /// Max health before build points and consumables
    #[serde(default = "default_base_max_health")]
    pub base_max_health: u32,
    /// Currency (cents) a new character starts with
    #[serde(default = "default_starting_currency")]
    pub starting_currency: u32,
    /// Points distributed between health, attack and defense at creation
    #[serde(default = "default_build_budget")]
    pub build_budget: u32,
    #[serde(default = "default_name")]
    pub default_name: String,
}

impl Default for PlayerConstants {
    fn default() -> Self {
        PlayerConstants {
            base_max_health: default_base_max_health(),
            starting_currency: default_starting_currency(),
            build_budget: default_build_budget(),
            default_name: default_name(),
        }
    }
}

fn default_base_max_health() -> u32 {
    100
}
fn default_starting_currency() -> u32 {
    500
}
fn default_build_budget() -> u32 {
    10
}
fn default_name() -> String {
    "Aventurero".to_string()
}
