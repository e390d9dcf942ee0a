//! Enemy roster configuration loading

use super::ConfigError;
use crate::entity::{Boss, Enemy};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The fixed sequence of regular enemies followed by the boss
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub enemies: Vec<Enemy>,
    pub boss: Boss,
}

impl RosterConfig {
    /// Encounters in a run: every regular enemy plus the boss
    pub fn total_encounters(&self) -> u32 {
        self.enemies.len() as u32 + 1
    }

    /// Check every stat block can be fought
    pub fn validate(&self) -> Result<(), ConfigError> {
        for enemy in &self.enemies {
            if enemy.health == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "enemy '{}' must have positive health",
                    enemy.name
                )));
            }
        }
        if self.boss.health == 0 {
            return Err(ConfigError::ValidationError(format!(
                "boss '{}' must have positive health",
                self.boss.name
            )));
        }
        if !self.boss.damage_multiplier.is_finite() || self.boss.damage_multiplier <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "boss '{}' has invalid damage multiplier {}",
                self.boss.name, self.boss.damage_multiplier
            )));
        }
        Ok(())
    }

    fn fallback() -> Self {
        RosterConfig {
            enemies: vec![Enemy::new("Goblin", 15, 50)],
            boss: Boss::new("Dragon", 50, 150, "Flame Burst", 1.5),
        }
    }
}

/// Load a roster from a TOML file
pub fn load_roster(path: &Path) -> Result<RosterConfig, ConfigError> {
    let roster: RosterConfig = super::load_toml(path)?;
    roster.validate()?;
    Ok(roster)
}

/// Load a roster from a TOML string
pub fn parse_roster(content: &str) -> Result<RosterConfig, ConfigError> {
    let roster: RosterConfig = super::parse_toml(content)?;
    roster.validate()?;
    Ok(roster)
}

/// Get the default roster: three regular enemies and the dragon
pub fn default_roster() -> RosterConfig {
    let toml = include_str!("../../config/roster.toml");
    parse_roster(toml).unwrap_or_else(|_| RosterConfig::fallback())
}
