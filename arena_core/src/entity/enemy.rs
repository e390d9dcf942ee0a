//! Enemies and bosses - static stat blocks the player fights

use super::Fighter;
use serde::{Deserialize, Serialize};

/// A regular enemy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub attack_power: u32,
    /// Health at the start of every fight; damage never persists between fights
    pub health: u32,
}

impl Enemy {
    pub fn new(name: impl Into<String>, attack_power: u32, health: u32) -> Self {
        Enemy {
            name: name.into(),
            attack_power,
            health,
        }
    }

    /// Introduction line shown before the fight
    pub fn describe(&self) -> String {
        format!(
            "I am {}, the enemy. I have {} attack and {} health",
            self.name, self.attack_power, self.health
        )
    }
}

/// The final enemy of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    pub name: String,
    pub attack_power: u32,
    pub health: u32,
    /// Flavour only; has no effect on resolution
    pub special_ability: String,
    /// Applied to the points awarded for beating the boss
    #[serde(default = "default_damage_multiplier")]
    pub damage_multiplier: f64,
}

fn default_damage_multiplier() -> f64 {
    2.0
}

impl Boss {
    pub fn new(
        name: impl Into<String>,
        attack_power: u32,
        health: u32,
        special_ability: impl Into<String>,
        damage_multiplier: f64,
    ) -> Self {
        Boss {
            name: name.into(),
            attack_power,
            health,
            special_ability: special_ability.into(),
            damage_multiplier,
        }
    }

    pub fn describe(&self) -> String {
        format!(
            "I am {}, the final boss. My special ability is: {}",
            self.name, self.special_ability
        )
    }
}

/// Anything the player can be matched against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Combatant {
    Enemy(Enemy),
    Boss(Boss),
}

impl Combatant {
    pub fn name(&self) -> &str {
        match self {
            Combatant::Enemy(enemy) => &enemy.name,
            Combatant::Boss(boss) => &boss.name,
        }
    }

    pub fn attack_power(&self) -> u32 {
        match self {
            Combatant::Enemy(enemy) => enemy.attack_power,
            Combatant::Boss(boss) => boss.attack_power,
        }
    }

    pub fn health(&self) -> u32 {
        match self {
            Combatant::Enemy(enemy) => enemy.health,
            Combatant::Boss(boss) => boss.health,
        }
    }

    /// Score multiplier, present only for bosses
    pub fn damage_multiplier(&self) -> Option<f64> {
        match self {
            Combatant::Enemy(_) => None,
            Combatant::Boss(boss) => Some(boss.damage_multiplier),
        }
    }

    pub fn is_boss(&self) -> bool {
        matches!(self, Combatant::Boss(_))
    }

    pub fn describe(&self) -> String {
        match self {
            Combatant::Enemy(enemy) => enemy.describe(),
            Combatant::Boss(boss) => boss.describe(),
        }
    }
}

impl From<Enemy> for Combatant {
    fn from(enemy: Enemy) -> Self {
        Combatant::Enemy(enemy)
    }
}

impl From<Boss> for Combatant {
    fn from(boss: Boss) -> Self {
        Combatant::Boss(boss)
    }
}

impl Fighter for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn attack(&self) -> u32 {
        self.attack_power
    }
}

impl Fighter for Boss {
    fn name(&self) -> &str {
        &self.name
    }

    fn attack(&self) -> u32 {
        self.attack_power
    }
}

impl Fighter for Combatant {
    fn name(&self) -> &str {
        Combatant::name(self)
    }

    fn attack(&self) -> u32 {
        self.attack_power()
    }
}
