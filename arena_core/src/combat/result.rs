//! BattleOutcome - Result of resolving one encounter

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who came out on top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Player,
    Enemy,
    /// Turn cap reached with both sides standing
    Draw,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Winner::Player => "player",
            Winner::Enemy => "enemy",
            Winner::Draw => "draw",
        };
        f.write_str(label)
    }
}

/// The foe's half of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyStrike {
    pub damage: u32,
    /// Defense added back this turn
    pub blocked: u32,
    pub health_before: i64,
    pub health_after: i64,
}

/// One turn of a fight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: u32,
    pub player_damage: u32,
    pub enemy_health_after: i64,
    /// `None` when the foe fell before striking back
    pub enemy_strike: Option<EnemyStrike>,
}

impl TurnRecord {
    /// Human-readable lines for this turn
    pub fn describe(&self, player_name: &str, foe_name: &str) -> Vec<String> {
        let mut lines = vec![
            format!("--- Turn {} ---", self.turn),
            format!(
                "{} attacks: {} damage -> {} has {} HP left",
                player_name,
                self.player_damage,
                foe_name,
                self.enemy_health_after.max(0)
            ),
        ];

        match self.enemy_strike {
            None => lines.push(format!("{} has been defeated!", foe_name)),
            Some(strike) => {
                lines.push(format!(
                    "{} attacks: {} damage, {} blocked by defense -> {} {} HP -> {} HP",
                    foe_name,
                    strike.damage,
                    strike.blocked,
                    player_name,
                    strike.health_before,
                    strike.health_after.max(0)
                ));
                if strike.health_after <= 0 {
                    lines.push(format!("{} has been defeated!", player_name));
                }
            }
        }

        lines
    }
}

/// Outcome of one resolved encounter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub winner: Winner,
    pub points_awarded: u64,
    pub turn_log: Vec<String>,
    pub turns_elapsed: u32,
    pub foe_name: String,
    /// Player health stored at the end of the fight
    pub player_health: u32,
}

impl BattleOutcome {
    pub fn player_won(&self) -> bool {
        self.winner == Winner::Player
    }

    /// Get a one-line summary
    pub fn summary(&self) -> String {
        match self.winner {
            Winner::Player => format!(
                "Victory over {} in {} turns, +{} points",
                self.foe_name, self.turns_elapsed, self.points_awarded
            ),
            Winner::Enemy => format!(
                "Defeated by {} in {} turns, +0 points",
                self.foe_name, self.turns_elapsed
            ),
            Winner::Draw => format!(
                "Draw against {} after {} turns",
                self.foe_name, self.turns_elapsed
            ),
        }
    }
}
