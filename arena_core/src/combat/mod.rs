//! Combat - Resolve one encounter between the player and a single foe

mod resolution;
mod result;
mod scoring;

pub use resolution::{
    resolve_battle, resolve_battle_with, resolve_with_scoring, simulate, validate_combatants,
    BattleRules, Simulation, DEFAULT_TURN_CAP,
};
pub use result::{BattleOutcome, EnemyStrike, TurnRecord, Winner};
pub use scoring::{ScoringRule, StandardScoring};

use thiserror::Error;

/// Battle resolution error
///
/// Returned as a value so the caller can show a message and carry on; no
/// state is touched when it is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
