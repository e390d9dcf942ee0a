//! Progression - A run of regular enemies followed by the boss

mod tier;
mod tracker;

pub use tier::classify;
pub use tracker::{ProgressionState, ProgressionTracker};

use crate::combat::BattleError;
use thiserror::Error;

/// Progression error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgressionError {
    #[error("the run is complete; there is nothing left to fight")]
    RunComplete,
    #[error(transparent)]
    Battle(#[from] BattleError),
}
