//! ProgressionTracker - Forward-only walk through the roster

use super::{classify, ProgressionError};
use crate::combat::{resolve_battle_with, BattleOutcome, BattleRules};
use crate::config::{default_roster, RosterConfig};
use crate::entity::{Combatant, Player};
use crate::types::Tier;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Where a run stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "index", rename_all = "snake_case")]
pub enum ProgressionState {
    /// Next fight is the regular enemy at this index
    AwaitingBattle(usize),
    AwaitingBoss,
    Complete,
}

/// Drives the resolver once per encounter, in roster order
///
/// Every fight moves the run forward whatever its outcome; there is no
/// retrying. Restarting means building a new tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionTracker {
    roster: RosterConfig,
    rules: BattleRules,
    state: ProgressionState,
    battles_won: u32,
    outcomes: Vec<BattleOutcome>,
}

impl ProgressionTracker {
    pub fn new(roster: RosterConfig, rules: BattleRules) -> Self {
        let state = if roster.enemies.is_empty() {
            ProgressionState::AwaitingBoss
        } else {
            ProgressionState::AwaitingBattle(0)
        };
        ProgressionTracker {
            roster,
            rules,
            state,
            battles_won: 0,
            outcomes: Vec::new(),
        }
    }

    /// Tracker over the default roster and rules
    pub fn with_defaults() -> Self {
        Self::new(default_roster(), BattleRules::default())
    }

    pub fn state(&self) -> ProgressionState {
        self.state
    }

    pub fn roster(&self) -> &RosterConfig {
        &self.roster
    }

    pub fn battles_won(&self) -> u32 {
        self.battles_won
    }

    /// Regular enemies plus the boss
    pub fn total_encounters(&self) -> u32 {
        self.roster.total_encounters()
    }

    /// Every outcome resolved so far, in order
    pub fn outcomes(&self) -> &[BattleOutcome] {
        &self.outcomes
    }

    pub fn is_complete(&self) -> bool {
        self.state == ProgressionState::Complete
    }

    /// The foe the next fight is against
    pub fn current_foe(&self) -> Option<Combatant> {
        match self.state {
            ProgressionState::AwaitingBattle(index) => {
                self.roster.enemies.get(index).cloned().map(Combatant::Enemy)
            }
            ProgressionState::AwaitingBoss => Some(Combatant::Boss(self.roster.boss.clone())),
            ProgressionState::Complete => None,
        }
    }

    /// State the run moves to once the pending fight resolves
    pub fn next_state(&self) -> ProgressionState {
        match self.state {
            ProgressionState::AwaitingBattle(index) if index + 1 < self.roster.enemies.len() => {
                ProgressionState::AwaitingBattle(index + 1)
            }
            ProgressionState::AwaitingBattle(_) => ProgressionState::AwaitingBoss,
            ProgressionState::AwaitingBoss | ProgressionState::Complete => {
                ProgressionState::Complete
            }
        }
    }

    /// Fight the current foe and move forward
    ///
    /// On `BattleError` the state does not move, so the caller may fix the
    /// input and try the same encounter again.
    pub fn fight_current(&mut self, player: &mut Player) -> Result<BattleOutcome, ProgressionError> {
        let foe = match self.current_foe() {
            Some(foe) => foe,
            None => {
                warn!(target: "arena_core::progression", "fight requested after the run completed");
                return Err(ProgressionError::RunComplete);
            }
        };

        let outcome = resolve_battle_with(player, &foe, &self.rules)?;
        if outcome.player_won() {
            self.battles_won += 1;
        }

        let from = self.state;
        self.state = self.next_state();
        info!(
            target: "arena_core::progression",
            ?from,
            to = ?self.state,
            battles_won = self.battles_won,
            total = self.total_encounters(),
            "encounter resolved"
        );
        if self.is_complete() {
            info!(
                target: "arena_core::progression",
                tier = %self.tier(),
                score = player.score(),
                "run complete"
            );
        }

        self.outcomes.push(outcome.clone());
        Ok(outcome)
    }

    /// Classification for the wins recorded so far
    pub fn tier(&self) -> Tier {
        classify(self.battles_won, self.total_encounters())
    }
}
