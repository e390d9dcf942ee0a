//! Ranking history - Finished-run summaries, best score first

use crate::entity::Player;
use crate::progression::ProgressionTracker;
use crate::types::Tier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// History file error
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Failed to access history file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse history JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One finished run, as handed to the history store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub name: String,
    pub final_score: u64,
    pub final_currency: u32,
    pub battles_won: u32,
    pub total_encounters: u32,
    pub tier: Tier,
    pub timestamp: DateTime<Utc>,
}

impl RunSummary {
    pub fn from_run(player: &Player, tracker: &ProgressionTracker, timestamp: DateTime<Utc>) -> Self {
        RunSummary {
            name: player.name.clone(),
            final_score: player.score(),
            final_currency: player.currency(),
            battles_won: tracker.battles_won(),
            total_encounters: tracker.total_encounters(),
            tier: tracker.tier(),
            timestamp,
        }
    }
}

/// Every recorded run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankingHistory {
    entries: Vec<RunSummary>,
}

impl RankingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a history file; a missing file is an empty history
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn record(&mut self, summary: RunSummary) {
        self.entries.push(summary);
    }

    /// Entries in recording order
    pub fn entries(&self) -> &[RunSummary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries by score, highest first; equal scores keep recording order
    pub fn ranked(&self) -> Vec<&RunSummary> {
        let mut ranked: Vec<_> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.final_score.cmp(&a.final_score));
        ranked
    }

    pub fn top(&self, n: usize) -> Vec<&RunSummary> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}
