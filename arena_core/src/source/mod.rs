//! StatSource - Trait and implementations for stat providers

mod base_stats;
mod item;

pub use base_stats::BaseStatsSource;
pub use item::ItemSource;

use crate::stat_block::StatAccumulator;

/// Trait for anything that contributes to a player's effective stats
pub trait StatSource: Send + Sync {
    /// Identifier for this source
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    /// Default priority is 0.
    /// - Base stats: -100
    /// - Items: 0
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source's stats to the accumulator
    fn apply(&self, stats: &mut StatAccumulator);
}
