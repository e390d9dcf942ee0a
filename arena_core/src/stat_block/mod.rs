//! Stat aggregation - Effective player stats from base stats and items

mod aggregator;

pub use aggregator::StatAccumulator;

use crate::entity::Player;
use crate::source::StatSource;
use serde::{Deserialize, Serialize};

/// A player's combat stats with every item bonus applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectiveStats {
    pub attack: u32,
    pub defense: u32,
    pub max_health: u32,
}

/// Aggregate a player's effective stats
///
/// Pure read over the player's base stats and inventory. Nothing is cached,
/// so calling it after the inventory changes always reflects the change.
pub fn aggregate_stats(player: &Player) -> EffectiveStats {
    player.stats()
}

/// Fold stat sources in priority order into an `EffectiveStats`
pub fn aggregate_from_sources(sources: &[Box<dyn StatSource + '_>]) -> EffectiveStats {
    let mut accumulator = StatAccumulator::new();

    let mut sorted_sources: Vec<_> = sources.iter().collect();
    sorted_sources.sort_by_key(|s| s.priority());

    for source in sorted_sources {
        source.apply(&mut accumulator);
    }

    accumulator.finish()
}
