//! Final tier of a run

use crate::types::Tier;

/// Classify a run by how many of its encounters were won
///
/// Winning every encounter is `Pro`, winning none is `Loser`, anything in
/// between is `Partial`. The full-clear check comes first, so a run with no
/// encounters at all counts as `Pro`.
pub fn classify(battles_won: u32, total_encounters: u32) -> Tier {
    if battles_won >= total_encounters {
        Tier::Pro
    } else if battles_won > 0 {
        Tier::Partial
    } else {
        Tier::Loser
    }
}
