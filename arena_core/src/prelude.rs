//! Prelude module for convenient imports
//!
//! ```rust
//! use arena_core::prelude::*;
//! ```

// Entities
pub use crate::entity::{Boss, CharacterBuild, Combatant, Enemy, Fighter, Item, Player};
pub use crate::types::{ItemKind, Rarity, Tier};

// Stats
pub use crate::stat_block::{aggregate_stats, EffectiveStats};

// Combat
pub use crate::combat::{resolve_battle, BattleOutcome, Winner};

// Run
pub use crate::progression::{classify, ProgressionState, ProgressionTracker};
pub use crate::session::GameSession;
