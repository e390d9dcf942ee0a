//! arena_core - Battle resolution and run progression for the arena game
//!
//! This library provides:
//! - Entity model: Player, Enemy, Boss, Item, Inventory
//! - Stat aggregation: effective attack, defense and max health
//! - Battle resolver: deterministic turn loop with scoring
//! - Progression: regular enemies then the boss, and the final tier
//! - Market and ranking history consumed by the front end

pub mod combat;
pub mod config;
pub mod entity;
pub mod market;
pub mod progression;
pub mod ranking;
pub mod session;
pub mod source;
pub mod stat_block;
pub mod types;
pub mod prelude;

// Re-export core types for convenience
pub use combat::{resolve_battle, BattleError, BattleOutcome, BattleRules, ScoringRule, StandardScoring, Winner};
pub use config::{default_catalog, default_roster, ConfigError, GameConstants, RosterConfig};
pub use entity::{matchup_line, Boss, CharacterBuild, Combatant, Enemy, Fighter, Inventory, Item, Player};
pub use market::{format_price, Market, MarketError, Offer, Product, Receipt};
pub use progression::{classify, ProgressionError, ProgressionState, ProgressionTracker};
pub use ranking::{RankingHistory, RunSummary};
pub use session::{GameSession, SessionError};
pub use stat_block::{aggregate_stats, EffectiveStats};
pub use types::{ItemKind, Rarity, Tier};
