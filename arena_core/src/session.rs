//! GameSession - Everything one run owns, passed explicitly to the core

use crate::combat::BattleOutcome;
use crate::config::{default_catalog, default_roster, ConfigError, GameConstants, RosterConfig};
use crate::entity::{BuildError, CharacterBuild, Player};
use crate::market::{Market, MarketError, Offer, Product, Receipt, DEFAULT_OFFER_COUNT};
use crate::progression::{ProgressionError, ProgressionState, ProgressionTracker};
use crate::ranking::RunSummary;
use crate::types::Tier;
use chrono::{DateTime, Utc};
use rand::Rng;
use thiserror::Error;
use tracing::info;

/// Session setup error
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// State of one run: the player, the shop and the progression
#[derive(Debug, Clone)]
pub struct GameSession {
    name: String,
    build: CharacterBuild,
    constants: GameConstants,
    roster: RosterConfig,
    catalog: Vec<Product>,
    market: Market,
    player: Player,
    tracker: ProgressionTracker,
}

impl GameSession {
    pub fn new(
        name: impl Into<String>,
        build: CharacterBuild,
        constants: GameConstants,
        roster: RosterConfig,
        catalog: Vec<Product>,
    ) -> Result<Self, SessionError> {
        constants.validate()?;
        roster.validate()?;

        let name = name.into();
        let player = Player::from_build(name.clone(), build, &constants.player)?;
        let tracker = ProgressionTracker::new(roster.clone(), constants.battle_rules());
        let market = Market::new(catalog.clone());

        info!(
            target: "arena_core::session",
            player = %player.name,
            encounters = tracker.total_encounters(),
            products = catalog.len(),
            "session created"
        );

        Ok(GameSession {
            name,
            build,
            constants,
            roster,
            catalog,
            market,
            player,
            tracker,
        })
    }

    /// Session over the default constants, roster and catalog
    pub fn with_defaults(name: impl Into<String>, build: CharacterBuild) -> Result<Self, SessionError> {
        Self::new(
            name,
            build,
            GameConstants::default(),
            default_roster(),
            default_catalog(),
        )
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn market(&self) -> &Market {
        &self.market
    }

    pub fn tracker(&self) -> &ProgressionTracker {
        &self.tracker
    }

    pub fn constants(&self) -> &GameConstants {
        &self.constants
    }

    pub fn state(&self) -> ProgressionState {
        self.tracker.state()
    }

    pub fn is_complete(&self) -> bool {
        self.tracker.is_complete()
    }

    /// Offers for one market visit
    pub fn roll_offers<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Offer> {
        self.market.roll_offers(rng, DEFAULT_OFFER_COUNT)
    }

    pub fn buy(&mut self, cart: &[Offer]) -> Result<Receipt, MarketError> {
        self.market.purchase(&mut self.player, cart)
    }

    /// Fight the next encounter
    pub fn fight(&mut self) -> Result<BattleOutcome, ProgressionError> {
        self.tracker.fight_current(&mut self.player)
    }

    pub fn tier(&self) -> Tier {
        self.tracker.tier()
    }

    pub fn summary(&self) -> RunSummary {
        self.summary_at(Utc::now())
    }

    pub fn summary_at(&self, timestamp: DateTime<Utc>) -> RunSummary {
        RunSummary::from_run(&self.player, &self.tracker, timestamp)
    }

    /// Throw the run away and start over from the same configuration
    ///
    /// The fresh session is fully built before it replaces this one; on
    /// error this session is left as it was.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        let fresh = GameSession::new(
            self.name.clone(),
            self.build,
            self.constants.clone(),
            self.roster.clone(),
            self.catalog.clone(),
        )?;
        *self = fresh;
        info!(target: "arena_core::session", player = %self.name, "run restarted");
        Ok(())
    }
}
