//! Battle resolution - Run the turn loop, then score and apply the result

use super::result::{BattleOutcome, EnemyStrike, TurnRecord, Winner};
use super::scoring::{ScoringRule, StandardScoring};
use super::BattleError;
use crate::entity::{Combatant, Player};
use crate::stat_block::{aggregate_stats, EffectiveStats};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Turns played before a fight is called a draw
pub const DEFAULT_TURN_CAP: u32 = 100;

/// Turn cap and scoring used by the resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRules {
    pub turn_cap: u32,
    pub scoring: StandardScoring,
}

impl Default for BattleRules {
    fn default() -> Self {
        BattleRules {
            turn_cap: DEFAULT_TURN_CAP,
            scoring: StandardScoring::default(),
        }
    }
}

/// Result of the turn loop alone, before scoring or any side effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    pub winner: Winner,
    pub turns: Vec<TurnRecord>,
    /// Player's working health when the loop stopped (may be negative)
    pub player_health: i64,
    /// Foe's working health when the loop stopped (may be negative)
    pub enemy_health: i64,
    /// Player stats snapshotted at the start of the fight
    pub stats: EffectiveStats,
}

impl Simulation {
    pub fn turns_elapsed(&self) -> u32 {
        self.turns.len() as u32
    }
}

/// Resolve a fight with the default rules
///
/// Mutates the player: score on a win, current health on a win or a loss.
/// The foe is only read. A malformed player or foe yields `BattleError` and nothing
/// changes.
pub fn resolve_battle(player: &mut Player, foe: &Combatant) -> Result<BattleOutcome, BattleError> {
    resolve_battle_with(player, foe, &BattleRules::default())
}

/// Resolve a fight with explicit rules
pub fn resolve_battle_with(
    player: &mut Player,
    foe: &Combatant,
    rules: &BattleRules,
) -> Result<BattleOutcome, BattleError> {
    resolve_with_scoring(player, foe, rules.turn_cap, &rules.scoring)
}

/// Resolve a fight with an injected scoring rule
///
/// Two steps: `simulate` runs the turn loop on a stat snapshot, then the
/// scoring rule prices a victory and the result is applied to the player.
pub fn resolve_with_scoring<S: ScoringRule + ?Sized>(
    player: &mut Player,
    foe: &Combatant,
    turn_cap: u32,
    scoring: &S,
) -> Result<BattleOutcome, BattleError> {
    if let Err(err) = validate_combatants(player, foe) {
        warn!(target: "arena_core::combat", error = %err, "battle rejected");
        return Err(err);
    }

    // Every fight starts from full effective health
    let stats = aggregate_stats(player);
    debug!(
        target: "arena_core::combat",
        player = %player.name,
        foe = foe.name(),
        attack = stats.attack,
        defense = stats.defense,
        max_health = stats.max_health,
        foe_attack = foe.attack_power(),
        foe_health = foe.health(),
        "battle start"
    );

    let simulation = simulate(stats, foe, turn_cap);

    let points = match simulation.winner {
        Winner::Player => scoring.victory_points(foe),
        Winner::Enemy | Winner::Draw => 0,
    };

    // A draw leaves stored health as it was
    match simulation.winner {
        Winner::Player => {
            player.add_score(points);
            player.current_health = clamp_health(simulation.player_health, stats.max_health);
        }
        Winner::Enemy => player.current_health = 0,
        Winner::Draw => {
            warn!(
                target: "arena_core::combat",
                foe = foe.name(),
                turn_cap,
                "turn cap reached, battle is a draw"
            );
        }
    }

    let turn_log = render_log(&player.name, foe, &simulation, points);
    let outcome = BattleOutcome {
        winner: simulation.winner,
        points_awarded: points,
        turn_log,
        turns_elapsed: simulation.turns_elapsed(),
        foe_name: foe.name().to_string(),
        player_health: player.current_health,
    };

    info!(
        target: "arena_core::combat",
        player = %player.name,
        foe = foe.name(),
        winner = %outcome.winner,
        points = outcome.points_awarded,
        turns = outcome.turns_elapsed,
        score = player.score(),
        "battle resolved"
    );

    Ok(outcome)
}

/// Run the turn loop on a stat snapshot
///
/// The player strikes first each turn. The foe then strikes back with
/// `health + defense - attack`: defense is added back every turn, so a
/// surplus of defense over the hit heals the player.
pub fn simulate(stats: EffectiveStats, foe: &Combatant, turn_cap: u32) -> Simulation {
    let player_attack = i64::from(stats.attack);
    let player_defense = i64::from(stats.defense);
    let enemy_attack = i64::from(foe.attack_power());

    let mut player_health = i64::from(stats.max_health);
    let mut enemy_health = i64::from(foe.health());
    let mut turns = Vec::new();
    let mut winner = Winner::Draw;

    for turn in 1..=turn_cap {
        enemy_health -= player_attack;
        if enemy_health <= 0 {
            turns.push(TurnRecord {
                turn,
                player_damage: stats.attack,
                enemy_health_after: enemy_health,
                enemy_strike: None,
            });
            winner = Winner::Player;
            break;
        }

        let health_before = player_health;
        player_health = player_health + player_defense - enemy_attack;
        turns.push(TurnRecord {
            turn,
            player_damage: stats.attack,
            enemy_health_after: enemy_health,
            enemy_strike: Some(EnemyStrike {
                damage: foe.attack_power(),
                blocked: stats.defense,
                health_before,
                health_after: player_health,
            }),
        });
        debug!(
            target: "arena_core::combat",
            turn,
            enemy_health,
            player_health,
            "turn played"
        );

        if player_health <= 0 {
            winner = Winner::Enemy;
            break;
        }
    }

    Simulation {
        winner,
        turns,
        player_health,
        enemy_health,
        stats,
    }
}

/// Check both sides are well-formed before any state is touched
pub fn validate_combatants(player: &Player, foe: &Combatant) -> Result<(), BattleError> {
    if player.name.trim().is_empty() {
        return Err(BattleError::InvalidArgument("player name is empty".to_string()));
    }
    if player.effective_max_health() == 0 {
        return Err(BattleError::InvalidArgument(format!(
            "player '{}' has no health",
            player.name
        )));
    }
    if foe.name().trim().is_empty() {
        return Err(BattleError::InvalidArgument("foe name is empty".to_string()));
    }
    if foe.health() == 0 {
        return Err(BattleError::InvalidArgument(format!(
            "foe '{}' must have positive health",
            foe.name()
        )));
    }
    if let Some(multiplier) = foe.damage_multiplier() {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(BattleError::InvalidArgument(format!(
                "boss '{}' has invalid damage multiplier {}",
                foe.name(),
                multiplier
            )));
        }
    }
    Ok(())
}

fn clamp_health(health: i64, max_health: u32) -> u32 {
    // Clamped into [0, max_health], so the cast cannot truncate
    health.clamp(0, i64::from(max_health)) as u32
}

fn render_log(player_name: &str, foe: &Combatant, simulation: &Simulation, points: u64) -> Vec<String> {
    let stats = simulation.stats;
    let mut log = vec![
        format!("Battle: {} vs {}", player_name, foe.name()),
        format!(
            "Player - ATK: {}, DEF: {}, HP: {}/{}",
            stats.attack, stats.defense, stats.max_health, stats.max_health
        ),
        format!(
            "Enemy - ATK: {}, HP: {}",
            foe.attack_power(),
            foe.health()
        ),
    ];

    for record in &simulation.turns {
        log.extend(record.describe(player_name, foe.name()));
    }

    match simulation.winner {
        Winner::Player => {
            if let Some(multiplier) = foe.damage_multiplier() {
                log.push(format!("Boss defeated! Points x {}", multiplier));
            }
            log.push(format!("VICTORY - {} earns {} points", player_name, points));
        }
        Winner::Enemy => log.push(format!("DEFEAT - {} earns no points", player_name)),
        Winner::Draw => log.push("DRAW - the battle ended with no winner".to_string()),
    }
    log.push(format!("Total turns: {}", simulation.turns_elapsed()));

    log
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Boss, Enemy, Item};

    fn goblin() -> Combatant {
        Enemy::new("Goblin", 15, 50).into()
    }

    #[test]
    fn test_player_wins_in_three_turns() {
        let mut player = Player::new("Hero").with_stats(100, 20, 5);

        let outcome = resolve_battle(&mut player, &goblin()).unwrap();

        assert_eq!(outcome.winner, Winner::Player);
        assert_eq!(outcome.turns_elapsed, 3);
        assert_eq!(outcome.points_awarded, 120);
        assert_eq!(player.score(), 120);
        assert_eq!(player.current_health, 80);
        assert_eq!(outcome.player_health, 80);
    }

    #[test]
    fn test_player_defeated_on_first_turn() {
        let mut player = Player::new("Hero").with_stats(30, 5, 0);
        let foe: Combatant = Enemy::new("Giant", 40, 1000).into();

        let outcome = resolve_battle(&mut player, &foe).unwrap();

        assert_eq!(outcome.winner, Winner::Enemy);
        assert_eq!(outcome.turns_elapsed, 1);
        assert_eq!(outcome.points_awarded, 0);
        assert_eq!(player.score(), 0);
        assert_eq!(player.current_health, 0);
    }

    #[test]
    fn test_simulation_tracks_working_health() {
        let stats = EffectiveStats {
            attack: 20,
            defense: 5,
            max_health: 100,
        };

        let simulation = simulate(stats, &goblin(), DEFAULT_TURN_CAP);

        assert_eq!(simulation.winner, Winner::Player);
        assert_eq!(simulation.enemy_health, -10);
        assert_eq!(simulation.player_health, 80);
        let healths: Vec<_> = simulation
            .turns
            .iter()
            .map(|t| t.enemy_health_after)
            .collect();
        assert_eq!(healths, vec![30, 10, -10]);
        assert!(simulation.turns[2].enemy_strike.is_none());
    }

    #[test]
    fn test_defense_surplus_heals_each_turn() {
        let stats = EffectiveStats {
            attack: 10,
            defense: 20,
            max_health: 100,
        };
        let foe: Combatant = Enemy::new("Rat", 5, 30).into();

        let simulation = simulate(stats, &foe, DEFAULT_TURN_CAP);

        assert_eq!(simulation.winner, Winner::Player);
        assert_eq!(simulation.player_health, 130);
    }

    #[test]
    fn test_stored_health_never_exceeds_effective_max() {
        let mut player = Player::new("Hero").with_stats(100, 10, 20);
        let foe: Combatant = Enemy::new("Rat", 5, 30).into();

        resolve_battle(&mut player, &foe).unwrap();

        assert_eq!(player.current_health, 100);
    }

    #[test]
    fn test_boss_victory_applies_multiplier() {
        let mut player = Player::new("Hero").with_stats(100, 80, 40);
        let dragon: Combatant = Boss::new("Dragon", 50, 150, "Flame Burst", 1.5).into();

        let outcome = resolve_battle(&mut player, &dragon).unwrap();

        assert_eq!(outcome.winner, Winner::Player);
        assert_eq!(outcome.points_awarded, 242);
        assert!(outcome.turn_log.iter().any(|l| l.contains("Boss defeated")));
    }

    #[test]
    fn test_turn_cap_ends_in_draw() {
        let mut player = Player::new("Hero").with_stats(100, 0, 10);
        player.current_health = 1;
        let foe: Combatant = Enemy::new("Wall", 10, 50).into();

        let outcome = resolve_battle(&mut player, &foe).unwrap();

        assert_eq!(outcome.winner, Winner::Draw);
        assert_eq!(outcome.turns_elapsed, DEFAULT_TURN_CAP);
        assert_eq!(outcome.points_awarded, 0);
        assert_eq!(outcome.player_health, 1);
        assert_eq!(player.score(), 0);
        assert_eq!(player.current_health, 1);
    }

    #[test]
    fn test_draw_keeps_stored_health_after_heal() {
        // Defense 15 against attack 10 heals 5 a turn inside the loop
        let mut player = Player::new("Hero").with_stats(100, 0, 15);
        player.current_health = 37;
        let foe: Combatant = Enemy::new("Wall", 10, 50).into();

        let outcome = resolve_battle(&mut player, &foe).unwrap();

        assert_eq!(outcome.winner, Winner::Draw);
        assert_eq!(player.current_health, 37);
    }

    #[test]
    fn test_custom_turn_cap() {
        let mut player = Player::new("Hero").with_stats(100, 0, 10);
        let foe: Combatant = Enemy::new("Wall", 10, 50).into();
        let rules = BattleRules {
            turn_cap: 5,
            ..BattleRules::default()
        };

        let outcome = resolve_battle_with(&mut player, &foe, &rules).unwrap();

        assert_eq!(outcome.winner, Winner::Draw);
        assert_eq!(outcome.turns_elapsed, 5);
    }

    #[test]
    fn test_health_reset_at_battle_start() {
        let mut player = Player::new("Hero").with_stats(100, 20, 5);
        player.current_health = 1;

        let outcome = resolve_battle(&mut player, &goblin()).unwrap();

        assert_eq!(outcome.winner, Winner::Player);
        assert_eq!(player.current_health, 80);
    }

    #[test]
    fn test_consumables_raise_starting_health() {
        let mut player = Player::new("Hero").with_stats(30, 5, 0);
        player.add_item(Item::consumable("Supreme Potion", 100));
        let foe: Combatant = Enemy::new("Brute", 40, 20).into();

        let outcome = resolve_battle(&mut player, &foe).unwrap();

        // player 130 -> 90 -> 50 -> 10 while the brute drops 20 -> 15 -> 10 -> 5 -> 0
        assert_eq!(outcome.turn_log[1], "Player - ATK: 5, DEF: 0, HP: 130/130");
        assert_eq!(outcome.winner, Winner::Player);
        assert_eq!(outcome.turns_elapsed, 4);
        assert_eq!(player.current_health, 10);
    }

    #[test]
    fn test_invalid_foe_mutates_nothing() {
        let mut player = Player::new("Hero").with_stats(100, 20, 5);
        player.current_health = 42;
        let before = player.clone();
        let ghost: Combatant = Enemy::new("Ghost", 10, 0).into();

        let result = resolve_battle(&mut player, &ghost);

        assert!(matches!(result, Err(BattleError::InvalidArgument(_))));
        assert_eq!(player, before);
    }

    #[test]
    fn test_invalid_player_rejected() {
        let mut nameless = Player::new("   ").with_stats(100, 20, 5);
        assert!(resolve_battle(&mut nameless, &goblin()).is_err());

        let mut hollow = Player::new("Hero").with_stats(0, 20, 5);
        assert!(resolve_battle(&mut hollow, &goblin()).is_err());
    }

    #[test]
    fn test_invalid_boss_multiplier_rejected() {
        let mut player = Player::new("Hero").with_stats(100, 80, 40);
        let broken: Combatant = Boss::new("Dragon", 50, 150, "Flame Burst", f64::NAN).into();
        assert!(resolve_battle(&mut player, &broken).is_err());

        let zero: Combatant = Boss::new("Dragon", 50, 150, "Flame Burst", 0.0).into();
        assert!(resolve_battle(&mut player, &zero).is_err());
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_injected_scoring_rule() {
        let mut player = Player::new("Hero").with_stats(100, 20, 5);
        let double_attack = |foe: &Combatant| u64::from(foe.attack_power()) * 2;

        let outcome = resolve_with_scoring(&mut player, &goblin(), DEFAULT_TURN_CAP, &double_attack).unwrap();

        assert_eq!(outcome.points_awarded, 30);
        assert_eq!(player.score(), 30);
    }

    #[test]
    fn test_log_shape() {
        let mut player = Player::new("Hero").with_stats(100, 20, 5);
        let outcome = resolve_battle(&mut player, &goblin()).unwrap();

        assert_eq!(outcome.turn_log[0], "Battle: Hero vs Goblin");
        assert!(outcome.turn_log.iter().any(|l| l == "--- Turn 3 ---"));
        assert_eq!(outcome.turn_log.last().map(String::as_str), Some("Total turns: 3"));
    }
}
