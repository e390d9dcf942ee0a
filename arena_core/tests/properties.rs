//! Property tests for stat aggregation and the battle resolver

use arena_core::combat::{resolve_battle, Winner};
use arena_core::{aggregate_stats, Boss, Combatant, Enemy, Item, ItemKind, Player};
use proptest::prelude::*;

fn item_strategy() -> impl Strategy<Value = Item> {
    (
        prop_oneof![
            Just(ItemKind::Weapon),
            Just(ItemKind::Armor),
            Just(ItemKind::Consumable)
        ],
        0u32..60,
    )
        .prop_map(|(kind, bonus)| Item::new("item", kind, bonus))
}

fn player_strategy() -> impl Strategy<Value = Player> {
    (
        1u32..200,
        0u32..40,
        0u32..30,
        prop::collection::vec(item_strategy(), 0..6),
    )
        .prop_map(|(health, attack, defense, items)| {
            let mut player = Player::new("Hero").with_stats(health, attack, defense);
            for item in items {
                player.add_item(item);
            }
            player
        })
}

fn enemy_strategy() -> impl Strategy<Value = Combatant> {
    (0u32..80, 1u32..300).prop_map(|(attack, health)| Enemy::new("Foe", attack, health).into())
}

fn bonus_sum(player: &Player, kind: ItemKind) -> u32 {
    player.inventory().of_kind(kind).map(|i| i.bonus).sum()
}

proptest! {
    #[test]
    fn effective_stats_are_base_plus_bonuses(player in player_strategy()) {
        let stats = aggregate_stats(&player);
        prop_assert_eq!(stats.attack, player.base_attack + bonus_sum(&player, ItemKind::Weapon));
        prop_assert_eq!(stats.defense, player.base_defense + bonus_sum(&player, ItemKind::Armor));
        prop_assert_eq!(stats.max_health, player.max_health + bonus_sum(&player, ItemKind::Consumable));
    }

    #[test]
    fn non_weapons_never_change_attack(
        player in player_strategy(),
        bonus in 0u32..100,
        armor in any::<bool>(),
    ) {
        let mut changed = player.clone();
        let item = if armor {
            Item::armor("plate", bonus)
        } else {
            Item::consumable("potion", bonus)
        };
        changed.add_item(item);
        prop_assert_eq!(changed.effective_attack(), player.effective_attack());
    }

    #[test]
    fn resolver_is_deterministic(player in player_strategy(), foe in enemy_strategy()) {
        let mut first = player.clone();
        let mut second = player;
        let a = resolve_battle(&mut first, &foe).unwrap();
        let b = resolve_battle(&mut second, &foe).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn leftover_health_does_not_matter(
        player in player_strategy(),
        foe in enemy_strategy(),
        leftover in 0u32..500,
    ) {
        let mut fresh = player.clone();
        let mut worn = player;
        worn.current_health = leftover;
        let a = resolve_battle(&mut fresh, &foe).unwrap();
        let b = resolve_battle(&mut worn, &foe).unwrap();
        prop_assert_eq!(a.winner, b.winner);
        prop_assert_eq!(a.turns_elapsed, b.turns_elapsed);
        if a.winner == Winner::Draw {
            // Draws leave stored health untouched
            prop_assert_eq!(worn.current_health, leftover);
        } else {
            prop_assert_eq!(fresh.current_health, worn.current_health);
        }
    }

    #[test]
    fn score_only_grows_on_wins(
        mut player in player_strategy(),
        foes in prop::collection::vec(enemy_strategy(), 1..6),
    ) {
        for foe in &foes {
            let before = player.score();
            let outcome = resolve_battle(&mut player, foe).unwrap();
            prop_assert!(player.score() >= before);
            if outcome.winner == Winner::Player {
                prop_assert_eq!(player.score() - before, outcome.points_awarded);
                prop_assert_eq!(outcome.points_awarded, 100 + u64::from(foe.attack_power()) + 5);
            } else {
                prop_assert_eq!(player.score(), before);
                prop_assert_eq!(outcome.points_awarded, 0);
            }
            prop_assert!(player.current_health <= player.effective_max_health());
        }
    }

    #[test]
    fn boss_points_follow_multiplier(
        attack in 0u32..60,
        tenths in 10u32..=20,
    ) {
        let multiplier = f64::from(tenths) / 10.0;
        let boss: Combatant = Boss::new("Boss", attack, 1, "Roar", multiplier).into();
        // One hit kills a 1 HP boss
        let mut player = Player::new("Hero").with_stats(100, 1, 0);

        let outcome = resolve_battle(&mut player, &boss).unwrap();

        let expected = (f64::from(100 + attack + 5) * multiplier).floor() as u64 + 10;
        prop_assert_eq!(outcome.winner, Winner::Player);
        prop_assert_eq!(outcome.points_awarded, expected);
    }
}
