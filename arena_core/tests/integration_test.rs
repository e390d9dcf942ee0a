//! Integration test: Build character -> Shop -> Fight the roster -> Classify -> Record
//!
//! Runs whole sessions through the public API with the default configuration.

use arena_core::{
    combat::Winner,
    market::Offer,
    progression::ProgressionState,
    CharacterBuild, GameSession, RankingHistory, Tier,
};

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

fn offers(session: &GameSession, names: &[&str]) -> Vec<Offer> {
    names
        .iter()
        .map(|name| {
            let product = session
                .market()
                .find(name)
                .unwrap_or_else(|| panic!("{} should be in the default catalog", name));
            Offer::full_price(product.clone())
        })
        .collect()
}

#[test]
fn test_full_run_to_pro() {
    separator("STEP 1: Creating character");

    let mut session = GameSession::with_defaults("Hero", CharacterBuild::new(0, 6, 4)).unwrap();
    let player = session.player();
    println!("  {} - HP {} ATK {} DEF {}", player.name, player.max_health, player.base_attack, player.base_defense);
    assert_eq!(player.max_health, 100);

    separator("STEP 2: Shopping");

    let cart = offers(&session, &["Cursed Sword", "Divine Shield", "Nectar of the Gods"]);
    let receipt = session.buy(&cart).unwrap();
    println!("  Spent {} cents, {} left", receipt.total, receipt.remaining);
    assert_eq!(receipt.total, 370);

    let stats = session.player().stats();
    assert_eq!(stats.attack, 36);
    assert_eq!(stats.defense, 44);
    assert_eq!(stats.max_health, 250);

    separator("STEP 3: Fighting");

    let mut points = Vec::new();
    while !session.is_complete() {
        let outcome = session.fight().unwrap();
        for line in &outcome.turn_log {
            println!("  {}", line);
        }
        assert_eq!(outcome.winner, Winner::Player);
        points.push(outcome.points_awarded);
    }

    assert_eq!(points, vec![120, 130, 140, 242]);
    assert_eq!(session.player().score(), 632);
    assert_eq!(session.state(), ProgressionState::Complete);

    separator("STEP 4: Classification");

    assert_eq!(session.tracker().battles_won(), 4);
    assert_eq!(session.tier(), Tier::Pro);

    let summary = session.summary();
    assert_eq!(summary.final_score, 632);
    assert_eq!(summary.final_currency, 130);
    assert_eq!(summary.tier, Tier::Pro);
}

#[test]
fn test_glass_cannon_run_is_partial() {
    let mut session = GameSession::with_defaults("Glass", CharacterBuild::new(0, 10, 0)).unwrap();

    let winners: Vec<_> = std::iter::from_fn(|| {
        if session.is_complete() {
            None
        } else {
            Some(session.fight().unwrap().winner)
        }
    })
    .collect();

    assert_eq!(
        winners,
        vec![Winner::Player, Winner::Enemy, Winner::Enemy, Winner::Enemy]
    );
    assert_eq!(session.player().score(), 120);
    assert_eq!(session.player().current_health, 0);
    assert_eq!(session.tier(), Tier::Partial);
}

#[test]
fn test_pacifist_run_is_loser() {
    let mut session = GameSession::with_defaults("Pacifist", CharacterBuild::new(10, 0, 0)).unwrap();

    while !session.is_complete() {
        let outcome = session.fight().unwrap();
        assert_eq!(outcome.winner, Winner::Enemy);
        assert_eq!(outcome.points_awarded, 0);
    }

    assert_eq!(session.player().score(), 0);
    assert_eq!(session.tier(), Tier::Loser);
}

#[test]
fn test_history_ranks_finished_runs() {
    let mut strong = GameSession::with_defaults("Strong", CharacterBuild::new(0, 6, 4)).unwrap();
    let cart = offers(&strong, &["Cursed Sword", "Divine Shield", "Nectar of the Gods"]);
    strong.buy(&cart).unwrap();
    let mut weak = GameSession::with_defaults("Weak", CharacterBuild::new(0, 10, 0)).unwrap();

    for session in [&mut weak, &mut strong] {
        while !session.is_complete() {
            session.fight().unwrap();
        }
    }

    let mut history = RankingHistory::new();
    history.record(weak.summary());
    history.record(strong.summary());

    let path = std::env::temp_dir().join(format!("arena_integration_{}.json", std::process::id()));
    history.save(&path).unwrap();
    let loaded = RankingHistory::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let ranked: Vec<_> = loaded.ranked().iter().map(|s| (s.name.clone(), s.final_score)).collect();
    assert_eq!(
        ranked,
        vec![("Strong".to_string(), 632), ("Weak".to_string(), 120)]
    );
}
