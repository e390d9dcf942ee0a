//! Arena Sim - Plays one arena run end to end on the command line
//!
//! Allocates the build, shops a seeded market, fights every encounter,
//! prints the final tier and records the run in a JSON ranking history.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use arena_core::config::{load_catalog, load_roster, load_toml};
use arena_core::market::Offer;
use arena_core::{
    default_catalog, default_roster, format_price, matchup_line, CharacterBuild, GameConstants,
    GameSession, RankingHistory,
};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Play a turn-based arena run")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a character, shop, fight every encounter and record the result.
    Play(PlayArgs),
    /// Print the best recorded runs.
    Ranking(RankingArgs),
}

#[derive(Args)]
struct PlayArgs {
    #[arg(long, default_value = "Hero")]
    name: String,
    /// Seed for the market roll
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    health: u32,
    #[arg(long, default_value_t = 6)]
    attack: u32,
    #[arg(long, default_value_t = 4)]
    defense: u32,
    /// TOML file with `[battle]`, `[scoring]` and `[player]` tables
    #[arg(long)]
    constants: Option<PathBuf>,
    #[arg(long)]
    roster: Option<PathBuf>,
    #[arg(long)]
    catalog: Option<PathBuf>,
    #[arg(long, default_value = "arena_history.json")]
    history: PathBuf,
}

#[derive(Args)]
struct RankingArgs {
    #[arg(long, default_value = "arena_history.json")]
    history: PathBuf,
    #[arg(long, default_value_t = 10)]
    top: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Play(args) => handle_play(args),
        Commands::Ranking(args) => handle_ranking(args),
    }
}

fn handle_play(args: PlayArgs) -> Result<()> {
    let constants: GameConstants = match &args.constants {
        Some(path) => load_toml(path).with_context(|| format!("loading {}", path.display()))?,
        None => GameConstants::default(),
    };
    let roster = match &args.roster {
        Some(path) => load_roster(path).with_context(|| format!("loading {}", path.display()))?,
        None => default_roster(),
    };
    let catalog = match &args.catalog {
        Some(path) => load_catalog(path).with_context(|| format!("loading {}", path.display()))?,
        None => default_catalog(),
    };

    let build = CharacterBuild::new(args.health, args.attack, args.defense);
    let mut session = GameSession::new(args.name.as_str(), build, constants, roster, catalog)
        .context("creating session")?;

    let player = session.player();
    println!(
        "{} - HP {} ATK {} DEF {} - wallet {}",
        player.name,
        player.max_health,
        player.base_attack,
        player.base_defense,
        format_price(player.currency())
    );

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let offers = session.roll_offers(&mut rng);
    println!("\nMarket:");
    for offer in &offers {
        println!(
            "  {:<20} {:>9} (-{}%) {}",
            offer.product.name,
            format_price(offer.price),
            offer.discount,
            offer.product.rarity
        );
    }

    let cart = pick_cart(&offers, session.player().currency());
    if cart.is_empty() {
        println!("\nNothing affordable, fighting bare-handed");
    } else {
        let receipt = session.buy(&cart).context("buying cart")?;
        println!(
            "\nBought {} item(s) for {}, {} left",
            receipt.items.len(),
            format_price(receipt.total),
            format_price(receipt.remaining)
        );
    }

    while let Some(foe) = session.tracker().current_foe() {
        println!("\n{}", matchup_line(session.player(), &foe));
        let outcome = session.fight()?;
        for line in &outcome.turn_log {
            println!("  {}", line);
        }
    }

    let tier = session.tier();
    println!(
        "\n{} - {} ({} of {} won, score {})",
        tier,
        tier.headline(),
        session.tracker().battles_won(),
        session.tracker().total_encounters(),
        session.player().score()
    );

    record_run(&args.history, &session)
}

/// Greedy pick: strongest bonus per cent first, while the wallet allows
fn pick_cart(offers: &[Offer], wallet: u32) -> Vec<Offer> {
    let mut ranked: Vec<&Offer> = offers.iter().collect();
    ranked.sort_by_key(|o| {
        let item = o.product.to_item();
        std::cmp::Reverse(u64::from(item.bonus) * 1000 / u64::from(o.price.max(1)))
    });

    let mut left = wallet;
    let mut cart = Vec::new();
    for offer in ranked {
        if offer.price <= left && offer.product.to_item().bonus > 0 {
            left -= offer.price;
            cart.push(offer.clone());
        }
    }
    cart
}

fn record_run(path: &Path, session: &GameSession) -> Result<()> {
    let mut history = RankingHistory::load(path)
        .with_context(|| format!("reading history {}", path.display()))?;
    history.record(session.summary());
    history
        .save(path)
        .with_context(|| format!("writing history {}", path.display()))?;
    info!(runs = history.len(), path = %path.display(), "run recorded");
    Ok(())
}

fn handle_ranking(args: RankingArgs) -> Result<()> {
    let history = RankingHistory::load(&args.history)
        .with_context(|| format!("reading history {}", args.history.display()))?;
    if history.is_empty() {
        println!("No runs recorded yet");
        return Ok(());
    }
    for (place, run) in history.top(args.top).iter().enumerate() {
        println!(
            "{:>2}. {:<16} {:>6} pts  {:<7} {}/{}  {}  {}",
            place + 1,
            run.name,
            run.final_score,
            run.tier.to_string(),
            run.battles_won,
            run.total_encounters,
            format_price(run.final_currency),
            run.timestamp.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}
