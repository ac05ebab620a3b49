//! Combat simulation binary.
//!
//! Loads a content directory, spawns a player against one boss and plays the
//! encounter out turn by turn, logging every step.
//!
//! ```bash
//! combat-sim --data data --boss frost_queen --difficulty hard --seed 7
//! RUST_LOG=debug combat-sim --boss ember_tyrant
//! ```

mod encounter;
mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use combat_content::ContentFactory;
use combat_core::{BossId, Difficulty};

use crate::encounter::Simulation;

/// Runs a seeded player-versus-boss encounter
#[derive(Debug, Parser)]
#[command(name = "combat-sim")]
#[command(about = "Simulate a boss encounter from combat content", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory holding bosses.ron, abilities.ron and friends
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    data: PathBuf,

    /// Boss catalog id to fight
    #[arg(short, long, value_name = "ID", default_value = "frost_queen")]
    boss: String,

    /// Difficulty preset (story, normal, hard, nightmare)
    /// If not provided, uses the default named in difficulty.toml
    #[arg(long, value_name = "PRESET")]
    difficulty: Option<String>,

    /// Seed for every random roll
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many rounds
    #[arg(short, long, value_name = "N", default_value_t = 50)]
    max_rounds: u32,

    /// Evaluate party synergy before the fight
    #[arg(long)]
    synergy: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let bundle = ContentFactory::new(&cli.data)
        .load_bundle()
        .with_context(|| format!("loading content from {}", cli.data.display()))?;

    let difficulty = match cli.difficulty.as_deref() {
        Some(name) => name
            .parse::<Difficulty>()
            .map_err(|_| anyhow::anyhow!("Unknown difficulty preset '{}'", name))?,
        None => bundle.difficulty.default_difficulty(),
    };

    tracing::info!(
        boss = %cli.boss,
        %difficulty,
        seed = cli.seed,
        max_rounds = cli.max_rounds,
        "Starting simulation"
    );

    let mut simulation = Simulation::new(
        bundle,
        BossId::new(cli.boss),
        difficulty,
        cli.seed,
        cli.synergy,
    )?;
    let summary = simulation.run(cli.max_rounds)?;

    println!("{summary}");
    Ok(())
}
