//! Vault Simulator CLI - plays many headless vault games and records how they went.
//!
//! Stage animations complete immediately, so thousands of games run in
//! seconds. Useful for checking secret distribution and strategy cost.

mod metrics;
mod output;
mod simulator;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use metrics::{build_game_metrics, summarize, SimulationConfig};
use output::OutputWriter;
use simulator::{GameResult, Simulator, Strategy};
use tracing::{info, warn};
use vault::domain::rules::MAX_STEP_COUNT;

#[derive(Parser)]
#[command(name = "vault-simulator")]
#[command(about = "Headless vault lock simulator")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Base seed; game N uses seed + N. Random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// How the simulated player chooses turns
    #[arg(long, value_enum, default_value = "random")]
    strategy: Strategy,

    /// Steps per secret
    #[arg(long, default_value = "3", value_parser = clap::value_parser!(u16).range(1..=MAX_STEP_COUNT as i64))]
    steps: u16,

    /// Give up on a game after this many turns
    #[arg(long, default_value = "100000")]
    max_turns: u64,

    /// JSONL output file; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let step_count = args.steps as usize;
    let base_seed = args.seed.unwrap_or_else(rand::random);
    info!(
        games = args.games,
        strategy = args.strategy.name(),
        step_count,
        base_seed,
        "Starting vault simulator"
    );

    let mut output_writer = OutputWriter::new(args.output.as_deref())?;

    let start = Instant::now();
    let mut results: Vec<GameResult> = Vec::new();
    let mut errors = 0u32;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = base_seed.wrapping_add(game_num as u64);

        let simulator = Simulator::new(game_seed, step_count, args.strategy, args.max_turns);
        match simulator.simulate_game().await {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    game_seed,
                    SimulationConfig::new(args.strategy, step_count, args.max_turns, args.games),
                    &result,
                    duration_ms,
                );
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }
                if !result.unlocked {
                    warn!(game_num, turns = result.turns, "Game hit the turn cap");
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(game_num, error = %e, "Game failed");
            }
        }
    }

    if let Some(path) = output_writer.output_path() {
        info!("Detailed results written to: {}", path.display());
    }
    output_writer.finish()?;

    let summary = summarize(&results);
    info!(
        completed = summary.games,
        total = args.games,
        unlocked = summary.unlocked,
        errors,
        mean_failures = summary.mean_failures,
        mean_turns = summary.mean_turns,
        max_failures = summary.max_failures,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Simulation summary"
    );

    Ok(())
}
