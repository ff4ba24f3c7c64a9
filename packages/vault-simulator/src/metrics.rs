//! Metrics collection and output for simulation results.

use serde::Serialize;

use crate::simulator::{GameResult, Strategy};

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub config: SimulationConfig,
    pub result: GameResultMetrics,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationConfig {
    pub strategy: &'static str,
    pub step_count: usize,
    pub max_turns: u64,
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub unlocked: bool,
    pub turns: u64,
    pub failed_attempts: u32,
    pub first_secret: String,
    pub duration_ms: f64,
}

pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    config: SimulationConfig,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    GameMetrics {
        game_id,
        seed,
        config,
        result: GameResultMetrics {
            unlocked: result.unlocked,
            turns: result.turns,
            failed_attempts: result.failed_attempts,
            first_secret: result.first_secret.clone(),
            duration_ms,
        },
    }
}

impl SimulationConfig {
    pub fn new(strategy: Strategy, step_count: usize, max_turns: u64, total_games: u32) -> Self {
        Self {
            strategy: strategy.name(),
            step_count,
            max_turns,
            total_games,
        }
    }
}

/// Aggregate over all finished games.
#[derive(Debug, Default, PartialEq)]
pub struct Summary {
    pub games: usize,
    pub unlocked: usize,
    pub mean_failures: f64,
    pub mean_turns: f64,
    pub max_failures: u32,
}

pub fn summarize(results: &[GameResult]) -> Summary {
    if results.is_empty() {
        return Summary::default();
    }
    let n = results.len() as f64;
    let failures: u64 = results.iter().map(|r| r.failed_attempts as u64).sum();
    let turns: u64 = results.iter().map(|r| r.turns).sum();

    Summary {
        games: results.len(),
        unlocked: results.iter().filter(|r| r.unlocked).count(),
        mean_failures: failures as f64 / n,
        mean_turns: turns as f64 / n,
        max_failures: results
            .iter()
            .map(|r| r.failed_attempts)
            .max()
            .unwrap_or(0),
    }
}
