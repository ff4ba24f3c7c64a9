//! Headless game runner for exercising the orchestrator end to end.
//!
//! Each game builds a fresh orchestrator on a no-op stage and feeds it turns
//! from a strategy until the lock opens or the turn cap is hit.

use std::time::Duration;

use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vault::domain::direction_for_step;
use vault::domain::rules::{MAX_REQUIRED_COUNT, MIN_REQUIRED_COUNT};
use vault::{build_orchestrator, AppError, GameConfig, Rotation, TurnOrchestrator, TurnReport};

/// How the simulated player picks turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Guess each count uniformly; turn the last step until it opens.
    Random,
    /// Read the secret and play it exactly.
    Oracle,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Oracle => "oracle",
        }
    }
}

/// Result of simulating one game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub unlocked: bool,
    pub turns: u64,
    pub failed_attempts: u32,
    /// Secret the game was opened with, e.g. `3 CW, 2 CCW, 1 CW`.
    pub first_secret: String,
}

pub struct Simulator {
    orchestrator: TurnOrchestrator,
    strategy: Strategy,
    rng: StdRng,
    max_turns: u64,
}

impl Simulator {
    pub fn new(game_seed: u64, step_count: usize, strategy: Strategy, max_turns: u64) -> Self {
        let config = GameConfig {
            step_count,
            reward_duration: Duration::ZERO,
            sequence_timeout: None,
            seed: Some(game_seed),
        };
        Self {
            orchestrator: build_orchestrator().with_config(config).build(),
            strategy,
            // Player choices use a stream independent of the secret generator
            rng: StdRng::seed_from_u64(game_seed.rotate_left(32)),
            max_turns,
        }
    }

    /// Play until the lock opens or `max_turns` turns have been sent.
    pub async fn simulate_game(mut self) -> Result<GameResult, AppError> {
        let first_secret = self.orchestrator.lock_state().describe_secret();
        let mut turns = 0u64;
        let mut failed_attempts = 0u32;
        let mut plan = self.plan_attempt().into_iter();

        while turns < self.max_turns {
            let Some(direction) = plan.next() else {
                plan = self.plan_attempt().into_iter();
                continue;
            };
            turns += 1;

            match self.orchestrator.on_direction(direction).await? {
                TurnReport::Progressing(_) => {}
                TurnReport::Failed { failed_attempts: n } => {
                    failed_attempts = n;
                    plan = self.plan_attempt().into_iter();
                }
                TurnReport::Unlocked => {
                    return Ok(GameResult {
                        unlocked: true,
                        turns,
                        failed_attempts,
                        first_secret,
                    });
                }
                other => {
                    return Err(AppError::internal(format!(
                        "headless stage produced {other:?}"
                    )))
                }
            }
        }

        Ok(GameResult {
            unlocked: false,
            turns,
            failed_attempts,
            first_secret,
        })
    }

    /// Turns for one attempt against the current secret.
    fn plan_attempt(&mut self) -> Vec<Rotation> {
        match self.strategy {
            Strategy::Oracle => self
                .orchestrator
                .lock_state()
                .steps()
                .iter()
                .flat_map(|step| {
                    std::iter::repeat(step.required_direction).take(step.required_count as usize)
                })
                .collect(),
            Strategy::Random => {
                let step_count = self.orchestrator.lock_state().steps().len();
                let mut turns = Vec::new();
                for step in 0..step_count.saturating_sub(1) {
                    let guess = self
                        .rng
                        .random_range(MIN_REQUIRED_COUNT..=MAX_REQUIRED_COUNT);
                    turns.extend(std::iter::repeat(direction_for_step(step)).take(guess as usize));
                }
                // The final step cannot be overshot; keep turning until it opens.
                let last = direction_for_step(step_count.saturating_sub(1));
                turns.extend(std::iter::repeat(last).take(MAX_REQUIRED_COUNT as usize));
                turns
            }
        }
    }
}
