use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use tracing::info;

use super::session::TurnSession;
use super::stage::Stage;
use super::{TurnOrchestrator, TurnState};
use crate::config::game::GameConfig;
use crate::domain::{CombinationGenerator, CombinationMatcher, SecretSource};

/// Builder for creating TurnOrchestrator instances (used in main, simulator and tests)
pub struct OrchestratorBuilder {
    config: GameConfig,
    stage: Option<Stage>,
    source: Option<Box<dyn SecretSource>>,
}

impl OrchestratorBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            stage: None,
            source: None,
        }
    }
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }
    /// Overrides the seeded generator implied by the config.
    pub fn with_secret_source(mut self, source: Box<dyn SecretSource>) -> Self {
        self.source = Some(source);
        self
    }
    pub fn with_reward_duration(mut self, duration: Duration) -> Self {
        self.config.reward_duration = duration;
        self
    }
    pub fn with_sequence_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.sequence_timeout = timeout;
        self
    }

    /// Draws the first secret, zeroes the counter display and enables input.
    pub fn build(self) -> TurnOrchestrator {
        let config = self.config;
        let source = self.source.unwrap_or_else(|| {
            Box::new(CombinationGenerator::new(config.seed)) as Box<dyn SecretSource>
        });
        let stage = self.stage.unwrap_or_else(Stage::headless);
        let matcher = CombinationMatcher::with_step_count(source, config.step_count);

        stage.counter.set_count(0);
        stage.input.set_enabled(true);
        info!(
            step_count = matcher.step_count(),
            seeded = config.seed.is_some(),
            "Vault lock ready"
        );

        TurnOrchestrator {
            state: Mutex::new(TurnState {
                matcher,
                session: TurnSession::default(),
            }),
            stage: RwLock::new(stage),
            reward_duration: config.reward_duration,
            sequence_timeout: config.sequence_timeout,
        }
    }
}

impl Default for OrchestratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_orchestrator() -> OrchestratorBuilder {
    OrchestratorBuilder::new()
}
