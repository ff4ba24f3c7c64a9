#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::game::GameConfig;
pub use domain::{
    CombinationGenerator, CombinationMatcher, LockState, LockStep, ProgressReport, Rotation,
    ScriptedSecrets, SecretSource, TurnOutcome,
};
pub use error::{AppError, Collaborator};
pub use errors::domain::DomainError;
pub use services::turn_flow::{
    build_orchestrator, OrchestratorBuilder, Stage, TurnOrchestrator, TurnReport, TurnSession,
};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
