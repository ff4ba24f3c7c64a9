//! Domain layer: pure lock logic types and helpers.

pub mod generator;
pub mod matcher;
pub mod rotation;
pub mod rules;
pub mod state;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_props_generator;
#[cfg(test)]
mod tests_props_matcher;

// Re-exports for ergonomics
pub use generator::{generate_with_rng, CombinationGenerator, ScriptedSecrets, SecretSource};
pub use matcher::{CombinationMatcher, LockCheckpoint, ProgressReport, TurnOutcome};
pub use rotation::Rotation;
pub use rules::{direction_for_step, DEFAULT_STEP_COUNT};
pub use state::{LockState, LockStep};
