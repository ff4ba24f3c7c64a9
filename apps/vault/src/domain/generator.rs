//! Secret combination generation.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::domain::rules::{direction_for_step, REQUIRED_COUNT_RANGE};
use crate::domain::state::{LockState, LockStep};

/// Where the matcher draws each new secret from.
pub trait SecretSource: Send {
    /// Produce an unsolved lock with `step_count` steps.
    fn next_secret(&mut self, step_count: usize) -> LockState;
}

/// Draw a secret from `rng`: counts uniform in `1..=9`, directions
/// alternating CW, CCW, CW, ...
///
/// A `step_count` of zero is treated as one.
pub fn generate_with_rng<R: Rng + ?Sized>(rng: &mut R, step_count: usize) -> LockState {
    let steps = (0..step_count.max(1))
        .map(|i| LockStep::new(direction_for_step(i), rng.random_range(REQUIRED_COUNT_RANGE)))
        .collect();
    LockState::fresh(steps)
}

/// Random secret generator.
///
/// Seeded generators replay the same sequence of secrets, which the
/// simulator and tests rely on.
pub struct CombinationGenerator {
    rng: ChaCha8Rng,
}

impl CombinationGenerator {
    /// `Some(seed)` gives a reproducible stream; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self { rng }
    }

    pub fn generate(&mut self, step_count: usize) -> LockState {
        let lock = generate_with_rng(&mut self.rng, step_count);
        debug!(
            secret = %lock.describe_secret(),
            step_count = lock.steps().len(),
            "Generated secret combination"
        );
        lock
    }
}

impl Default for CombinationGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SecretSource for CombinationGenerator {
    fn next_secret(&mut self, step_count: usize) -> LockState {
        self.generate(step_count)
    }
}

/// Serves pre-built secrets in order, then falls back to random ones.
///
/// Scripted secrets are handed out as given, whatever `step_count` the
/// caller asks for.
pub struct ScriptedSecrets {
    queue: VecDeque<LockState>,
    fallback: CombinationGenerator,
}

impl ScriptedSecrets {
    pub fn new(secrets: impl IntoIterator<Item = LockState>) -> Self {
        Self {
            queue: secrets.into_iter().collect(),
            fallback: CombinationGenerator::new(Some(0)),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl SecretSource for ScriptedSecrets {
    fn next_secret(&mut self, step_count: usize) -> LockState {
        match self.queue.pop_front() {
            Some(lock) => {
                debug!(secret = %lock.describe_secret(), "Serving scripted secret");
                lock
            }
            None => self.fallback.generate(step_count),
        }
    }
}
