//! Step matching over a single owned lock.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;
use tracing::debug;

use crate::domain::generator::SecretSource;
use crate::domain::rotation::Rotation;
use crate::domain::rules::DEFAULT_STEP_COUNT;
use crate::domain::state::LockState;
use crate::errors::domain::DomainError;

/// Result of matching one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TurnOutcome {
    /// Correct direction; the lock is not open yet.
    Progressing,
    /// Wrong direction for the active step. Nothing was consumed.
    Wrong,
    /// The final step just completed.
    Unlocked,
}

/// Read-only progress summary for display and debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProgressReport {
    Step {
        /// 1-based
        step_no: usize,
        progress: u8,
        required_count: u8,
        direction: Rotation,
    },
    Complete,
}

impl Display for ProgressReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ProgressReport::Step {
                step_no,
                progress,
                required_count,
                direction,
            } => write!(f, "Step {step_no}: {progress}/{required_count} {direction}"),
            ProgressReport::Complete => write!(f, "All steps complete!"),
        }
    }
}

/// Saved lock state; see [`CombinationMatcher::rollback`].
#[derive(Debug, Clone)]
pub struct LockCheckpoint(LockState);

/// Owns the current secret and evaluates turns against it.
pub struct CombinationMatcher {
    state: LockState,
    source: Box<dyn SecretSource>,
    step_count: usize,
}

impl CombinationMatcher {
    /// Matcher with the default 3-step secret drawn from `source`.
    pub fn new(source: Box<dyn SecretSource>) -> Self {
        Self::with_step_count(source, DEFAULT_STEP_COUNT)
    }

    pub fn with_step_count(mut source: Box<dyn SecretSource>, step_count: usize) -> Self {
        let step_count = step_count.max(1);
        let state = source.next_secret(step_count);
        Self {
            state,
            source,
            step_count,
        }
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn state(&self) -> &LockState {
        &self.state
    }

    /// Match one turn against the active step.
    ///
    /// A wrong direction never mutates the lock. A solved lock must be
    /// [`reset`](Self::reset) before it accepts more turns.
    pub fn check_input(&mut self, direction: Rotation) -> Result<TurnOutcome, DomainError> {
        let Some(step) = self.state.active_step().copied() else {
            return Err(DomainError::invalid_turn_sequence(
                "check_input called on a solved lock; reset first",
            ));
        };

        if direction != step.required_direction {
            debug!(%direction, expected = %step.required_direction, "Wrong direction");
            return Ok(TurnOutcome::Wrong);
        }

        self.state.progress_in_active_step += 1;
        if self.state.progress_in_active_step < step.required_count {
            debug!(progress = %self.describe_progress(), "Correct turn");
            return Ok(TurnOutcome::Progressing);
        }

        debug!(step_no = self.state.active_step_index + 1, "Step complete");
        self.state.progress_in_active_step = 0;
        self.state.active_step_index += 1;

        if self.state.is_solved() {
            debug!("Lock solved");
            Ok(TurnOutcome::Unlocked)
        } else {
            Ok(TurnOutcome::Progressing)
        }
    }

    /// Discard the current lock and draw a fresh secret.
    pub fn reset(&mut self) {
        self.state = self.source.next_secret(self.step_count);
    }

    pub fn describe_progress(&self) -> ProgressReport {
        match self.state.active_step() {
            Some(step) => ProgressReport::Step {
                step_no: self.state.active_step_index + 1,
                progress: self.state.progress_in_active_step,
                required_count: step.required_count,
                direction: step.required_direction,
            },
            None => ProgressReport::Complete,
        }
    }

    pub fn checkpoint(&self) -> LockCheckpoint {
        LockCheckpoint(self.state.clone())
    }

    /// Restore the lock exactly as it was when `checkpoint` was taken.
    pub fn rollback(&mut self, checkpoint: LockCheckpoint) {
        self.state = checkpoint.0;
    }
}
