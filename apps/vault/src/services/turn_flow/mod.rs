//! Turn orchestration - the single-flight gate between player signals and the lock.
//!
//! A signal is matched immediately. `Progressing` turns return at once;
//! `Wrong` and `Unlocked` turns run the failure or success sequence on the
//! stage's collaborators, during which further signals are dropped.

mod builder;
mod sequences;
mod session;
pub mod stage;

use parking_lot::{Mutex, RwLock};
use std::time::Duration;
use tracing::{debug, warn};

pub use builder::{build_orchestrator, OrchestratorBuilder};
pub use session::TurnSession;
pub use stage::{CounterDisplay, DoorAnimator, HandleAnimator, InputGate, RewardEffect, Stage};

use crate::domain::{CombinationMatcher, LockState, ProgressReport, Rotation, TurnOutcome};
use crate::error::{AppError, Collaborator};
use sequences::SequencePlan;

/// What a single `on_direction` call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnReport {
    /// Correct turn, lock still closed; no sequence ran.
    Progressing(ProgressReport),
    /// Wrong turn; the failure sequence ran and the lock was reset.
    Failed { failed_attempts: u32 },
    /// The success sequence ran and the lock was reset.
    Unlocked,
    /// A sequence was already in flight; the signal had no effect.
    Dropped,
    /// The outcome sequence could not run; the turn was voided.
    Aborted { missing: Collaborator },
}

struct TurnState {
    matcher: CombinationMatcher,
    session: TurnSession,
}

pub struct TurnOrchestrator {
    state: Mutex<TurnState>,
    stage: RwLock<Stage>,
    reward_duration: Duration,
    sequence_timeout: Option<Duration>,
}

impl TurnOrchestrator {
    /// Handle one directional signal.
    ///
    /// Errors only on a broken matcher contract; missing collaborators are
    /// reported as [`TurnReport::Aborted`].
    pub async fn on_direction(&self, direction: Rotation) -> Result<TurnReport, AppError> {
        let (plan, stage) = {
            let mut state = self.state.lock();
            if state.session.is_busy {
                state.session.signals_dropped += 1;
                debug!(%direction, "Sequence in flight; dropping signal");
                return Ok(TurnReport::Dropped);
            }

            let checkpoint = state.matcher.checkpoint();
            state.session.turns_evaluated += 1;
            let outcome = state.matcher.check_input(direction)?;
            if outcome == TurnOutcome::Progressing {
                let progress = state.matcher.describe_progress();
                debug!(%direction, %progress, "Turn accepted");
                return Ok(TurnReport::Progressing(progress));
            }

            let stage = self.stage.read().clone();
            let plan = match SequencePlan::prepare(outcome, &stage) {
                Ok(plan) => plan,
                Err(AppError::MissingCollaborator { collaborator }) => {
                    state.matcher.rollback(checkpoint);
                    warn!(
                        %direction,
                        ?outcome,
                        %collaborator,
                        code = "MISSING_COLLABORATOR",
                        "Outcome sequence aborted; turn voided"
                    );
                    return Ok(TurnReport::Aborted {
                        missing: collaborator,
                    });
                }
                Err(err) => {
                    state.matcher.rollback(checkpoint);
                    return Err(err);
                }
            };

            state.session.is_busy = true;
            (plan, stage)
        };

        Ok(self.run_sequence(plan, &stage).await)
    }

    /// Swap or attach collaborators, e.g. once visuals finish loading.
    ///
    /// An in-flight sequence keeps the collaborators it started with.
    pub fn update_stage(&self, update: impl FnOnce(&mut Stage)) {
        update(&mut *self.stage.write());
    }

    pub fn is_busy(&self) -> bool {
        self.state.lock().session.is_busy
    }

    pub fn failed_attempts(&self) -> u32 {
        self.state.lock().session.failed_attempts
    }

    pub fn session(&self) -> TurnSession {
        self.state.lock().session
    }

    pub fn progress(&self) -> ProgressReport {
        self.state.lock().matcher.describe_progress()
    }

    /// Copy of the current lock, secret included.
    pub fn lock_state(&self) -> LockState {
        self.state.lock().matcher.state().clone()
    }
}
