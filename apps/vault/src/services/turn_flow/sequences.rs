use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};

use super::stage::{DoorAnimator, HandleAnimator, RewardEffect, Stage};
use super::{TurnOrchestrator, TurnReport};
use crate::domain::TurnOutcome;
use crate::error::AppError;

/// Collaborators resolved for one outcome sequence before it starts.
pub(super) enum SequencePlan {
    Success {
        door: Arc<dyn DoorAnimator>,
        reward: Option<Arc<dyn RewardEffect>>,
    },
    Failure {
        /// Handle first, then its shadow when attached.
        spinners: Vec<Arc<dyn HandleAnimator>>,
    },
}

impl SequencePlan {
    /// Resolve what `outcome` needs from `stage`.
    ///
    /// Success needs the door and the handle; failure needs the handle.
    pub(super) fn prepare(outcome: TurnOutcome, stage: &Stage) -> Result<Self, AppError> {
        match outcome {
            TurnOutcome::Unlocked => {
                let door = stage.require_door()?;
                stage.require_handle()?;
                Ok(Self::Success {
                    door,
                    reward: stage.reward.clone(),
                })
            }
            TurnOutcome::Wrong => {
                let mut spinners = vec![stage.require_handle()?];
                spinners.extend(stage.handle_shadow.clone());
                Ok(Self::Failure { spinners })
            }
            TurnOutcome::Progressing => Err(AppError::internal(
                "no outcome sequence exists for a progressing turn",
            )),
        }
    }
}

/// Releases the busy flag if a sequence future is dropped before finishing.
struct BusyGuard<'a> {
    orchestrator: &'a TurnOrchestrator,
    stage: &'a Stage,
    armed: bool,
}

impl BusyGuard<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        warn!("Outcome sequence cancelled mid-flight; resetting lock");
        self.stage.input.set_enabled(true);
        let mut state = self.orchestrator.state.lock();
        state.matcher.reset();
        state.session.is_busy = false;
    }
}

impl TurnOrchestrator {
    /// Run a prepared sequence to completion, then reset and report.
    ///
    /// Caller has already set the busy flag.
    pub(super) async fn run_sequence(&self, plan: SequencePlan, stage: &Stage) -> TurnReport {
        let guard = BusyGuard {
            orchestrator: self,
            stage,
            armed: true,
        };

        stage.input.set_enabled(false);
        let unlocked = match plan {
            SequencePlan::Success { door, reward } => {
                info!("Lock opened; playing success sequence");
                self.run_phase("open_door", door.open_door()).await;
                match reward {
                    Some(reward) => {
                        self.run_phase("reward", reward.play(self.reward_duration))
                            .await;
                    }
                    None => info!("No reward effect attached; skipping reward phase"),
                }
                self.run_phase("close_door", door.close_door()).await;
                true
            }
            SequencePlan::Failure { spinners } => {
                info!(spinners = spinners.len(), "Wrong turn; playing failure sequence");
                let spins = join_all(spinners.iter().map(|s| s.chaotic_spin()));
                self.run_phase("chaotic_spin", spins).await;
                false
            }
        };
        stage.input.set_enabled(true);

        let failed_attempts = {
            let mut state = self.state.lock();
            state.matcher.reset();
            if unlocked {
                state.session.failed_attempts = 0;
            } else {
                state.session.failed_attempts += 1;
            }
            state.session.failed_attempts
        };
        stage.counter.set_count(failed_attempts);

        self.state.lock().session.is_busy = false;
        guard.disarm();

        info!(unlocked, failed_attempts, "Outcome sequence finished");
        if unlocked {
            TurnReport::Unlocked
        } else {
            TurnReport::Failed { failed_attempts }
        }
    }

    /// Await one phase, bounded by the configured sequence timeout.
    ///
    /// A phase that overruns is abandoned and the sequence moves on.
    async fn run_phase<F, T>(&self, phase: &'static str, fut: F)
    where
        F: Future<Output = T>,
    {
        match self.sequence_timeout {
            Some(limit) => {
                if tokio::time::timeout(limit, fut).await.is_err() {
                    warn!(
                        phase,
                        timeout_ms = limit.as_millis() as u64,
                        "Animation phase timed out; continuing sequence"
                    );
                }
            }
            None => {
                fut.await;
            }
        }
    }
}
