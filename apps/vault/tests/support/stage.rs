//! Recording fake collaborators for orchestrator tests.

use std::future::pending;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;
use vault::services::turn_flow::{
    CounterDisplay, DoorAnimator, HandleAnimator, InputGate, RewardEffect, Stage,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Input(bool),
    OpenDoor,
    CloseDoor,
    SpinStarted(&'static str),
    SpinFinished(&'static str),
    Reward(Duration),
    Count(u32),
}

/// Shared, ordered log of everything the stage was asked to do.
#[derive(Default)]
pub struct Recorder {
    events: Mutex<Vec<Event>>,
}

impl Recorder {
    pub fn push(&self, event: Event) {
        self.events.lock().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    /// Drain and return the log.
    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn count_of(&self, wanted: &Event) -> usize {
        self.events.lock().iter().filter(|e| *e == wanted).count()
    }
}

/// Input gate and counter display sink.
pub struct Sinks(pub Arc<Recorder>);

impl InputGate for Sinks {
    fn set_enabled(&self, enabled: bool) {
        self.0.push(Event::Input(enabled));
    }
}

impl CounterDisplay for Sinks {
    fn set_count(&self, count: u32) {
        self.0.push(Event::Count(count));
    }
}

pub struct FakeDoor {
    recorder: Arc<Recorder>,
    /// Opening never completes.
    stall_open: bool,
}

#[async_trait]
impl DoorAnimator for FakeDoor {
    async fn open_door(&self) {
        self.recorder.push(Event::OpenDoor);
        if self.stall_open {
            pending::<()>().await;
        }
    }

    async fn close_door(&self) {
        self.recorder.push(Event::CloseDoor);
    }
}

pub struct FakeSpinner {
    label: &'static str,
    recorder: Arc<Recorder>,
    /// When set, the spin finishes only after this is notified.
    gate: Option<Arc<Notify>>,
}

#[async_trait]
impl HandleAnimator for FakeSpinner {
    async fn chaotic_spin(&self) {
        self.recorder.push(Event::SpinStarted(self.label));
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.recorder.push(Event::SpinFinished(self.label));
    }
}

pub struct FakeReward(Arc<Recorder>);

#[async_trait]
impl RewardEffect for FakeReward {
    async fn play(&self, duration: Duration) {
        self.0.push(Event::Reward(duration));
        tokio::time::sleep(duration).await;
    }
}

/// Builds recording stages with individually controllable collaborators.
pub struct StageFixture {
    pub recorder: Arc<Recorder>,
    pub spin_gate: Arc<Notify>,
}

impl StageFixture {
    pub fn new() -> Self {
        Self {
            recorder: Arc::new(Recorder::default()),
            spin_gate: Arc::new(Notify::new()),
        }
    }

    /// Input gate and counter only; no visuals loaded.
    pub fn bare(&self) -> Stage {
        let sinks = Arc::new(Sinks(self.recorder.clone()));
        Stage::new(sinks.clone(), sinks)
    }

    pub fn door(&self) -> Arc<FakeDoor> {
        Arc::new(FakeDoor {
            recorder: self.recorder.clone(),
            stall_open: false,
        })
    }

    pub fn stalled_door(&self) -> Arc<FakeDoor> {
        Arc::new(FakeDoor {
            recorder: self.recorder.clone(),
            stall_open: true,
        })
    }

    pub fn handle(&self) -> Arc<FakeSpinner> {
        self.spinner("handle", false)
    }

    /// Handle whose spin waits on `spin_gate`.
    pub fn gated_handle(&self) -> Arc<FakeSpinner> {
        self.spinner("handle", true)
    }

    pub fn shadow(&self) -> Arc<FakeSpinner> {
        self.spinner("shadow", false)
    }

    pub fn reward(&self) -> Arc<FakeReward> {
        Arc::new(FakeReward(self.recorder.clone()))
    }

    /// Door, handle and reward, all completing promptly.
    pub fn full(&self) -> Stage {
        self.bare()
            .with_door(self.door())
            .with_handle(self.handle())
            .with_reward(self.reward())
    }

    fn spinner(&self, label: &'static str, gated: bool) -> Arc<FakeSpinner> {
        Arc::new(FakeSpinner {
            label,
            recorder: self.recorder.clone(),
            gate: gated.then(|| self.spin_gate.clone()),
        })
    }
}
