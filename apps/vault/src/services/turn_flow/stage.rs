//! Presentation collaborators driven by the turn orchestrator.
//!
//! Implementations live outside the core (terminal driver, simulator, a
//! renderer). Every awaitable method resolves once its visual transition
//! has finished.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{AppError, Collaborator};

#[async_trait]
pub trait DoorAnimator: Send + Sync {
    async fn open_door(&self);
    async fn close_door(&self);
}

#[async_trait]
pub trait HandleAnimator: Send + Sync {
    /// Spin wildly, then settle back at neutral rotation.
    async fn chaotic_spin(&self);
}

#[async_trait]
pub trait RewardEffect: Send + Sync {
    /// Play the looping effect for `duration`, then stop it.
    async fn play(&self, duration: Duration);
}

pub trait InputGate: Send + Sync {
    fn set_enabled(&self, enabled: bool);
}

pub trait CounterDisplay: Send + Sync {
    fn set_count(&self, count: u32);
}

/// Bundle of collaborators an orchestrator drives.
///
/// Door, handle, shadow and reward are optional so a stage can exist before
/// its visuals are loaded. Input gate and counter display are always present.
#[derive(Clone)]
pub struct Stage {
    pub door: Option<Arc<dyn DoorAnimator>>,
    pub handle: Option<Arc<dyn HandleAnimator>>,
    /// Spins alongside the handle when present.
    pub handle_shadow: Option<Arc<dyn HandleAnimator>>,
    pub reward: Option<Arc<dyn RewardEffect>>,
    pub input: Arc<dyn InputGate>,
    pub counter: Arc<dyn CounterDisplay>,
}

impl Stage {
    /// Stage with only the always-present sinks attached.
    pub fn new(input: Arc<dyn InputGate>, counter: Arc<dyn CounterDisplay>) -> Self {
        Self {
            door: None,
            handle: None,
            handle_shadow: None,
            reward: None,
            input,
            counter,
        }
    }

    /// Fully populated stage whose animations complete immediately.
    pub fn headless() -> Self {
        let headless = Arc::new(Headless);
        Self::new(headless.clone(), headless.clone())
            .with_door(headless.clone())
            .with_handle(headless.clone())
            .with_reward(headless)
    }

    pub fn with_door(mut self, door: Arc<dyn DoorAnimator>) -> Self {
        self.door = Some(door);
        self
    }

    pub fn with_handle(mut self, handle: Arc<dyn HandleAnimator>) -> Self {
        self.handle = Some(handle);
        self
    }

    pub fn with_handle_shadow(mut self, shadow: Arc<dyn HandleAnimator>) -> Self {
        self.handle_shadow = Some(shadow);
        self
    }

    pub fn with_reward(mut self, reward: Arc<dyn RewardEffect>) -> Self {
        self.reward = Some(reward);
        self
    }

    pub fn require_door(&self) -> Result<Arc<dyn DoorAnimator>, AppError> {
        self.door
            .clone()
            .ok_or(AppError::missing(Collaborator::Door))
    }

    pub fn require_handle(&self) -> Result<Arc<dyn HandleAnimator>, AppError> {
        self.handle
            .clone()
            .ok_or(AppError::missing(Collaborator::Handle))
    }
}

/// No-op collaborators for simulations and tests.
pub struct Headless;

#[async_trait]
impl DoorAnimator for Headless {
    async fn open_door(&self) {}
    async fn close_door(&self) {}
}

#[async_trait]
impl HandleAnimator for Headless {
    async fn chaotic_spin(&self) {}
}

#[async_trait]
impl RewardEffect for Headless {
    async fn play(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

impl InputGate for Headless {
    fn set_enabled(&self, _enabled: bool) {}
}

impl CounterDisplay for Headless {
    fn set_count(&self, _count: u32) {}
}
