//! Terminal-backed collaborators for the headless driver.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use vault::services::turn_flow::{
    CounterDisplay, DoorAnimator, HandleAnimator, InputGate, RewardEffect, Stage,
};

const DOOR_SWING: Duration = Duration::from_millis(600);
const SPIN: Duration = Duration::from_millis(1500);

pub struct TerminalStage {
    input_enabled: AtomicBool,
}

impl TerminalStage {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            input_enabled: AtomicBool::new(false),
        })
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled.load(Ordering::SeqCst)
    }

    pub fn stage(self: &Arc<Self>) -> Stage {
        Stage::new(self.clone(), self.clone())
            .with_door(self.clone())
            .with_handle(self.clone())
            .with_reward(self.clone())
    }
}

#[async_trait]
impl DoorAnimator for TerminalStage {
    async fn open_door(&self) {
        println!("The vault door swings open...");
        sleep(DOOR_SWING).await;
    }

    async fn close_door(&self) {
        println!("The vault door swings shut.");
        sleep(DOOR_SWING).await;
    }
}

#[async_trait]
impl HandleAnimator for TerminalStage {
    async fn chaotic_spin(&self) {
        println!("Wrong way! The handle spins wildly...");
        sleep(SPIN).await;
        println!("The handle settles back at zero.");
    }
}

#[async_trait]
impl RewardEffect for TerminalStage {
    async fn play(&self, duration: Duration) {
        println!("* The treasure sparkles *");
        sleep(duration).await;
    }
}

impl InputGate for TerminalStage {
    fn set_enabled(&self, enabled: bool) {
        self.input_enabled.store(enabled, Ordering::SeqCst);
    }
}

impl CounterDisplay for TerminalStage {
    fn set_count(&self, count: u32) {
        println!("[failed attempts: {count}]");
    }
}
