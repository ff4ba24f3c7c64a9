//! Test-only lock helpers for domain unit tests.

use crate::domain::{CombinationMatcher, LockState, LockStep, Rotation, ScriptedSecrets};

/// `[{CW,3},{CCW,2},{CW,1}]`
pub fn scenario_lock() -> LockState {
    LockState::new(vec![
        LockStep::new(Rotation::Cw, 3),
        LockStep::new(Rotation::Ccw, 2),
        LockStep::new(Rotation::Cw, 1),
    ])
    .expect("valid scenario secret")
}

/// Matcher whose first secret is `lock`; later resets draw seeded random secrets.
pub fn matcher_with(lock: LockState) -> CombinationMatcher {
    CombinationMatcher::new(Box::new(ScriptedSecrets::new([lock])))
}

/// Turns that solve `lock` from its current cursor.
pub fn solving_turns(lock: &LockState) -> Vec<Rotation> {
    let (index, progress) = lock.cursor();
    let mut turns = Vec::new();
    for (i, step) in lock.steps().iter().enumerate().skip(index) {
        let done = if i == index { progress } else { 0 };
        for _ in done..step.required_count {
            turns.push(step.required_direction);
        }
    }
    turns
}
