use vault::{LockState, LockStep, Rotation, ScriptedSecrets, SecretSource};

/// `[{CW,3},{CCW,2},{CW,1}]`
pub fn scenario_lock() -> LockState {
    LockState::new(vec![
        LockStep::new(Rotation::Cw, 3),
        LockStep::new(Rotation::Ccw, 2),
        LockStep::new(Rotation::Cw, 1),
    ])
    .expect("valid scenario secret")
}

/// `[{CCW,9},{CW,9},{CCW,9}]`, distinguishable from the scenario lock
pub fn second_lock() -> LockState {
    LockState::new(vec![
        LockStep::new(Rotation::Ccw, 9),
        LockStep::new(Rotation::Cw, 9),
        LockStep::new(Rotation::Ccw, 9),
    ])
    .expect("valid second secret")
}

pub fn one_step(direction: Rotation, count: u8) -> LockState {
    LockState::new(vec![LockStep::new(direction, count)]).expect("valid one-step secret")
}

pub fn scripted(locks: impl IntoIterator<Item = LockState>) -> Box<dyn SecretSource> {
    Box::new(ScriptedSecrets::new(locks))
}
