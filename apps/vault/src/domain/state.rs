use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::domain::rotation::Rotation;
use crate::domain::rules::REQUIRED_COUNT_RANGE;
use crate::errors::domain::{DomainError, ValidationKind};

/// One segment of the secret: turn `required_direction` exactly
/// `required_count` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockStep {
    pub required_direction: Rotation,
    pub required_count: u8,
}

impl LockStep {
    pub fn new(required_direction: Rotation, required_count: u8) -> Self {
        Self {
            required_direction,
            required_count,
        }
    }
}

/// Full secret plus the progress cursor.
///
/// - `active_step_index` is in `0..=steps.len()`; `steps.len()` means solved.
/// - While unsolved, `progress_in_active_step < steps[active_step_index].required_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockState {
    pub(crate) steps: Vec<LockStep>,
    pub(crate) active_step_index: usize,
    pub(crate) progress_in_active_step: u8,
}

impl LockState {
    /// Build an unsolved lock from an explicit secret.
    pub fn new(steps: Vec<LockStep>) -> Result<Self, DomainError> {
        if steps.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptyCombination,
                "A combination needs at least one step",
            ));
        }
        if let Some((i, step)) = steps
            .iter()
            .enumerate()
            .find(|(_, s)| !REQUIRED_COUNT_RANGE.contains(&s.required_count))
        {
            return Err(DomainError::validation(
                ValidationKind::RequiredCountOutOfRange,
                format!(
                    "Step {} requires {} turns; must be {}..={}",
                    i + 1,
                    step.required_count,
                    REQUIRED_COUNT_RANGE.start(),
                    REQUIRED_COUNT_RANGE.end()
                ),
            ));
        }
        Ok(Self::fresh(steps))
    }

    /// Generator path; counts are already in range by construction.
    pub(crate) fn fresh(steps: Vec<LockStep>) -> Self {
        Self {
            steps,
            active_step_index: 0,
            progress_in_active_step: 0,
        }
    }

    pub fn steps(&self) -> &[LockStep] {
        &self.steps
    }

    pub fn active_step_index(&self) -> usize {
        self.active_step_index
    }

    pub fn progress_in_active_step(&self) -> u8 {
        self.progress_in_active_step
    }

    /// Step the next turn is matched against, or `None` once solved.
    pub fn active_step(&self) -> Option<&LockStep> {
        self.steps.get(self.active_step_index)
    }

    pub fn is_solved(&self) -> bool {
        self.active_step_index >= self.steps.len()
    }

    /// `(active_step_index, progress_in_active_step)`, ordered lexicographically.
    pub fn cursor(&self) -> (usize, u8) {
        (self.active_step_index, self.progress_in_active_step)
    }

    /// Secret rendered as `3 CW, 2 CCW, 1 CW`.
    pub fn describe_secret(&self) -> String {
        self.steps
            .iter()
            .map(|s| format!("{} {}", s.required_count, s.required_direction))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Display for LockState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "[{}]", self.describe_secret())
    }
}
