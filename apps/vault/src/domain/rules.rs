use std::ops::RangeInclusive;

use crate::domain::rotation::Rotation;

/// Steps in a secret unless configured otherwise.
pub const DEFAULT_STEP_COUNT: usize = 3;

/// Upper bound accepted from configuration.
pub const MAX_STEP_COUNT: usize = 16;

pub const MIN_REQUIRED_COUNT: u8 = 1;
pub const MAX_REQUIRED_COUNT: u8 = 9;

/// Inclusive range every step's repeat count is drawn from.
pub const REQUIRED_COUNT_RANGE: RangeInclusive<u8> = MIN_REQUIRED_COUNT..=MAX_REQUIRED_COUNT;

/// Direction required by the step at `step_index`.
///
/// Steps alternate starting clockwise; neighbouring steps never share a
/// direction.
#[inline]
pub fn direction_for_step(step_index: usize) -> Rotation {
    if step_index % 2 == 0 {
        Rotation::Cw
    } else {
        Rotation::Ccw
    }
}
