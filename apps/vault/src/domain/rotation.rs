//! Handle rotation direction.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// Direction of a single handle turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    #[serde(rename = "CW")]
    Cw,
    #[serde(rename = "CCW")]
    Ccw,
}

impl Rotation {
    pub fn opposite(self) -> Self {
        match self {
            Rotation::Cw => Rotation::Ccw,
            Rotation::Ccw => Rotation::Cw,
        }
    }

    /// Resolve a pointer press against the handle's horizontal position.
    ///
    /// Left of the handle turns counter-clockwise; right of it, or exactly
    /// on it, turns clockwise.
    pub fn from_pointer(pointer_x: f32, handle_x: f32) -> Self {
        if pointer_x < handle_x {
            Rotation::Ccw
        } else {
            Rotation::Cw
        }
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Rotation::Cw => write!(f, "CW"),
            Rotation::Ccw => write!(f, "CCW"),
        }
    }
}

impl FromStr for Rotation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cw" | "clockwise" | "r" | "right" => Ok(Rotation::Cw),
            "ccw" | "counterclockwise" | "counter-clockwise" | "l" | "left" => Ok(Rotation::Ccw),
            other => Err(DomainError::validation_other(format!(
                "unknown rotation '{other}'"
            ))),
        }
    }
}
