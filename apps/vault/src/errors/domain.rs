//! Domain-level error type used by the lock state machine.
//!
//! This error type knows nothing about presentation. The turn orchestrator
//! returns `Result<T, crate::error::AppError>` and converts from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation kinds for externally supplied lock data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    EmptyCombination,
    RequiredCountOutOfRange,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A secret or step failed validation
    Validation(ValidationKind, String),
    /// `check_input` was called on a solved lock that was never reset
    InvalidTurnSequence(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::InvalidTurnSequence(d) => write!(f, "invalid turn sequence: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn invalid_turn_sequence(detail: impl Into<String>) -> Self {
        Self::InvalidTurnSequence(detail.into())
    }
}
