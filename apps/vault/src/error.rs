use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::errors::domain::{DomainError, ValidationKind};

/// Presentation collaborators an outcome sequence may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    Door,
    Handle,
}

impl Display for Collaborator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Collaborator::Door => write!(f, "door"),
            Collaborator::Handle => write!(f, "handle"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("Invalid turn sequence: {detail}")]
    InvalidTurnSequence { detail: String },
    #[error("Missing collaborator: {collaborator}")]
    MissingCollaborator { collaborator: Collaborator },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable machine-readable code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::InvalidTurnSequence { .. } => "INVALID_TURN_SEQUENCE",
            AppError::MissingCollaborator { .. } => "MISSING_COLLABORATOR",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Internal { .. } => "INTERNAL",
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn missing(collaborator: Collaborator) -> Self {
        Self::MissingCollaborator { collaborator }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::EmptyCombination => "EMPTY_COMBINATION",
                    ValidationKind::RequiredCountOutOfRange => "REQUIRED_COUNT_OUT_OF_RANGE",
                    ValidationKind::Other(_) => "VALIDATION_ERROR",
                };
                AppError::Validation { code, detail }
            }
            DomainError::InvalidTurnSequence(detail) => AppError::InvalidTurnSequence { detail },
        }
    }
}
