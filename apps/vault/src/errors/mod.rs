//! Error handling for the vault lock.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
