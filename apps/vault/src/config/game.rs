use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::rules::{DEFAULT_STEP_COUNT, MAX_STEP_COUNT};
use crate::error::AppError;

/// How long the reward effect plays by default.
pub const DEFAULT_REWARD_DURATION: Duration = Duration::from_secs(5);

/// Per-phase bound on awaited animations.
pub const DEFAULT_SEQUENCE_TIMEOUT: Duration = Duration::from_secs(30);

/// Runtime settings for one vault game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Steps per secret
    pub step_count: usize,
    /// How long the reward effect plays after the door opens
    pub reward_duration: Duration,
    /// Bound on each awaited animation phase; `None` waits forever
    pub sequence_timeout: Option<Duration>,
    /// Seed for reproducible secrets; `None` uses OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            step_count: DEFAULT_STEP_COUNT,
            reward_duration: DEFAULT_REWARD_DURATION,
            sequence_timeout: Some(DEFAULT_SEQUENCE_TIMEOUT),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Builds the configuration from `VAULT_*` environment variables.
    ///
    /// Unset variables fall back to defaults; malformed ones are errors.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let step_count = optional_var::<usize>("VAULT_STEP_COUNT")?
            .unwrap_or(defaults.step_count);
        if !(1..=MAX_STEP_COUNT).contains(&step_count) {
            return Err(AppError::config(format!(
                "VAULT_STEP_COUNT must be 1..={MAX_STEP_COUNT}, got {step_count}"
            )));
        }

        let reward_duration = optional_var::<u64>("VAULT_REWARD_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.reward_duration);

        // 0 disables the timeout entirely
        let sequence_timeout = match optional_var::<u64>("VAULT_SEQUENCE_TIMEOUT_MS")? {
            Some(0) => None,
            Some(ms) => Some(Duration::from_millis(ms)),
            None => defaults.sequence_timeout,
        };

        let seed = optional_var::<u64>("VAULT_SEED")?;

        Ok(Self {
            step_count,
            reward_duration,
            sequence_timeout,
            seed,
        })
    }
}

/// Parse an optional environment variable, erroring only when it is set but malformed
fn optional_var<T: FromStr>(key: &str) -> Result<Option<T>, AppError> {
    match env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("{key} has an invalid value: '{raw}'"))),
        Err(_) => Ok(None),
    }
}
