use serde::Serialize;

/// Turn bookkeeping owned by the orchestrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TurnSession {
    /// True exactly while a success or failure sequence is in flight.
    pub is_busy: bool,
    /// Wrong turns since the last unlock.
    pub failed_attempts: u32,
    /// Turns handed to the matcher (voided turns included).
    pub turns_evaluated: u64,
    /// Signals discarded because a sequence was in flight.
    pub signals_dropped: u64,
}
