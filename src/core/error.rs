//! Error kinds for caller contract violations.
//!
//! Ordinary user mistakes (an invalid score, an empty player name) are not
//! errors: those operations report a status value instead. A `ScoreError`
//! means the caller asked for something its current handle or index does
//! not allow.

use thiserror::Error;

use super::phase::GamePhase;

/// Contract violation raised by a session operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Operation called outside the phase that allows it.
    #[error("{operation} is not allowed during the {phase} phase")]
    PhaseViolation {
        operation: &'static str,
        phase: GamePhase,
    },

    /// Player or row index past the end of the roster or ledger.
    #[error("{target} index {index} out of range (len {len})")]
    IndexOutOfRange {
        target: &'static str,
        index: usize,
        len: usize,
    },

    /// A `ScoringRules` value that play cannot run under.
    #[error("invalid scoring rules: {field} {reason}")]
    InvalidRules {
        field: &'static str,
        reason: &'static str,
    },

    /// Start requested with too few players.
    #[error("at least {required} player(s) required to start, found {actual}")]
    NotEnoughPlayers { required: usize, actual: usize },
}

/// Result alias for session operations.
pub type Result<T> = std::result::Result<T, ScoreError>;
