//! Core engine types: players, turn cursor, phase, configuration, errors.
//!
//! These are the value types the ledger and session are built from. None
//! of them mutates anything beyond itself.

pub mod config;
pub mod error;
pub mod phase;
pub mod player;
pub mod turn;

pub use config::ScoringRules;
pub use error::{Result, ScoreError};
pub use phase::GamePhase;
pub use player::{PlayerId, Roster};
pub use turn::TurnCursor;
