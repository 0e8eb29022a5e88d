//! Scoring sessions.
//!
//! A session is one `ScoreSheet` (roster, ledger, turn cursor, rules)
//! reached through one of two front doors:
//!
//! - Typed handles: `NewGame` → `PlayerSetup` → `GamePlay`. Each phase
//!   exposes only its own operations.
//! - `Scorekeeper`: a single value with a runtime phase tag, returning
//!   `ScoreError::PhaseViolation` for out-of-phase calls.
//!
//! Both route every mutation through the same sheet methods, so scoring,
//! penalty, and undo behave identically.
//!
//! ## Known quirk: penalty skips a turn
//!
//! The miss penalty goes through the ordinary turn-advance step. After a
//! penalized miss the cursor has moved twice, so the next player in the
//! roster is skipped. Undo reverts one ledger step only and does not
//! restore the skipped turn.

pub mod handles;
pub mod scorekeeper;
pub mod sheet;

pub use handles::{GamePlay, NewGame, PlayerSetup, StartRejected};
pub use scorekeeper::Scorekeeper;
pub use sheet::{ScoreEntry, ScoreSheet, TurnOutcome, UndoOutcome};
