//! # ten-thousand
//!
//! Score ledger and turn engine for the Ten-Thousand dice game.
//!
//! ## Design Principles
//!
//! 1. **One owned aggregate**: roster, ledger, and turn cursor live in a
//!    single `ScoreSheet` and change together, so the ledger is never out
//!    of shape with the roster.
//!
//! 2. **Phases as types**: `NewGame`, `PlayerSetup`, and `GamePlay` each
//!    expose only their own operations. `Scorekeeper` offers the same
//!    operations behind a runtime phase check for callers that need one
//!    value.
//!
//! 3. **Totals are derived**: per-player totals are recomputed from the
//!    ledger on every read with floor-at-zero accumulation.
//!
//! 4. **Reject, don't throw**: invalid scores and empty names come back as
//!    status values. Only caller contract violations are errors.
//!
//! ## Modules
//!
//! - `core`: Player IDs, roster, turn cursor, phase, rules, errors
//! - `ledger`: Ledger matrix, snapshots, totals
//! - `rules`: Score validator and miss penalty rule
//! - `game`: Session aggregate, phase handles, runtime facade
//!
//! ## Example
//!
//! ```
//! use ten_thousand::Scorekeeper;
//!
//! let mut keeper = Scorekeeper::new();
//! keeper.begin_player_creation().unwrap();
//! keeper.add_player("Anna").unwrap();
//! keeper.add_player("Ben").unwrap();
//! keeper.start_game().unwrap();
//!
//! keeper.submit_score(400).unwrap();
//! keeper.report_miss().unwrap();
//!
//! assert_eq!(keeper.totals(), vec![400, 0]);
//! assert_eq!(keeper.ledger_snapshot().to_vec(), vec![vec![400, 0], vec![0, 0]]);
//! ```

pub mod core;
pub mod game;
pub mod ledger;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GamePhase, PlayerId, Roster, ScoreError, ScoringRules, TurnCursor,
};

pub use crate::ledger::{floored_totals, LedgerSnapshot, Round, ScoreLedger};

pub use crate::rules::{is_miss_streak, is_valid_score};

pub use crate::game::{
    GamePlay, NewGame, PlayerSetup, ScoreEntry, ScoreSheet, Scorekeeper,
    StartRejected, TurnOutcome, UndoOutcome,
};
