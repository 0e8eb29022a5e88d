//! Typed phase handles.
//!
//! Each phase is its own type offering only the operations that phase
//! allows. Transitions consume the handle, so a roster edit after the game
//! started, or a score before it, does not compile:
//!
//! ```
//! use ten_thousand::game::NewGame;
//!
//! let mut setup = NewGame::new().begin_player_creation();
//! setup.add_player("Anna");
//! setup.add_player("Ben");
//!
//! let mut play = setup.start_game().unwrap();
//! assert!(play.submit_score(400).is_accepted());
//! assert_eq!(play.totals(), vec![400, 0]);
//! ```

use thiserror::Error;

use super::sheet::{ScoreSheet, TurnOutcome, UndoOutcome};
use crate::core::error::Result;
use crate::core::{GamePhase, PlayerId, ScoreError, ScoringRules};
use crate::ledger::LedgerSnapshot;

const LOG_TARGET: &str = "ten_thousand::phase";

/// A session before player creation.
#[derive(Clone, Debug, Default)]
pub struct NewGame {
    sheet: ScoreSheet,
}

impl NewGame {
    /// New session with the default house rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// New session with custom rules.
    ///
    /// Fails with `InvalidRules` if a field is out of range.
    pub fn with_rules(rules: ScoringRules) -> Result<Self> {
        Ok(Self {
            sheet: ScoreSheet::new(rules)?,
        })
    }

    /// Open the roster for editing.
    #[must_use]
    pub fn begin_player_creation(self) -> PlayerSetup {
        tracing::info!(target: LOG_TARGET, phase = %GamePhase::PlayerCreation, "phase changed");
        PlayerSetup { sheet: self.sheet }
    }
}

/// A session during player creation: roster editable, no scoring.
#[derive(Clone, Debug)]
pub struct PlayerSetup {
    sheet: ScoreSheet,
}

impl PlayerSetup {
    /// Add a player. Empty names are ignored and return `None`.
    pub fn add_player(&mut self, name: &str) -> Option<PlayerId> {
        self.sheet.add_player(name)
    }

    /// Remove a player and their ledger column.
    pub fn remove_player(&mut self, player: PlayerId) -> Result<String> {
        self.sheet.remove_player(player)
    }

    /// Freeze the roster and start scoring with the first player.
    ///
    /// Fails with `NotEnoughPlayers` (handing the setup back) if the roster
    /// is smaller than the rules' minimum.
    pub fn start_game(mut self) -> std::result::Result<GamePlay, StartRejected> {
        match self.sheet.start() {
            Ok(()) => {
                tracing::info!(
                    target: LOG_TARGET,
                    phase = %GamePhase::Started,
                    players = self.sheet.player_count(),
                    "phase changed"
                );
                Ok(GamePlay { sheet: self.sheet })
            }
            Err(error) => Err(StartRejected { setup: self, error }),
        }
    }

    /// Read-only session state.
    #[must_use]
    pub fn sheet(&self) -> &ScoreSheet {
        &self.sheet
    }

    /// Snapshot of the ledger rows.
    #[must_use]
    pub fn ledger_snapshot(&self) -> LedgerSnapshot {
        self.sheet.ledger_snapshot()
    }
}

/// Start refused; carries the setup handle back to the caller.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct StartRejected {
    pub setup: PlayerSetup,
    pub error: ScoreError,
}

/// A session in play: roster frozen, scoring and undo enabled.
#[derive(Clone, Debug)]
pub struct GamePlay {
    sheet: ScoreSheet,
}

impl GamePlay {
    /// Submit the active player's turn score.
    pub fn submit_score(&mut self, delta: i64) -> TurnOutcome {
        self.sheet.submit_score(delta)
    }

    /// Record a miss for the active player, applying the miss penalty on a
    /// streak.
    pub fn report_miss(&mut self) -> TurnOutcome {
        self.sheet.report_miss()
    }

    /// Revert the latest ledger change.
    pub fn undo(&mut self) -> UndoOutcome {
        self.sheet.undo()
    }

    /// Overwrite a recorded cell with a new valid score.
    pub fn amend_score(&mut self, round: usize, player: PlayerId, value: i64) -> Result<bool> {
        self.sheet.amend_score(round, player, value)
    }

    /// Per-player totals, aligned with the roster.
    #[must_use]
    pub fn totals(&self) -> Vec<i64> {
        self.sheet.totals()
    }

    /// Snapshot of the ledger rows.
    #[must_use]
    pub fn ledger_snapshot(&self) -> LedgerSnapshot {
        self.sheet.ledger_snapshot()
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.sheet.active_player()
    }

    /// Read-only session state.
    #[must_use]
    pub fn sheet(&self) -> &ScoreSheet {
        &self.sheet
    }

    pub(crate) fn into_sheet(self) -> ScoreSheet {
        self.sheet
    }
}
