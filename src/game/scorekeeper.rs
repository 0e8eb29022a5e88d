//! Runtime-checked session facade.
//!
//! Presentation layers that keep one session value and dispatch on a phase
//! tag use `Scorekeeper`. It wraps the same `ScoreSheet` as the typed
//! handles and answers out-of-phase calls with `PhaseViolation`.

use super::handles::GamePlay;
use super::sheet::{ScoreSheet, TurnOutcome, UndoOutcome};
use crate::core::error::Result;
use crate::core::{GamePhase, PlayerId, ScoreError, ScoringRules};
use crate::ledger::LedgerSnapshot;

const LOG_TARGET: &str = "ten_thousand::phase";

/// One scoring session with a runtime phase tag.
#[derive(Clone, Debug, Default)]
pub struct Scorekeeper {
    phase: GamePhase,
    sheet: ScoreSheet,
}

impl Scorekeeper {
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
            phase: GamePhase::New,
            sheet: ScoreSheet::new(rules)?,
        })
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Read-only session state.
    #[must_use]
    pub fn sheet(&self) -> &ScoreSheet {
        &self.sheet
    }

    // === Phase transitions ===

    /// `New` → `PlayerCreation`.
    pub fn begin_player_creation(&mut self) -> Result<()> {
        self.require(self.phase == GamePhase::New, "begin_player_creation")?;
        self.advance();
        Ok(())
    }

    /// `PlayerCreation` → `Started`. Resets the turn cursor.
    pub fn start_game(&mut self) -> Result<()> {
        self.require(self.phase.allows_roster_edits(), "start_game")?;
        self.sheet.start()?;
        self.advance();
        Ok(())
    }

    // === Roster ===

    /// Add a player. `Ok(None)` if the name is empty.
    pub fn add_player(&mut self, name: &str) -> Result<Option<PlayerId>> {
        self.require(self.phase.allows_roster_edits(), "add_player")?;
        Ok(self.sheet.add_player(name))
    }

    /// Remove the player at `index` and their ledger column.
    pub fn remove_player(&mut self, index: usize) -> Result<String> {
        self.require(self.phase.allows_roster_edits(), "remove_player")?;
        self.sheet.remove_player(PlayerId::new(index))
    }

    // === Scoring ===

    /// Submit the active player's turn score.
    pub fn submit_score(&mut self, delta: i64) -> Result<TurnOutcome> {
        self.require(self.phase.allows_scoring(), "submit_score")?;
        Ok(self.sheet.submit_score(delta))
    }

    /// Record a miss, applying the miss penalty on a streak.
    pub fn report_miss(&mut self) -> Result<TurnOutcome> {
        self.require(self.phase.allows_scoring(), "report_miss")?;
        Ok(self.sheet.report_miss())
    }

    /// Revert the latest ledger change.
    pub fn undo(&mut self) -> Result<UndoOutcome> {
        self.require(self.phase.allows_scoring(), "undo")?;
        Ok(self.sheet.undo())
    }

    /// Overwrite a recorded cell with a new valid score.
    pub fn amend_score(&mut self, round: usize, player: usize, value: i64) -> Result<bool> {
        self.require(self.phase.allows_scoring(), "amend_score")?;
        self.sheet.amend_score(round, PlayerId::new(player), value)
    }

    // === Read side ===

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

    fn require(&self, allowed: bool, operation: &'static str) -> Result<()> {
        if allowed {
            Ok(())
        } else {
            Err(ScoreError::PhaseViolation {
                operation,
                phase: self.phase,
            })
        }
    }

    fn advance(&mut self) {
        if let Some(phase) = self.phase.next() {
            tracing::info!(target: LOG_TARGET, %phase, players = self.sheet.player_count(), "phase changed");
            self.phase = phase;
        }
    }
}

impl From<GamePlay> for Scorekeeper {
    fn from(play: GamePlay) -> Self {
        Self {
            phase: GamePhase::Started,
            sheet: play.into_sheet(),
        }
    }
}
