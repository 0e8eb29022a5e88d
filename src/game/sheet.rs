//! The session aggregate: roster, ledger, and turn cursor owned together.
//!
//! `ScoreSheet` is the only thing that mutates the three, and every
//! mutation runs to completion inside one method, so the roster width and
//! ledger width always agree between calls. Its mutating methods are
//! crate-private; callers reach them through the phase handles.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Roster, ScoreError, ScoringRules, TurnCursor};
use crate::core::error::Result;
use crate::ledger::{LedgerSnapshot, Round, ScoreLedger};
use crate::rules::is_miss_streak;

const LOG_TARGET: &str = "ten_thousand::sheet";

/// One delta written to the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Player whose cell changed.
    pub player: PlayerId,
    /// Row the delta was added to.
    pub round: usize,
    /// Delta added.
    pub delta: i64,
}

/// Result of a scoring action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Score failed validation; nothing changed.
    Rejected { delta: i64 },
    /// Score recorded and the turn advanced.
    Recorded(ScoreEntry),
    /// Miss recorded, then the miss penalty recorded for the same player
    /// in the same row. The turn advanced twice.
    Penalized { miss: ScoreEntry, penalty: ScoreEntry },
}

impl TurnOutcome {
    /// Whether anything was written to the ledger.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, TurnOutcome::Rejected { .. })
    }

    /// Whether the miss penalty was applied.
    #[must_use]
    pub fn is_penalized(&self) -> bool {
        matches!(self, TurnOutcome::Penalized { .. })
    }
}

/// Result of an undo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    /// Ledger was empty.
    Nothing,
    /// Last row deleted and the cursor moved back one player.
    RoundRemoved(Round),
    /// Only one row exists: the cell under the cursor was reset to zero.
    CellCleared { player: PlayerId, previous: i64 },
}

/// Roster, ledger, turn cursor, and rules of one scoring session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    rules: ScoringRules,
    roster: Roster,
    ledger: ScoreLedger,
    cursor: TurnCursor,
}

impl ScoreSheet {
    /// Create an empty sheet with the given rules.
    ///
    /// Fails with `InvalidRules` if the rules cannot drive a game.
    pub fn new(rules: ScoringRules) -> Result<Self> {
        rules.validate()?;
        Ok(Self {
            rules,
            ..Self::default()
        })
    }

    // === Read side ===

    /// Scoring rules of this session.
    #[must_use]
    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Current roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    /// Live ledger.
    #[must_use]
    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// O(1) snapshot of all ledger rows.
    #[must_use]
    pub fn ledger_snapshot(&self) -> LedgerSnapshot {
        self.ledger.snapshot()
    }

    /// Per-player totals, aligned with the roster.
    #[must_use]
    pub fn totals(&self) -> Vec<i64> {
        self.ledger.totals()
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.cursor.player()
    }

    /// Name of the player whose turn it is.
    #[must_use]
    pub fn active_player_name(&self) -> Option<&str> {
        self.roster.get(self.cursor.player())
    }

    /// Index of the row currently being filled.
    #[must_use]
    pub fn round(&self) -> Option<usize> {
        self.ledger.last_row_index()
    }

    // === Roster ===

    /// Append a player and a zero column. Empty names are ignored.
    pub(crate) fn add_player(&mut self, name: &str) -> Option<PlayerId> {
        if name.is_empty() {
            tracing::debug!(target: LOG_TARGET, "ignored empty player name");
            return None;
        }
        let player = self.roster.push(name);
        self.ledger.push_column();
        tracing::debug!(target: LOG_TARGET, %player, name, "player added");
        Some(player)
    }

    /// Remove a player and their column from every row.
    pub(crate) fn remove_player(&mut self, player: PlayerId) -> Result<String> {
        let len = self.roster.len();
        let name = self.roster.remove(player).ok_or(ScoreError::IndexOutOfRange {
            target: "player",
            index: player.index(),
            len,
        })?;
        self.ledger.remove_column(player);
        tracing::debug!(target: LOG_TARGET, %player, name = %name, "player removed");
        Ok(name)
    }

    /// Check the roster size and put the cursor on the first player.
    pub(crate) fn start(&mut self) -> Result<()> {
        let required = self.rules.min_players.max(1);
        let actual = self.roster.len();
        if actual < required {
            return Err(ScoreError::NotEnoughPlayers { required, actual });
        }
        self.cursor.reset();
        Ok(())
    }

    // === Scoring ===

    /// Record a submitted score if it is valid.
    pub(crate) fn submit_score(&mut self, delta: i64) -> TurnOutcome {
        if !self.rules.is_valid_score(delta) {
            tracing::debug!(
                target: LOG_TARGET,
                player = %self.cursor.player(),
                delta,
                "score rejected"
            );
            return TurnOutcome::Rejected { delta };
        }
        TurnOutcome::Recorded(self.record(delta))
    }

    /// Record a miss for the active player, then the miss penalty if their
    /// recorded cells now end in a full streak of zeros.
    ///
    /// The penalty lands in the missing player's cell of the miss row, but
    /// the turn still advances a second time, so the next player loses
    /// their turn.
    pub(crate) fn report_miss(&mut self) -> TurnOutcome {
        let miss = self.record(0);

        let column = self.ledger.column(miss.player);
        let recorded = &column[..=miss.round];
        if !is_miss_streak(recorded.iter().copied(), self.rules.miss_streak) {
            return TurnOutcome::Recorded(miss);
        }

        let delta = self.rules.miss_penalty;
        self.ledger.add_to_cell(miss.round, miss.player, delta);
        self.advance_turn();
        tracing::debug!(
            target: LOG_TARGET,
            player = %miss.player,
            round = miss.round,
            delta,
            "miss penalty applied"
        );
        TurnOutcome::Penalized {
            miss,
            penalty: ScoreEntry {
                player: miss.player,
                round: miss.round,
                delta,
            },
        }
    }

    /// Revert the latest ledger change.
    pub(crate) fn undo(&mut self) -> UndoOutcome {
        let player_count = self.roster.len();
        match self.ledger.row_count() {
            0 => UndoOutcome::Nothing,
            1 => {
                let player = self.cursor.player();
                let previous = self.ledger.set_cell(0, player, 0).unwrap_or(0);
                tracing::debug!(target: LOG_TARGET, %player, previous, "undo cleared cell");
                UndoOutcome::CellCleared { player, previous }
            }
            _ => {
                let removed = self.ledger.pop_round().unwrap_or_default();
                self.cursor.rewind(player_count);
                tracing::debug!(
                    target: LOG_TARGET,
                    rows = self.ledger.row_count(),
                    player = %self.cursor.player(),
                    "undo removed round"
                );
                UndoOutcome::RoundRemoved(removed)
            }
        }
    }

    /// Overwrite a recorded cell with a new valid score.
    ///
    /// Returns `Ok(false)` if the value fails validation. The cursor does
    /// not move.
    pub(crate) fn amend_score(&mut self, round: usize, player: PlayerId, value: i64) -> Result<bool> {
        self.check_cell(round, player)?;
        if !self.rules.is_valid_score(value) {
            tracing::debug!(target: LOG_TARGET, %player, round, value, "amendment rejected");
            return Ok(false);
        }
        let previous = self.ledger.set_cell(round, player, value);
        tracing::debug!(target: LOG_TARGET, %player, round, value, ?previous, "score amended");
        Ok(true)
    }

    // === Internals ===

    /// Add `delta` to the active player's cell in the last row and advance.
    fn record(&mut self, delta: i64) -> ScoreEntry {
        let player = self.cursor.player();
        let round = self
            .ledger
            .last_row_index()
            .expect("ledger has a row once a player exists");
        self.ledger.add_to_cell(round, player, delta);
        self.advance_turn();
        tracing::debug!(target: LOG_TARGET, %player, round, delta, "score recorded");
        ScoreEntry { player, round, delta }
    }

    /// Open a new row when the last player has acted, then move the cursor.
    fn advance_turn(&mut self) {
        let player_count = self.roster.len();
        if self.cursor.is_last(player_count) {
            self.ledger.push_round();
        }
        self.cursor.advance(player_count);
    }

    fn check_cell(&self, round: usize, player: PlayerId) -> Result<()> {
        if round >= self.ledger.row_count() {
            return Err(ScoreError::IndexOutOfRange {
                target: "round",
                index: round,
                len: self.ledger.row_count(),
            });
        }
        if !self.roster.contains(player) {
            return Err(ScoreError::IndexOutOfRange {
                target: "player",
                index: player.index(),
                len: self.roster.len(),
            });
        }
        Ok(())
    }
}
