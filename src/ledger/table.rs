//! The ledger matrix and its read-only snapshot.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::totals::floored_totals;
use crate::core::PlayerId;

/// One round of deltas, one cell per player column.
pub type Round = Vector<i64>;

/// Shape-synchronized matrix of raw score deltas.
///
/// All rows have the same width. Column edits touch every row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    rows: Vector<Round>,
}

impl ScoreLedger {
    /// Create an empty ledger (no rows, no columns).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of player columns (0 if there are no rows).
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.back().map_or(0, Vector::len)
    }

    /// Index of the last row, which receives new scores.
    #[must_use]
    pub fn last_row_index(&self) -> Option<usize> {
        self.rows.len().checked_sub(1)
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &Round> {
        self.rows.iter()
    }

    /// Get a single cell.
    #[must_use]
    pub fn cell(&self, row: usize, player: PlayerId) -> Option<i64> {
        self.rows.get(row)?.get(player.index()).copied()
    }

    /// A player's column, top to bottom.
    #[must_use]
    pub fn column(&self, player: PlayerId) -> Vec<i64> {
        self.rows
            .iter()
            .filter_map(|row| row.get(player.index()).copied())
            .collect()
    }

    // === Shape ===

    /// Add a zero column on the right.
    ///
    /// An empty ledger gets its first row, `[0]`.
    pub fn push_column(&mut self) {
        if self.rows.is_empty() {
            self.rows.push_back(Vector::unit(0));
        } else {
            for row in self.rows.iter_mut() {
                row.push_back(0);
            }
        }
    }

    /// Delete a column from every row.
    ///
    /// Returns false (and changes nothing) if the column does not exist.
    pub fn remove_column(&mut self, player: PlayerId) -> bool {
        if player.index() >= self.width() {
            return false;
        }
        for row in self.rows.iter_mut() {
            row.remove(player.index());
        }
        true
    }

    /// Append a row of zeros as wide as the ledger.
    pub fn push_round(&mut self) {
        let width = self.width();
        self.rows.push_back(std::iter::repeat(0).take(width).collect());
    }

    /// Remove and return the last row.
    pub fn pop_round(&mut self) -> Option<Round> {
        self.rows.pop_back()
    }

    // === Cells ===

    /// Add `delta` to a cell, returning the new value. Saturates at the
    /// `i64` bounds.
    pub fn add_to_cell(&mut self, row: usize, player: PlayerId, delta: i64) -> Option<i64> {
        let cell = self.rows.get_mut(row)?.get_mut(player.index())?;
        *cell = cell.saturating_add(delta);
        Some(*cell)
    }

    /// Overwrite a cell, returning the previous value.
    pub fn set_cell(&mut self, row: usize, player: PlayerId, value: i64) -> Option<i64> {
        let cell = self.rows.get_mut(row)?.get_mut(player.index())?;
        Some(std::mem::replace(cell, value))
    }

    // === Read side ===

    /// Per-player totals with floor-at-zero accumulation.
    #[must_use]
    pub fn totals(&self) -> Vec<i64> {
        floored_totals(self.rows.iter(), self.width())
    }

    /// O(1) read-only view of all rows.
    #[must_use]
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            rows: self.rows.clone(),
        }
    }
}

/// Read-only copy of the ledger rows for rendering.
///
/// Shares structure with the live ledger; later mutations are not visible.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    rows: Vector<Round>,
}

impl LedgerSnapshot {
    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &Round> {
        self.rows.iter()
    }

    /// Get a single cell.
    #[must_use]
    pub fn cell(&self, row: usize, player: PlayerId) -> Option<i64> {
        self.rows.get(row)?.get(player.index()).copied()
    }

    /// Plain nested vectors, row-major.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Vec<i64>> {
        self.rows
            .iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: usize) -> PlayerId {
        PlayerId::new(i)
    }

    #[test]
    fn test_first_column_creates_first_row() {
        let mut ledger = ScoreLedger::new();
        assert_eq!(ledger.row_count(), 0);
        assert_eq!(ledger.width(), 0);

        ledger.push_column();
        assert_eq!(ledger.snapshot().to_vec(), vec![vec![0]]);

        ledger.push_column();
        assert_eq!(ledger.snapshot().to_vec(), vec![vec![0, 0]]);
    }

    #[test]
    fn test_push_column_widens_every_row() {
        let mut ledger = ScoreLedger::new();
        ledger.push_column();
        ledger.push_round();
        ledger.push_column();

        assert_eq!(ledger.snapshot().to_vec(), vec![vec![0, 0], vec![0, 0]]);
    }

    #[test]
    fn test_remove_column() {
        let mut ledger = ScoreLedger::new();
        ledger.push_column();
        ledger.push_column();
        ledger.push_column();
        ledger.set_cell(0, p(1), 400);

        assert!(ledger.remove_column(p(0)));
        assert_eq!(ledger.snapshot().to_vec(), vec![vec![400, 0]]);

        assert!(!ledger.remove_column(p(2)));
        assert_eq!(ledger.width(), 2);
    }

    #[test]
    fn test_remove_last_column_keeps_empty_row() {
        let mut ledger = ScoreLedger::new();
        ledger.push_column();
        assert!(ledger.remove_column(p(0)));

        assert_eq!(ledger.row_count(), 1);
        assert_eq!(ledger.width(), 0);

        ledger.push_column();
        assert_eq!(ledger.snapshot().to_vec(), vec![vec![0]]);
    }

    #[test]
    fn test_cells() {
        let mut ledger = ScoreLedger::new();
        ledger.push_column();
        ledger.push_column();

        assert_eq!(ledger.add_to_cell(0, p(1), 350), Some(350));
        assert_eq!(ledger.add_to_cell(0, p(1), -500), Some(-150));
        assert_eq!(ledger.set_cell(0, p(1), 0), Some(-150));
        assert_eq!(ledger.cell(0, p(1)), Some(0));

        assert_eq!(ledger.add_to_cell(1, p(0), 50), None);
        assert_eq!(ledger.set_cell(0, p(2), 50), None);
    }

    #[test]
    fn test_add_to_cell_saturates() {
        let big = (i64::MAX / 50) * 50;
        let mut ledger = ScoreLedger::new();
        ledger.push_column();

        ledger.add_to_cell(0, p(0), big);
        assert_eq!(ledger.add_to_cell(0, p(0), big), Some(i64::MAX));
        assert_eq!(ledger.add_to_cell(0, p(0), -500), Some(i64::MAX - 500));
    }

    #[test]
    fn test_rounds_and_column() {
        let mut ledger = ScoreLedger::new();
        ledger.push_column();
        ledger.push_column();
        ledger.add_to_cell(0, p(0), 400);
        ledger.push_round();
        ledger.add_to_cell(1, p(0), 350);

        assert_eq!(ledger.last_row_index(), Some(1));
        assert_eq!(ledger.column(p(0)), vec![400, 350]);
        assert_eq!(ledger.column(p(1)), vec![0, 0]);

        let popped = ledger.pop_round().unwrap();
        assert_eq!(popped.iter().copied().collect::<Vec<_>>(), vec![350, 0]);
        assert_eq!(ledger.row_count(), 1);
    }

    #[test]
    fn test_totals() {
        let mut ledger = ScoreLedger::new();
        ledger.push_column();
        ledger.push_column();
        ledger.add_to_cell(0, p(0), 400);
        ledger.push_round();
        ledger.add_to_cell(1, p(0), -500);
        ledger.push_round();
        ledger.add_to_cell(2, p(1), 400);

        assert_eq!(ledger.totals(), vec![0, 400]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut ledger = ScoreLedger::new();
        ledger.push_column();
        let snapshot = ledger.snapshot();

        ledger.add_to_cell(0, p(0), 400);
        ledger.push_round();

        assert_eq!(snapshot.to_vec(), vec![vec![0]]);
        assert_eq!(snapshot.cell(0, p(0)), Some(0));
        assert_eq!(ledger.cell(0, p(0)), Some(400));
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut ledger = ScoreLedger::new();
        ledger.push_column();
        ledger.add_to_cell(0, p(0), 400);

        let json = serde_json::to_string(&ledger.snapshot()).unwrap();
        assert_eq!(json, r#"{"rows":[[400]]}"#);
        let deserialized: LedgerSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, ledger.snapshot());
    }
}
