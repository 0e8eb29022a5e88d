//! Floor-at-zero totals.
//!
//! Each player's running total is clamped at zero after every row, not
//! only at the end. A penalty can wipe a total out, and later scores
//! accumulate from zero again rather than from the negative true sum:
//!
//! ```
//! use ten_thousand::ledger::floored_totals;
//!
//! let rows: Vec<Vec<i64>> = vec![vec![400], vec![-500], vec![350]];
//! // 400 -> max(0, -100) = 0 -> 350, not 400 - 500 + 350 = 250.
//! assert_eq!(floored_totals(&rows, 1), vec![350]);
//! ```

/// Compute per-player totals over `rows`, flooring at zero after each row.
///
/// `width` is the roster size; cells past it are ignored and missing cells
/// count as zero. Sums saturate at `i64::MAX`.
pub fn floored_totals<'a, I, R>(rows: I, width: usize) -> Vec<i64>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = &'a i64>,
{
    let mut running: Vec<i64> = vec![0; width];
    for row in rows {
        for (total, &delta) in running.iter_mut().zip(row) {
            *total = total.saturating_add(delta).max(0);
        }
    }
    running
}
