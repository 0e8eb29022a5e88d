//! Triple-miss penalty rule.
//!
//! After a miss, the player's recorded cells are inspected. When the last
//! `streak` of them are all zero the player earns the miss penalty. With
//! fewer than `streak` recorded cells the rule never fires.

/// Check whether the trailing `streak` values of a player's column are zero.
///
/// `recorded` is the player's column in ledger order, up to and including
/// the row the latest miss was written to.
///
/// ```
/// use ten_thousand::rules::is_miss_streak;
///
/// assert!(is_miss_streak([400, 0, 0, 0], 3));
/// assert!(!is_miss_streak([0, 0], 3));
/// assert!(!is_miss_streak([0, 400, 0], 3));
/// ```
#[must_use]
pub fn is_miss_streak<I>(recorded: I, streak: usize) -> bool
where
    I: IntoIterator<Item = i64>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut seen = 0;
    for value in recorded.into_iter().rev().take(streak) {
        if value != 0 {
            return false;
        }
        seen += 1;
    }
    seen == streak
}
