//! Score validity predicate.
//!
//! A turn either misses (zero) or clears the opening minimum on a multiple
//! of the score step. Penalty deltas are produced by the engine itself and
//! never pass through here.

use crate::core::config::{DEFAULT_OPENING_MINIMUM, DEFAULT_SCORE_STEP};

/// Check a submitted score under the default house rules.
///
/// ```
/// use ten_thousand::rules::is_valid_score;
///
/// assert!(is_valid_score(0));
/// assert!(is_valid_score(350));
/// assert!(!is_valid_score(300));
/// assert!(!is_valid_score(375));
/// assert!(!is_valid_score(-50));
/// ```
#[must_use]
pub fn is_valid_score(delta: i64) -> bool {
    check_score(delta, DEFAULT_OPENING_MINIMUM, DEFAULT_SCORE_STEP)
}

/// Check a submitted score against an explicit minimum and step.
///
/// A step of zero accepts only zero.
#[must_use]
pub fn check_score(delta: i64, opening_minimum: i64, score_step: i64) -> bool {
    delta == 0 || (delta >= opening_minimum && delta.checked_rem(score_step) == Some(0))
}
