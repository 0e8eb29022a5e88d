//! Scoring configuration.
//!
//! `ScoringRules` carries the numbers the engine checks scores against:
//! - the opening minimum a scoring turn must reach,
//! - the step every scoring turn must land on,
//! - the penalty for a streak of misses and the streak length,
//! - the smallest roster that may start a game.
//!
//! The defaults are the house rules of Ten-Thousand.

use serde::{Deserialize, Serialize};

use super::error::{Result, ScoreError};

/// Minimum points for a scoring turn.
pub const DEFAULT_OPENING_MINIMUM: i64 = 350;

/// Every scoring turn is a multiple of this.
pub const DEFAULT_SCORE_STEP: i64 = 50;

/// Delta applied when a player misses `DEFAULT_MISS_STREAK` times in a row.
pub const DEFAULT_MISS_PENALTY: i64 = -500;

/// Consecutive misses that trigger the penalty.
pub const DEFAULT_MISS_STREAK: usize = 3;

/// Smallest roster that may start a game.
pub const DEFAULT_MIN_PLAYERS: usize = 1;

/// Scoring configuration for a session.
///
/// ## Example
///
/// ```
/// use ten_thousand::core::ScoringRules;
///
/// let rules = ScoringRules::default()
///     .with_opening_minimum(500)
///     .with_min_players(2);
///
/// assert!(rules.is_valid_score(550));
/// assert!(!rules.is_valid_score(450));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Smallest non-zero score a player may submit.
    pub opening_minimum: i64,

    /// Submitted scores must be a multiple of this.
    pub score_step: i64,

    /// Delta recorded on a miss streak. Never positive.
    pub miss_penalty: i64,

    /// Number of trailing zero cells that trigger the penalty.
    pub miss_streak: usize,

    /// Players required before the game may start.
    pub min_players: usize,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            opening_minimum: DEFAULT_OPENING_MINIMUM,
            score_step: DEFAULT_SCORE_STEP,
            miss_penalty: DEFAULT_MISS_PENALTY,
            miss_streak: DEFAULT_MISS_STREAK,
            min_players: DEFAULT_MIN_PLAYERS,
        }
    }
}

impl ScoringRules {
    /// Create the default house rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opening minimum.
    #[must_use]
    pub fn with_opening_minimum(mut self, minimum: i64) -> Self {
        assert!(minimum > 0, "Opening minimum must be positive");
        self.opening_minimum = minimum;
        self
    }

    /// Set the score step.
    #[must_use]
    pub fn with_score_step(mut self, step: i64) -> Self {
        assert!(step > 0, "Score step must be positive");
        self.score_step = step;
        self
    }

    /// Set the miss penalty.
    #[must_use]
    pub fn with_miss_penalty(mut self, penalty: i64) -> Self {
        assert!(penalty <= 0, "Miss penalty must not be positive");
        self.miss_penalty = penalty;
        self
    }

    /// Set the miss streak length.
    #[must_use]
    pub fn with_miss_streak(mut self, streak: usize) -> Self {
        assert!(streak > 0, "Miss streak must be at least 1");
        self.miss_streak = streak;
        self
    }

    /// Set the minimum number of players.
    #[must_use]
    pub fn with_min_players(mut self, min_players: usize) -> Self {
        assert!(min_players > 0, "Must have at least 1 player");
        self.min_players = min_players;
        self
    }

    /// Check every field, as the builder methods do.
    ///
    /// Rules built field by field skip the builder's asserts; sessions call
    /// this before accepting them.
    pub fn validate(&self) -> Result<()> {
        let invalid = |field, reason| Err(ScoreError::InvalidRules { field, reason });
        if self.opening_minimum <= 0 {
            return invalid("opening_minimum", "must be positive");
        }
        if self.score_step <= 0 {
            return invalid("score_step", "must be positive");
        }
        if self.miss_penalty > 0 {
            return invalid("miss_penalty", "must not be positive");
        }
        if self.miss_streak == 0 {
            return invalid("miss_streak", "must be at least 1");
        }
        if self.min_players == 0 {
            return invalid("min_players", "must be at least 1");
        }
        Ok(())
    }

    /// Check a submitted score against these rules.
    ///
    /// See [`crate::rules::validator`].
    #[must_use]
    pub fn is_valid_score(&self, delta: i64) -> bool {
        crate::rules::validator::check_score(delta, self.opening_minimum, self.score_step)
    }
}
