//! Scoring rules.
//!
//! Both rules are pure functions over plain numbers so the session can
//! apply them without borrowing anything else:
//! - `validator`: which submitted scores are legal
//! - `penalty`: when a run of misses earns the miss penalty

pub mod penalty;
pub mod validator;

pub use penalty::is_miss_streak;
pub use validator::is_valid_score;
