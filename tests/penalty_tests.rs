//! Miss penalty integration tests.
//!
//! These tests pin the triple-miss penalty, including the extra turn
//! advance it causes.

mod common;

use common::started_play;
use ten_thousand::{NewGame, PlayerId, ScoreEntry, ScoringRules, TurnOutcome, UndoOutcome};

const A: PlayerId = PlayerId::new(0);
const B: PlayerId = PlayerId::new(1);

/// Third miss in a row records -500 in the same row and skips the next
/// player.
#[test]
fn test_triple_miss_penalty_two_players() {
    common::init_tracing();
    let mut play = started_play(&["A", "B"]);

    assert!(!play.report_miss().is_penalized());
    play.submit_score(400);
    assert!(!play.report_miss().is_penalized());
    play.submit_score(400);

    let outcome = play.report_miss();
    assert_eq!(
        outcome,
        TurnOutcome::Penalized {
            miss: ScoreEntry { player: A, round: 2, delta: 0 },
            penalty: ScoreEntry { player: A, round: 2, delta: -500 },
        }
    );

    assert_eq!(play.sheet().ledger().column(A), vec![0, 0, -500, 0]);
    assert_eq!(
        play.ledger_snapshot().to_vec(),
        vec![vec![0, 400], vec![0, 400], vec![-500, 0], vec![0, 0]]
    );
    // B's turn in round 2 was skipped by the second advance.
    assert_eq!(play.active_player(), A);
    assert_eq!(play.totals(), vec![0, 800]);
}

/// The penalty wipes an accumulated total, and later scores build from
/// zero.
#[test]
fn test_penalty_floors_total() {
    let mut play = started_play(&["A"]);

    play.submit_score(400);
    play.report_miss();
    play.report_miss();
    assert!(play.report_miss().is_penalized());
    assert_eq!(play.totals(), vec![0]);

    // Rows are [400], [0], [0], [-500], [0], [0]; the next score lands in
    // the last one.
    play.submit_score(350);
    assert_eq!(play.totals(), vec![350]);
}

/// A score between misses restarts the streak.
#[test]
fn test_scoring_breaks_streak() {
    let mut play = started_play(&["A"]);

    play.report_miss();
    play.report_miss();
    play.submit_score(400);
    assert!(!play.report_miss().is_penalized());
    assert!(!play.report_miss().is_penalized());
    assert!(play.report_miss().is_penalized());
}

/// A penalty cell is non-zero and breaks the streak, but the round skipped
/// by the second advance is never written and counts as a zero.
#[test]
fn test_penalty_row_and_skipped_round() {
    let mut play = started_play(&["A"]);

    for _ in 0..3 {
        play.report_miss();
    }
    assert_eq!(play.sheet().ledger().column(A), vec![0, 0, -500, 0, 0]);

    // The next miss lands in round 4; round 3 was skipped.
    assert!(!play.report_miss().is_penalized());
    assert!(play.report_miss().is_penalized());
    assert_eq!(play.sheet().ledger().column(A), vec![0, 0, -500, 0, 0, -500, 0, 0]);
}

/// A submitted zero is not a miss report and never triggers the penalty.
#[test]
fn test_submitted_zeros_do_not_penalize() {
    let mut play = started_play(&["A"]);

    for _ in 0..4 {
        assert!(!play.submit_score(0).is_penalized());
    }
    assert_eq!(play.totals(), vec![0]);
}

/// Earlier submitted zeros still count toward the streak when a miss is
/// reported.
#[test]
fn test_submitted_zeros_count_toward_streak() {
    let mut play = started_play(&["A"]);

    play.submit_score(0);
    play.submit_score(0);
    assert!(play.report_miss().is_penalized());
}

/// Penalty size and streak length come from the rules.
#[test]
fn test_custom_penalty_rules() {
    let rules = ScoringRules::default()
        .with_miss_penalty(-1000)
        .with_miss_streak(2);
    let mut setup = NewGame::with_rules(rules).unwrap().begin_player_creation();
    setup.add_player("A");
    let mut play = setup.start_game().unwrap();

    play.report_miss();
    let outcome = play.report_miss();
    assert_eq!(
        outcome,
        TurnOutcome::Penalized {
            miss: ScoreEntry { player: A, round: 1, delta: 0 },
            penalty: ScoreEntry { player: A, round: 1, delta: -1000 },
        }
    );
}

/// Undo after a penalty removes only the last round; the penalty stays.
#[test]
fn test_undo_after_penalty_is_single_level() {
    let mut play = started_play(&["A", "B"]);

    play.report_miss();
    play.submit_score(400);
    play.report_miss();
    play.submit_score(400);
    play.report_miss();

    let undone = play.undo();
    assert!(matches!(undone, UndoOutcome::RoundRemoved(_)));
    assert_eq!(
        play.ledger_snapshot().to_vec(),
        vec![vec![0, 400], vec![0, 400], vec![-500, 0]]
    );
    assert_eq!(play.active_player(), B);
}
