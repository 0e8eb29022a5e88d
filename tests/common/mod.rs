//! Shared helpers for integration tests.

use ten_thousand::{GamePlay, NewGame, Scorekeeper};

/// Install a test-friendly tracing subscriber once. Set `RUST_LOG` to see
/// session events.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Typed handle with the given players, already started.
#[allow(dead_code)]
pub fn started_play(names: &[&str]) -> GamePlay {
    let mut setup = NewGame::new().begin_player_creation();
    for name in names {
        setup.add_player(name);
    }
    setup.start_game().expect("roster is large enough to start")
}

/// Runtime facade with the given players, already started.
#[allow(dead_code)]
pub fn started_keeper(names: &[&str]) -> Scorekeeper {
    let mut keeper = Scorekeeper::new();
    keeper.begin_player_creation().unwrap();
    for name in names {
        keeper.add_player(name).unwrap();
    }
    keeper.start_game().unwrap();
    keeper
}
