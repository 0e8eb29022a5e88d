//! Turn cursor: whose turn is active.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Index of the active player, `0 <= index < player_count`.
///
/// The cursor does not know the roster size; callers pass it in, the way
/// every per-player API takes `player_count` as context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnCursor {
    index: usize,
}

impl TurnCursor {
    /// Cursor on the first player.
    #[must_use]
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// The active player.
    #[must_use]
    pub const fn player(self) -> PlayerId {
        PlayerId::new(self.index)
    }

    /// Raw index of the active player.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Whether the active player is the last one in the roster.
    #[must_use]
    pub fn is_last(self, player_count: usize) -> bool {
        player_count > 0 && self.index == player_count - 1
    }

    /// Move to the next player, wrapping to the first.
    pub fn advance(&mut self, player_count: usize) {
        assert!(player_count > 0, "Must have at least 1 player");
        self.index = (self.index + 1) % player_count;
    }

    /// Move to the previous player, wrapping to the last.
    pub fn rewind(&mut self, player_count: usize) {
        assert!(player_count > 0, "Must have at least 1 player");
        self.index = (self.index + player_count - 1) % player_count;
    }

    /// Put the cursor back on the first player.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}
