//! Game phase tag.
//!
//! The phase only moves forward: `New` → `PlayerCreation` → `Started`.
//! Typed handles in [`crate::game`] enforce it at compile time; the tag is
//! what the runtime-checked facade and error messages report.

use serde::{Deserialize, Serialize};

/// Phase of a scoring session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Nothing set up yet.
    #[default]
    New,
    /// Roster is editable, no scoring.
    PlayerCreation,
    /// Roster frozen, scoring and undo enabled. Terminal.
    Started,
}

impl GamePhase {
    /// The phase that follows this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<GamePhase> {
        match self {
            GamePhase::New => Some(GamePhase::PlayerCreation),
            GamePhase::PlayerCreation => Some(GamePhase::Started),
            GamePhase::Started => None,
        }
    }

    /// Whether roster edits are allowed.
    #[must_use]
    pub const fn allows_roster_edits(self) -> bool {
        matches!(self, GamePhase::PlayerCreation)
    }

    /// Whether scoring and undo are allowed.
    #[must_use]
    pub const fn allows_scoring(self) -> bool {
        matches!(self, GamePhase::Started)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::New => "new",
            GamePhase::PlayerCreation => "player creation",
            GamePhase::Started => "started",
        };
        f.write_str(name)
    }
}
