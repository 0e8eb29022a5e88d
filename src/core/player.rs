//! Player identification and the ordered roster of player names.
//!
//! ## PlayerId
//!
//! Column position of a player in the score ledger. Positions are
//! renumbered when a player is removed during setup.
//!
//! ## Roster
//!
//! Ordered player names. Duplicate names are allowed; a player is
//! identified by position, not by name.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Player identifier: the 0-based column of the player in the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub usize);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw column index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Iterate over all player IDs for a roster of `player_count` players.
    ///
    /// ```
    /// use ten_thousand::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Ordered collection of player names.
///
/// The roster alone does not keep the ledger in shape; the session
/// aggregate edits both together.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the roster has no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Append a name, returning the new player's ID.
    pub fn push(&mut self, name: impl Into<String>) -> PlayerId {
        self.names.push(name.into());
        PlayerId(self.names.len() - 1)
    }

    /// Remove the player at `player`, shifting later players down by one.
    ///
    /// Returns the removed name, or `None` if out of range.
    pub fn remove(&mut self, player: PlayerId) -> Option<String> {
        if player.index() < self.names.len() {
            Some(self.names.remove(player.index()))
        } else {
            None
        }
    }

    /// Get a player's name.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&str> {
        self.names.get(player.index()).map(String::as_str)
    }

    /// Check whether `player` names a current roster position.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.names.len()
    }

    /// All names in column order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate over (PlayerId, name) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &str)> {
        PlayerId::all(self.names.len()).zip(self.names.iter().map(String::as_str))
    }
}

impl Index<PlayerId> for Roster {
    type Output = str;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.names[player.index()]
    }
}
