//! Player identification.
//!
//! ## PlayerId
//!
//! Opaque identifier assigned by whatever registry owns the players.
//!
//! ## PlayerRef
//!
//! The immutable view of a player a game needs: who they are and how
//! skilled they are. Games reference players by id only; win counters and
//! other mutable player data live with the external game sink.

use serde::{Deserialize, Serialize};

/// Player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// A player taking part in a game.
///
/// `skill` is a raw tier; it is only checked against the skill table when
/// the player is asked for an answer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerRef {
    /// Unique identifier.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Skill tier (1 = sloppiest, 4 = sharpest with the default table).
    pub skill: u8,
}

impl PlayerRef {
    /// Create a new player reference.
    pub fn new(id: u32, name: impl Into<String>, skill: u8) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            skill,
        }
    }
}

impl std::fmt::Display for PlayerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (skill {})", self.name, self.skill)
    }
}
