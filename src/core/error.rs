//! Error types shared by every layer of the game.
//!
//! Errors are never retried: the simulation is deterministic given its
//! inputs, so an invalid player or number fails the same way every time.

use thiserror::Error;

/// Errors that can abort a game or a single answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A token was requested for a number below 1.
    #[error("fizzbuzz is only defined for numbers >= 1, got {0}")]
    InvalidInput(i64),

    /// The skill tier has no entry in the skill table.
    #[error("unknown skill tier {0}")]
    InvalidSkill(u8),

    /// A game needs at least two players.
    #[error("a game needs at least two players, got {0}")]
    InsufficientPlayers(usize),

    /// The counting number ran past `i64::MAX` before the game ended.
    #[error("counting number overflowed i64")]
    CountOverflow,

    /// The game sink refused to record a finished game.
    #[error("game sink rejected the game: {0}")]
    Sink(String),

    /// A persisted trace could not be encoded or decoded.
    #[error("trace codec error: {0}")]
    Codec(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidInput(0).to_string(),
            "fizzbuzz is only defined for numbers >= 1, got 0"
        );
        assert_eq!(Error::InvalidSkill(9).to_string(), "unknown skill tier 9");
        assert_eq!(
            Error::InsufficientPlayers(1).to_string(),
            "a game needs at least two players, got 1"
        );
    }

    #[test]
    fn test_errors_are_distinct() {
        assert_ne!(Error::InvalidInput(5), Error::InvalidSkill(5));
        assert_ne!(Error::InvalidInput(0), Error::InvalidInput(-1));
    }
}
