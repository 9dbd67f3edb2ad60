//! Replayable game records.
//!
//! A trace captures a complete game:
//! - The roster, in turn order
//! - Every move of every round, with its correctness
//! - Start and end timestamps
//! - The winner, or nothing for a draw
//!
//! Traces reference players by id; they never own mutable player data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Error, PlayerId, PlayerRef, Result};

/// One player's answer for one number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Who answered.
    pub player: PlayerId,

    /// The number at stake.
    pub number: i64,

    /// What they said.
    pub answer: String,

    /// Whether the answer matched the canonical token.
    pub correct: bool,
}

/// The moves of a single round, in turn order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Round index, starting at 1.
    pub number: u32,

    /// Moves made this round.
    /// SmallVec keeps typical tables (up to 4 players) off the heap.
    pub moves: SmallVec<[Move; 4]>,
}

impl Round {
    /// Create an empty round.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            moves: SmallVec::new(),
        }
    }

    /// Record a move.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Players knocked out this round.
    pub fn eliminated(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.moves.iter().filter(|m| !m.correct).map(|m| m.player)
    }

    /// Number of moves made.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if no moves were made.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// Exactly one player survived.
    Winner(&'a PlayerRef),
    /// The round cap was reached with two or more players standing.
    Draw,
}

/// A complete game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTrace {
    /// Players in turn order at the start of the game.
    pub players: Vec<PlayerRef>,

    /// All rounds played.
    pub rounds: Vec<Round>,

    /// When the game started.
    pub started_at: DateTime<Utc>,

    /// When the game was decided. `None` for a draw.
    pub ended_at: Option<DateTime<Utc>>,

    /// Rounds played.
    pub total_rounds: u32,

    /// The sole survivor. `None` for a draw.
    pub winner: Option<PlayerRef>,
}

impl GameTrace {
    /// Start a new trace for `players`.
    pub fn new(players: Vec<PlayerRef>, started_at: DateTime<Utc>) -> Self {
        Self {
            players,
            rounds: Vec::new(),
            started_at,
            ended_at: None,
            total_rounds: 0,
            winner: None,
        }
    }

    /// Append a finished round.
    pub fn push(&mut self, round: Round) {
        self.rounds.push(round);
        self.total_rounds += 1;
    }

    /// Mark the game as decided in favour of `winner`.
    pub fn finish(&mut self, winner: PlayerRef, ended_at: DateTime<Utc>) {
        self.winner = Some(winner);
        self.ended_at = Some(ended_at);
    }

    /// How the game ended.
    pub fn outcome(&self) -> Outcome<'_> {
        match &self.winner {
            Some(p) => Outcome::Winner(p),
            None => Outcome::Draw,
        }
    }

    /// Check if the game ended without a winner.
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Look up a player from the roster.
    pub fn player(&self, id: PlayerId) -> Option<&PlayerRef> {
        self.players.iter().find(|p| p.id == id)
    }

    /// All moves of the game in order.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.rounds.iter().flat_map(|r| r.moves.iter())
    }

    /// Every number spoken, in order.
    pub fn numbers(&self) -> impl Iterator<Item = i64> + '_ {
        self.moves().map(|m| m.number)
    }

    /// Moves made by a specific player.
    pub fn player_moves(&self, player: PlayerId) -> impl Iterator<Item = &Move> {
        self.moves().filter(move |m| m.player == player)
    }

    /// Encode the trace for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| Error::Codec(e.to_string()))
    }

    /// Decode a trace produced by [`GameTrace::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| Error::Codec(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(player: u32, number: i64, answer: &str, correct: bool) -> Move {
        Move {
            player: PlayerId::new(player),
            number,
            answer: answer.to_string(),
            correct,
        }
    }

    fn sample_trace() -> GameTrace {
        let players = vec![PlayerRef::new(1, "ann", 4), PlayerRef::new(2, "ben", 1)];
        let mut trace = GameTrace::new(players.clone(), Utc::now());

        let mut round = Round::new(1);
        round.push(mv(1, 1, "1", true));
        round.push(mv(2, 2, "2", true));
        trace.push(round);

        let mut round = Round::new(2);
        round.push(mv(1, 3, "fizz", true));
        round.push(mv(2, 4, "4", true));
        trace.push(round);

        let mut round = Round::new(3);
        round.push(mv(1, 5, "buzz", true));
        round.push(mv(2, 6, "6", false));
        trace.push(round);

        trace.finish(players[0].clone(), Utc::now());
        trace
    }

    #[test]
    fn test_round_eliminated() {
        let mut round = Round::new(1);
        assert!(round.is_empty());
        round.push(mv(1, 1, "1", true));
        round.push(mv(2, 2, "3", false));
        round.push(mv(3, 3, "3", false));

        assert_eq!(round.len(), 3);
        let out: Vec<_> = round.eliminated().collect();
        assert_eq!(out, vec![PlayerId::new(2), PlayerId::new(3)]);
    }

    #[test]
    fn test_trace_counts_rounds() {
        let trace = sample_trace();
        assert_eq!(trace.total_rounds, 3);
        assert_eq!(trace.rounds.len(), 3);
        assert_eq!(trace.moves().count(), 6);
        assert_eq!(trace.numbers().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_trace_outcome() {
        let trace = sample_trace();
        assert!(!trace.is_draw());
        assert!(trace.ended_at.is_some());
        match trace.outcome() {
            Outcome::Winner(p) => assert_eq!(p.name, "ann"),
            Outcome::Draw => panic!("expected a winner"),
        }

        let draw = GameTrace::new(vec![], Utc::now());
        assert!(draw.is_draw());
        assert_eq!(draw.outcome(), Outcome::Draw);
        assert!(draw.ended_at.is_none());
    }

    #[test]
    fn test_trace_player_lookup() {
        let trace = sample_trace();
        assert_eq!(trace.player(PlayerId::new(2)).map(|p| p.name.as_str()), Some("ben"));
        assert!(trace.player(PlayerId::new(9)).is_none());
        assert_eq!(trace.player_moves(PlayerId::new(2)).count(), 3);
    }

    #[test]
    fn test_trace_bytes_roundtrip() {
        let trace = sample_trace();
        let bytes = trace.to_bytes().unwrap();
        assert_eq!(GameTrace::from_bytes(&bytes).unwrap(), trace);
    }

    #[test]
    fn test_trace_from_garbage() {
        assert!(matches!(GameTrace::from_bytes(&[1, 2, 3]), Err(Error::Codec(_))));
    }

    #[test]
    fn test_trace_json() {
        let trace = sample_trace();
        let json = serde_json::to_string(&trace).unwrap();
        let back: GameTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trace);
    }
}
