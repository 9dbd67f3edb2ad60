//! # fizzbuzz-pro
//!
//! A multi-player FizzBuzz elimination game simulator.
//!
//! ## Rules
//!
//! Players take turns saying the next number, replacing multiples of 3
//! with "fizz", multiples of 5 with "buzz" and multiples of both with
//! "fizzbuzz". Anyone who gets it wrong is out at the end of the round.
//! The last player standing wins; if the round cap is reached first the
//! game is a draw.
//!
//! ## Design Principles
//!
//! 1. **Deterministic Core**: Only the choice between a careful answer and
//!    a "best shot" is random, and the entropy is injected.
//!
//! 2. **Plain Values**: Players, moves, rounds and traces are immutable
//!    records. Persistence belongs to an external `GameSink`.
//!
//! 3. **Explicit Configuration**: Round cap and skill table are passed in,
//!    never read from global state.
//!
//! ## Modules
//!
//! - `core`: Player references, configuration, RNG, errors
//! - `rules`: The canonical FizzBuzz token
//! - `answers`: Entropy sources and the answer generator
//! - `game`: Simulator, traces and the external seams

pub mod answers;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Error, GameConfig, GameRng, GameRngState, PlayerId, PlayerRef, Result, SkillTable, MAX_ROUNDS,
};

pub use crate::rules::{fizzbuzz, Token};

pub use crate::answers::{Answer, AnswerGenerator, Entropy, Scripted};

pub use crate::game::{
    play, simulate, GameSink, GameTrace, MemoryLedger, Move, Outcome, PlayerSource, Round,
    Simulator,
};
