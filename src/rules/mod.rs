//! The canonical FizzBuzz rule.
//!
//! Every answer in a game is scored against [`Token::of`]. The rule is
//! pure and deterministic; only the answers players give are random.

pub mod token;

pub use token::{fizzbuzz, Token};
