//! Core types: player ids, configuration, RNG and errors.
//!
//! Everything else in the crate builds on these.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, SkillTable, SkillTier, MAX_ROUNDS};
pub use error::{Error, Result};
pub use player::{PlayerId, PlayerRef};
pub use rng::{GameRng, GameRngState, DRAW_MAX};
