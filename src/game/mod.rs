//! Running games and recording their outcome.
//!
//! ## Overview
//!
//! - **Simulator**: The round loop with elimination
//! - **GameTrace**: Round-by-round record plus the outcome
//! - **GameSink / PlayerSource**: Seams to external storage and player selection
//!
//! ## Usage
//!
//! ```
//! use fizzbuzz_pro::core::{GameConfig, GameRng, PlayerRef};
//! use fizzbuzz_pro::game::{play, MemoryLedger};
//!
//! let players = vec![PlayerRef::new(1, "ann", 4), PlayerRef::new(2, "ben", 1)];
//! let config = GameConfig::default();
//! let mut ledger = MemoryLedger::new();
//!
//! let trace = play(&players, &mut ledger, &config, &mut GameRng::new(7)).unwrap();
//!
//! if let Some(winner) = &trace.winner {
//!     assert_eq!(ledger.wins(winner.id), 1);
//! }
//! ```

pub mod simulator;
pub mod sink;
pub mod trace;

pub use simulator::{simulate, Simulator};
pub use sink::{play, GameSink, MemoryLedger, PlayerSource};
pub use trace::{GameTrace, Move, Outcome, Round};
