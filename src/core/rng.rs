//! Deterministic random number generation for answer draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Create independent streams for concurrent games
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use fizzbuzz_pro::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Every draw is one of 101 outcomes
//! let draw = rng.draw();
//! assert!(draw <= 100);
//!
//! // Forks are independent but reproducible
//! let mut a = GameRng::new(42).fork();
//! let mut b = GameRng::new(42).fork();
//! assert_eq!(a.draw(), b.draw());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Highest value a single draw can produce. Draws span `0..=DRAW_MAX`.
pub const DRAW_MAX: u8 = 100;

/// Seeded entropy source for answer generation.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
/// A single `GameRng` must not be shared between concurrent games;
/// use [`GameRng::fork`] to hand each game its own stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Draw a uniform integer in `0..=100`.
    pub fn draw(&mut self) -> u8 {
        self.inner.gen_range(0..=DRAW_MAX)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state, so a game can be replayed from any point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
