//! Seams to the world outside a game.
//!
//! - **PlayerSource**: Supplies the ordered roster for a game
//! - **GameSink**: Persists decisive games and bumps the winner's win count
//!
//! The simulator never touches either directly; [`play`] wires them up.

use rustc_hash::FxHashMap;

use crate::answers::Entropy;
use crate::core::{Error, GameConfig, PlayerId, PlayerRef, Result};

use super::simulator::Simulator;
use super::trace::GameTrace;

/// Supplies players for a game, in turn order.
pub trait PlayerSource {
    /// The roster for the next game.
    fn players(&self) -> Vec<PlayerRef>;
}

impl PlayerSource for [PlayerRef] {
    fn players(&self) -> Vec<PlayerRef> {
        self.to_vec()
    }
}

impl PlayerSource for Vec<PlayerRef> {
    fn players(&self) -> Vec<PlayerRef> {
        self.clone()
    }
}

/// Records finished games.
///
/// Called exactly once per decisive game and never for draws.
/// Implementations own atomicity: storing the game and incrementing the
/// winner's counter must succeed or fail together.
pub trait GameSink {
    /// Store `trace` and credit its winner.
    fn record(&mut self, trace: &GameTrace) -> Result<()>;
}

/// Run a game from `source` and hand a decisive result to `sink`.
///
/// The trace is returned for rendering either way. A sink failure is
/// reported as an error even though the game itself completed.
pub fn play<S, K, E>(
    source: &S,
    sink: &mut K,
    config: &GameConfig,
    entropy: &mut E,
) -> Result<GameTrace>
where
    S: PlayerSource + ?Sized,
    K: GameSink + ?Sized,
    E: Entropy + ?Sized,
{
    let players = source.players();
    let trace = Simulator::new(config).simulate(&players, entropy)?;

    if !trace.is_draw() {
        sink.record(&trace)?;
    }

    Ok(trace)
}

/// An in-memory game sink.
///
/// Keeps every recorded game and a win counter per player. Refuses draws
/// and refuses a trace identical to one already recorded.
#[derive(Clone, Debug, Default)]
pub struct MemoryLedger {
    games: Vec<GameTrace>,
    wins: FxHashMap<PlayerId, u32>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Games recorded so far, oldest first.
    pub fn games(&self) -> &[GameTrace] {
        &self.games
    }

    /// Number of games a player has won.
    pub fn wins(&self, player: PlayerId) -> u32 {
        self.wins.get(&player).copied().unwrap_or(0)
    }

    /// Number of recorded games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameSink for MemoryLedger {
    fn record(&mut self, trace: &GameTrace) -> Result<()> {
        let winner = trace
            .winner
            .as_ref()
            .ok_or_else(|| Error::Sink("draws are not recorded".to_string()))?;

        if self.games.iter().any(|g| g == trace) {
            return Err(Error::Sink(format!(
                "game started at {} already recorded",
                trace.started_at
            )));
        }

        *self.wins.entry(winner.id).or_insert(0) += 1;
        self.games.push(trace.clone());
        Ok(())
    }
}
