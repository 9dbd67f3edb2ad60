//! The round-based elimination loop.
//!
//! Each round every active player, in turn order, answers the next number.
//! The counting number advances by one per move across the whole game.
//! Wrong answers are collected and removed once the round is over. A round
//! stops early as soon as fewer than two players would survive it, so the
//! remaining players of that round never answer.
//!
//! The game ends when one player is left (decisive) or the round cap is
//! reached (draw).

use chrono::Utc;
use rustc_hash::FxHashSet;

use crate::answers::{AnswerGenerator, Entropy};
use crate::core::{Error, GameConfig, PlayerRef, Result};
use crate::rules::Token;

use super::trace::{GameTrace, Move, Round};

/// Runs games under a fixed configuration.
#[derive(Clone, Copy, Debug)]
pub struct Simulator<'a> {
    config: &'a GameConfig,
}

impl<'a> Simulator<'a> {
    /// Create a simulator for `config`.
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// Play a full game.
    ///
    /// Fails with `InsufficientPlayers` for fewer than two players,
    /// `InvalidSkill` if any player's tier is unknown and `InvalidInput`
    /// if the starting number is below 1. These are reported before the
    /// first move. `CountOverflow` aborts a game that runs past `i64::MAX`.
    /// No partial trace is ever returned.
    pub fn simulate<E: Entropy + ?Sized>(
        &self,
        players: &[PlayerRef],
        entropy: &mut E,
    ) -> Result<GameTrace> {
        if players.len() < 2 {
            return Err(Error::InsufficientPlayers(players.len()));
        }
        for player in players {
            self.config.skills.error_rate(player.skill)?;
        }
        Token::of(self.config.start_number)?;

        let generator = AnswerGenerator::new(&self.config.skills);
        let mut trace = GameTrace::new(players.to_vec(), Utc::now());
        let mut active: Vec<&PlayerRef> = players.iter().collect();
        let mut next = Some(self.config.start_number);

        while active.len() > 1 && trace.total_rounds < self.config.max_rounds {
            let mut round = Round::new(trace.total_rounds + 1);
            // Positions in `active`, not ids: rosters may repeat an id.
            let mut eliminated: FxHashSet<usize> = FxHashSet::default();

            for (seat, player) in active.iter().enumerate() {
                let number = next.ok_or(Error::CountOverflow)?;
                let answer = generator.generate(player.skill, number, entropy)?;
                let correct = Token::of(number)?.matches(&answer);

                if !correct {
                    log::debug!(
                        "round {}: {} said {:?} for {} and is out",
                        round.number,
                        player.name,
                        answer,
                        number
                    );
                    eliminated.insert(seat);
                }
                round.push(Move {
                    player: player.id,
                    number,
                    answer,
                    correct,
                });
                next = number.checked_add(1);

                if active.len() - eliminated.len() < 2 {
                    break;
                }
            }

            active = active
                .into_iter()
                .enumerate()
                .filter(|(seat, _)| !eliminated.contains(seat))
                .map(|(_, p)| p)
                .collect();
            trace.push(round);
        }

        match active.as_slice() {
            [winner] => {
                log::info!("{} wins after {} rounds", winner.name, trace.total_rounds);
                trace.finish((*winner).clone(), Utc::now());
            }
            _ => log::warn!(
                "draw: {} players still standing after {} rounds",
                active.len(),
                trace.total_rounds
            ),
        }

        Ok(trace)
    }
}

/// Play a game of `players` under `config`, drawing from `entropy`.
pub fn simulate<E: Entropy + ?Sized>(
    players: &[PlayerRef],
    config: &GameConfig,
    entropy: &mut E,
) -> Result<GameTrace> {
    Simulator::new(config).simulate(players, entropy)
}
