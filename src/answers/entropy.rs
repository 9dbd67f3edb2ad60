//! Entropy sources for answer draws.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, DRAW_MAX};

/// A uniform integer generator over `0..=100`.
///
/// One simulation consumes its source sequentially. Concurrent games
/// each need their own source (see [`GameRng::fork`]).
pub trait Entropy {
    /// Draw the next value in `0..=100`.
    fn draw(&mut self) -> u8;
}

impl Entropy for GameRng {
    fn draw(&mut self) -> u8 {
        GameRng::draw(self)
    }
}

impl<E: Entropy + ?Sized> Entropy for &mut E {
    fn draw(&mut self) -> u8 {
        (**self).draw()
    }
}

/// A fixed, cyclic sequence of draws.
///
/// Replays `draws` in order and starts over when exhausted. An empty
/// script always draws 0 (never a best shot). Values above 100 are clamped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scripted {
    draws: Vec<u8>,
    cursor: usize,
}

impl Scripted {
    /// Create a script from a sequence of draws.
    pub fn new(draws: Vec<u8>) -> Self {
        Self { draws, cursor: 0 }
    }

    /// A script that always produces the same draw.
    pub fn constant(draw: u8) -> Self {
        Self::new(vec![draw])
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl Entropy for Scripted {
    fn draw(&mut self) -> u8 {
        if self.draws.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value.min(DRAW_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_cycles() {
        let mut script = Scripted::new(vec![1, 2, 3]);
        let draws: Vec<_> = (0..7).map(|_| script.draw()).collect();
        assert_eq!(draws, vec![1, 2, 3, 1, 2, 3, 1]);
        assert_eq!(script.consumed(), 7);
    }

    #[test]
    fn test_scripted_empty_draws_zero() {
        let mut script = Scripted::default();
        assert_eq!(script.draw(), 0);
        assert_eq!(script.draw(), 0);
        assert_eq!(script.consumed(), 2);
    }

    #[test]
    fn test_scripted_clamps() {
        let mut script = Scripted::constant(255);
        assert_eq!(script.draw(), DRAW_MAX);
    }

    #[test]
    fn test_game_rng_is_entropy() {
        fn take<E: Entropy>(mut e: E) -> u8 {
            e.draw()
        }

        let mut rng = GameRng::new(3);
        let mut same = GameRng::new(3);
        assert_eq!(take(&mut rng), same.draw());
    }
}
