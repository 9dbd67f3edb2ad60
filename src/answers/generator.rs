//! Answer generation from skill tiers.
//!
//! One draw per answer. With error rate `r`, a draw `d` gives the
//! canonical token when `d < 100 - r` and a "best shot" otherwise. The
//! best-shot band is the top `r + 1` of the 101 possible draws.

use serde::{Deserialize, Serialize};

use crate::core::{Result, SkillTable, DRAW_MAX};
use crate::rules::Token;

use super::entropy::Entropy;

/// An answer produced for one number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// What the player said.
    pub text: String,

    /// True when the player blurted out the number without thinking.
    /// A best shot can still be correct (e.g. for 7).
    pub best_shot: bool,
}

/// Generates answers for players according to a skill table.
#[derive(Clone, Copy, Debug)]
pub struct AnswerGenerator<'a> {
    skills: &'a SkillTable,
}

impl<'a> AnswerGenerator<'a> {
    /// Create a generator backed by `skills`.
    pub fn new(skills: &'a SkillTable) -> Self {
        Self { skills }
    }

    /// Produce an answer for `number` from a player of tier `skill`.
    ///
    /// Fails with `InvalidSkill` before consuming entropy when the tier is
    /// unknown. A best shot is never validated against the canonical rule,
    /// but the canonical branch fails with `InvalidInput` for `number < 1`.
    pub fn answer<E: Entropy + ?Sized>(
        &self,
        skill: u8,
        number: i64,
        entropy: &mut E,
    ) -> Result<Answer> {
        let error_rate = self.skills.error_rate(skill)?;
        let draw = entropy.draw();

        if draw < DRAW_MAX.saturating_sub(error_rate) {
            Ok(Answer {
                text: Token::of(number)?.to_string(),
                best_shot: false,
            })
        } else {
            Ok(Answer {
                text: number.to_string(),
                best_shot: true,
            })
        }
    }

    /// Produce the answer string for `number`.
    pub fn generate<E: Entropy + ?Sized>(
        &self,
        skill: u8,
        number: i64,
        entropy: &mut E,
    ) -> Result<String> {
        self.answer(skill, number, entropy).map(|a| a.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Scripted;
    use crate::core::{Error, GameRng};

    #[test]
    fn test_threshold_per_tier() {
        let table = SkillTable::default();
        let generator = AnswerGenerator::new(&table);

        // (tier, highest canonical draw)
        for (tier, last_good) in [(1u8, 59u8), (2, 79), (3, 89), (4, 94)] {
            let mut good = Scripted::constant(last_good);
            let mut bad = Scripted::constant(last_good + 1);

            let a = generator.answer(tier, 3, &mut good).unwrap();
            assert_eq!(a.text, "fizz");
            assert!(!a.best_shot);

            let b = generator.answer(tier, 3, &mut bad).unwrap();
            assert_eq!(b.text, "3");
            assert!(b.best_shot);
        }
    }

    #[test]
    fn test_best_shot_can_be_correct() {
        let table = SkillTable::default();
        let generator = AnswerGenerator::new(&table);
        let mut entropy = Scripted::constant(100);

        let answer = generator.answer(1, 7, &mut entropy).unwrap();
        assert!(answer.best_shot);
        assert!(Token::of(7).unwrap().matches(&answer.text));
    }

    #[test]
    fn test_invalid_skill_consumes_nothing() {
        let table = SkillTable::default();
        let generator = AnswerGenerator::new(&table);
        let mut entropy = Scripted::new(vec![0, 100]);

        assert_eq!(generator.generate(0, 1, &mut entropy), Err(Error::InvalidSkill(0)));
        assert_eq!(generator.generate(5, 1, &mut entropy), Err(Error::InvalidSkill(5)));
        assert_eq!(entropy.consumed(), 0);
    }

    #[test]
    fn test_invalid_number_on_canonical_branch() {
        let table = SkillTable::default();
        let generator = AnswerGenerator::new(&table);
        let mut entropy = Scripted::constant(0);

        assert_eq!(generator.generate(4, 0, &mut entropy), Err(Error::InvalidInput(0)));
    }

    #[test]
    fn test_zero_error_rate_never_best_shot() {
        let table = SkillTable::empty().with_tier(1, 0);
        let generator = AnswerGenerator::new(&table);
        let mut entropy = Scripted::constant(99);

        assert!(!generator.answer(1, 5, &mut entropy).unwrap().best_shot);
    }

    #[test]
    fn test_error_rate_roughly_matches_table() {
        let table = SkillTable::default();
        let generator = AnswerGenerator::new(&table);
        let mut rng = GameRng::new(2024);

        let trials = 20_000;
        let best_shots = (0..trials)
            .filter(|_| generator.answer(1, 1, &mut rng).unwrap().best_shot)
            .count();

        // Tier 1 best-shots 41 of 101 draws (~40.6%)
        let rate = best_shots as f64 / trials as f64;
        assert!((0.38..0.43).contains(&rate), "rate was {rate}");
    }
}
