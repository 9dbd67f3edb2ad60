//! Game configuration types.
//!
//! Callers configure a game by providing:
//! - `SkillTable`: How often each skill tier answers without thinking
//! - `GameConfig`: Round cap, starting number and the skill table
//!
//! Nothing is read from process-wide state; every game gets its
//! configuration explicitly.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Default round cap. Guarantees termination when nobody ever slips up.
pub const MAX_ROUNDS: u32 = 100_000;

/// One row of the skill table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTier {
    /// Tier as stored on the player.
    pub tier: u8,

    /// Percent chance of a "best shot" instead of the canonical token.
    pub error_rate: u8,
}

/// Exhaustive mapping from skill tier to error rate.
///
/// The default table is:
///
/// | Tier | Error rate |
/// |------|------------|
/// | 1    | 40%        |
/// | 2    | 20%        |
/// | 3    | 10%        |
/// | 4    | 5%         |
///
/// ```
/// use fizzbuzz_pro::core::SkillTable;
///
/// let table = SkillTable::default();
/// assert_eq!(table.error_rate(1).unwrap(), 40);
/// assert!(table.error_rate(5).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTable {
    tiers: Vec<SkillTier>,
}

impl SkillTable {
    /// Create an empty table. Every lookup fails until tiers are added.
    pub fn empty() -> Self {
        Self { tiers: Vec::new() }
    }

    /// Add or replace a tier. Rates above 100 are clamped.
    #[must_use]
    pub fn with_tier(mut self, tier: u8, error_rate: u8) -> Self {
        let error_rate = error_rate.min(100);
        match self.tiers.iter_mut().find(|t| t.tier == tier) {
            Some(existing) => existing.error_rate = error_rate,
            None => {
                self.tiers.push(SkillTier { tier, error_rate });
                self.tiers.sort_by_key(|t| t.tier);
            }
        }
        self
    }

    /// Look up the error rate for a tier.
    pub fn error_rate(&self, tier: u8) -> Result<u8> {
        self.tiers
            .iter()
            .find(|t| t.tier == tier)
            .map(|t| t.error_rate)
            .ok_or(Error::InvalidSkill(tier))
    }

    /// Check whether a tier is known.
    pub fn contains(&self, tier: u8) -> bool {
        self.tiers.iter().any(|t| t.tier == tier)
    }

    /// Iterate over tiers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &SkillTier> {
        self.tiers.iter()
    }
}

impl Default for SkillTable {
    fn default() -> Self {
        Self::empty()
            .with_tier(1, 40)
            .with_tier(2, 20)
            .with_tier(3, 10)
            .with_tier(4, 5)
    }
}

/// Complete configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Hard cap on rounds played. Reaching it with two or more players
    /// still standing ends the game in a draw.
    pub max_rounds: u32,

    /// First number spoken. Must be at least 1.
    pub start_number: i64,

    /// Skill tier lookup.
    pub skills: SkillTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: MAX_ROUNDS,
            start_number: 1,
            skills: SkillTable::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round cap.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Set the first number spoken.
    #[must_use]
    pub fn with_start_number(mut self, start: i64) -> Self {
        self.start_number = start;
        self
    }

    /// Replace the skill table.
    #[must_use]
    pub fn with_skills(mut self, skills: SkillTable) -> Self {
        self.skills = skills;
        self
    }
}
