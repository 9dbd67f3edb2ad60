//! Stochastic answer generation.
//!
//! ## Overview
//!
//! - **Entropy**: Uniform draws in `0..=100`, injected so tests can script them
//! - **AnswerGenerator**: Turns a skill tier, a number and one draw into an answer
//!
//! ## Usage
//!
//! ```
//! use fizzbuzz_pro::answers::{AnswerGenerator, Scripted};
//! use fizzbuzz_pro::core::SkillTable;
//!
//! let table = SkillTable::default();
//! let generator = AnswerGenerator::new(&table);
//!
//! // A low draw always yields the canonical token
//! let mut entropy = Scripted::new(vec![0]);
//! assert_eq!(generator.generate(4, 15, &mut entropy).unwrap(), "fizzbuzz");
//!
//! // A top draw is a "best shot": the number itself
//! let mut entropy = Scripted::new(vec![100]);
//! assert_eq!(generator.generate(4, 15, &mut entropy).unwrap(), "15");
//! ```

pub mod entropy;
pub mod generator;

pub use entropy::{Entropy, Scripted};
pub use generator::{Answer, AnswerGenerator};
