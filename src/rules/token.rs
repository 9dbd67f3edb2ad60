//! Canonical FizzBuzz tokens.
//!
//! Priority order: divisible by 15 is "fizzbuzz", else divisible by 3 is
//! "fizz", else divisible by 5 is "buzz", else the plain decimal.

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// The correct answer for a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Divisible by both 3 and 5.
    FizzBuzz,
    /// Divisible by 3 only.
    Fizz,
    /// Divisible by 5 only.
    Buzz,
    /// Neither; the number itself.
    Number(i64),
}

impl Token {
    /// Compute the token for `number`.
    ///
    /// Fails with [`Error::InvalidInput`] when `number < 1`.
    ///
    /// ```
    /// use fizzbuzz_pro::rules::Token;
    ///
    /// assert_eq!(Token::of(9).unwrap(), Token::Fizz);
    /// assert_eq!(Token::of(30).unwrap().to_string(), "fizzbuzz");
    /// assert!(Token::of(0).is_err());
    /// ```
    pub fn of(number: i64) -> Result<Self> {
        if number < 1 {
            return Err(Error::InvalidInput(number));
        }

        Ok(match (number % 3 == 0, number % 5 == 0) {
            (true, true) => Token::FizzBuzz,
            (true, false) => Token::Fizz,
            (false, true) => Token::Buzz,
            (false, false) => Token::Number(number),
        })
    }

    /// Check whether a spoken answer is this token.
    pub fn matches(&self, answer: &str) -> bool {
        match self {
            Token::FizzBuzz => answer == "fizzbuzz",
            Token::Fizz => answer == "fizz",
            Token::Buzz => answer == "buzz",
            Token::Number(n) => answer == n.to_string(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::FizzBuzz => f.write_str("fizzbuzz"),
            Token::Fizz => f.write_str("fizz"),
            Token::Buzz => f.write_str("buzz"),
            Token::Number(n) => write!(f, "{n}"),
        }
    }
}

/// The canonical token for `number` as a string.
pub fn fizzbuzz(number: i64) -> Result<String> {
    Token::of(number).map(|t| t.to_string())
}
