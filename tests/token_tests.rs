//! Property tests for the canonical token function.

use fizzbuzz_pro::{fizzbuzz, Error, Token};
use proptest::prelude::*;

proptest! {
    #[test]
    fn token_follows_divisibility(n in 1i64..=i64::MAX) {
        let got = fizzbuzz(n).unwrap();
        let want = if n % 15 == 0 {
            "fizzbuzz".to_string()
        } else if n % 3 == 0 {
            "fizz".to_string()
        } else if n % 5 == 0 {
            "buzz".to_string()
        } else {
            n.to_string()
        };
        prop_assert_eq!(got, want);
    }

    #[test]
    fn non_positive_is_invalid(n in i64::MIN..=0i64) {
        prop_assert_eq!(fizzbuzz(n), Err(Error::InvalidInput(n)));
    }

    #[test]
    fn token_matches_its_own_rendering(n in 1i64..1_000_000) {
        let token = Token::of(n).unwrap();
        prop_assert!(token.matches(&token.to_string()));
    }
}

#[test]
fn test_zero_and_negative_one() {
    assert_eq!(fizzbuzz(0), Err(Error::InvalidInput(0)));
    assert_eq!(fizzbuzz(-1), Err(Error::InvalidInput(-1)));
}
