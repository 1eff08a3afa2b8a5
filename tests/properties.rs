//! Property-based tests for the combinator laws
//!
//! - An exact sequence matches itself as a prefix of any input
//! - Alternation is left-biased
//! - Repetition collects exactly the matching prefix
//! - One-or-more fails exactly when zero-or-more would be empty
//! - Optional never fails
//! - Sequencing succeeds exactly when both halves do, in order

use proptest::prelude::*;
use seqparse::{
    MapExt, OrExt, ParseState, Parser, any_symbol, digit, is_sequence, is_symbol, one_or_more,
    optional, parse_string, sequence, zero_or_more,
};

fn state_of(text: &str) -> ParseState<char> {
    ParseState::from_text(text)
}

proptest! {
    #[test]
    fn test_sequence_matches_own_prefix(word in "[a-z]{1,8}", tail in "[a-z0-9 ]{0,8}") {
        let input = format!("{}{}", word, tail);
        let result = parse_string(&is_sequence(word.chars()), &input);

        prop_assert_eq!(result.value(), Some(&word.chars().collect::<Vec<_>>()));
        prop_assert_eq!(result.cursor(), word.chars().count());
    }

    #[test]
    fn test_sequence_failure_consumes_nothing(word in "[a-z]{2,8}", input in "[a-z]{0,8}") {
        prop_assume!(!input.starts_with(&word));
        let result = parse_string(&is_sequence(word.chars()), &input);

        prop_assert!(result.is_failure());
        prop_assert_eq!(result.cursor(), 0);
    }

    #[test]
    fn test_or_is_left_biased(input in "[a-z]{1,8}") {
        let parser = any_symbol::<char>()
            .map(|c| (0, c))
            .or(any_symbol::<char>().map(|c| (1, c)));
        let result = parse_string(&parser, &input);

        prop_assert_eq!(result.value().map(|(branch, _)| *branch), Some(0));
    }

    #[test]
    fn test_or_agrees_with_surviving_operand(input in "[ab]{0,4}") {
        let either = is_symbol('a').or(is_symbol('b'));
        let result = parse_string(&either, &input);

        match input.chars().next() {
            Some(c) => prop_assert_eq!(result.value(), Some(&c)),
            None => {
                prop_assert!(result.is_failure());
                prop_assert_eq!(result.cursor(), 0);
            }
        }
    }

    #[test]
    fn test_zero_or_more_takes_whole_run(count in 0usize..16, rest in "[b-z]{0,8}") {
        let input = format!("{}{}", "a".repeat(count), rest);
        let result = parse_string(&zero_or_more(is_symbol('a')), &input);

        prop_assert_eq!(result.value().map(Vec::len), Some(count));
        prop_assert_eq!(result.cursor(), count);
    }

    #[test]
    fn test_one_or_more_requires_one(count in 0usize..16, rest in "[b-z]{0,8}") {
        let input = format!("{}{}", "a".repeat(count), rest);
        let many = parse_string(&zero_or_more(is_symbol('a')), &input);
        let some = parse_string(&one_or_more(is_symbol('a')), &input);

        if count == 0 {
            prop_assert!(some.is_failure());
            prop_assert_eq!(some.cursor(), 0);
        } else {
            prop_assert_eq!(some, many);
        }
    }

    #[test]
    fn test_optional_never_fails(input in "[a-z0-9]{0,8}") {
        let result = parse_string(&optional(digit::<char>()), &input);

        prop_assert!(result.is_success());
        let starts_with_digit = input.starts_with(|c: char| c.is_ascii_digit());
        prop_assert_eq!(result.cursor(), usize::from(starts_with_digit));
        prop_assert_eq!(result.value().is_some_and(Option::is_some), starts_with_digit);
    }

    #[test]
    fn test_sequence_is_conjunction(input in "[a-c0-2]{0,4}") {
        let state = state_of(&input);
        let first = digit::<char>();
        let second = is_symbol('a');

        let combined = sequence(digit::<char>(), is_symbol('a')).parse(&state);
        let expected = match first.parse(&state).into_result() {
            Ok((d, next)) => second.parse(&next).map_value(|a| (d, a)),
            Err(_) => first.parse(&state).map_value(|d| (d, 'a')),
        };

        prop_assert_eq!(combined.is_success(), expected.is_success());
        if combined.is_success() {
            prop_assert_eq!(combined, expected);
        }
    }
}
