use crate::parser::Parser;
use crate::result::ParseResult;
use crate::state::ParseState;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)`, while nesting `sequence(a, sequence(b, c))` produces
/// `(a, (b, c))`. Either way the destructuring pattern spells out the order
/// in which things were parsed.
///
/// A failure of either parser is passed through unchanged, including the
/// state it reports; the second parser is not run if the first fails.
pub struct Sequence<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Sequence<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Sequence { parser1, parser2 }
    }
}

impl<P1, P2> Parser for Sequence<P1, P2>
where
    P1: Parser,
    P2: Parser<Symbol = P1::Symbol>,
{
    type Symbol = P1::Symbol;
    type Output = (P1::Output, P2::Output);

    fn parse(&self, state: &ParseState<Self::Symbol>) -> ParseResult<Self::Symbol, Self::Output> {
        let (value1, state) = match self.parser1.parse(state) {
            ParseResult::Success { state, value } => (value, state),
            ParseResult::Failure { state, error } => return ParseResult::failure(state, error),
        };

        match self.parser2.parse(&state) {
            ParseResult::Success { state, value } => ParseResult::success(state, (value1, value)),
            ParseResult::Failure { state, error } => ParseResult::failure(state, error),
        }
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<P1, P2>(parser1: P1, parser2: P2) -> Sequence<P1, P2>
where
    P1: Parser,
    P2: Parser<Symbol = P1::Symbol>,
{
    Sequence::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait SequenceExt: Parser + Sized {
    fn and<P>(self, other: P) -> Sequence<Self, P>
    where
        P: Parser<Symbol = Self::Symbol>,
    {
        Sequence::new(self, other)
    }
}

/// Implement SequenceExt for all parsers
impl<P> SequenceExt for P where P: Parser {}
