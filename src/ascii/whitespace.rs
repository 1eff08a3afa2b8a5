use crate::choice::{Choice, choice};
use crate::parser::Parser;
use crate::primitive::{IsSymbol, is_symbol};
use crate::result::ParseResult;
use crate::sequence::{Sequence, sequence};
use crate::state::ParseState;
use crate::symbol::Symbol;
use crate::zero_or_more::{ZeroOrMore, zero_or_more};

type Padding<T> = ZeroOrMore<Choice<IsSymbol<T>>>;

/// Parser that matches a single ASCII whitespace character (space, newline, tab, carriage return)
pub fn whitespace<T>() -> Choice<IsSymbol<T>>
where
    T: Symbol + From<u8>,
{
    choice(
        is_symbol(T::from(b' ')),
        [b'\n', b'\t', b'\r'].map(|c| is_symbol(T::from(c))),
    )
}

/// Parser combinator that allows whitespace on both sides of the given parser
///
/// Fails only when the wrapped parser fails; the padding itself cannot.
pub struct SkipWhitespace<P: Parser> {
    inner: Sequence<Padding<P::Symbol>, Sequence<P, Padding<P::Symbol>>>,
}

impl<P> SkipWhitespace<P>
where
    P: Parser,
    P::Symbol: From<u8>,
{
    pub fn new(parser: P) -> Self {
        SkipWhitespace {
            inner: sequence(
                zero_or_more(whitespace()),
                sequence(parser, zero_or_more(whitespace())),
            ),
        }
    }
}

impl<P> Parser for SkipWhitespace<P>
where
    P: Parser,
{
    type Symbol = P::Symbol;
    type Output = P::Output;

    fn parse(&self, state: &ParseState<Self::Symbol>) -> ParseResult<Self::Symbol, Self::Output> {
        self.inner.parse(state).map_value(|(_, (value, _))| value)
    }
}

/// Convenience function to create a SkipWhitespace parser
pub fn skip_whitespace<P>(parser: P) -> SkipWhitespace<P>
where
    P: Parser,
    P::Symbol: From<u8>,
{
    SkipWhitespace::new(parser)
}
