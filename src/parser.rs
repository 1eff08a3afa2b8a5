use crate::result::ParseResult;
use crate::state::ParseState;
use crate::symbol::Symbol;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from a state to a result: running it twice
/// on the same state gives the same answer and has no other effect.
/// Combinators rely on this to retry, skip or repeat their operands freely.
pub trait Parser {
    /// The type of elements in the input sequence
    type Symbol: Symbol;
    type Output;

    /// Attempt to parse starting at `state`
    ///
    /// Matchers never report progress on failure. Combinators that need to
    /// backtrack must retry from their own `state`, not from the state a
    /// failed operand reports.
    fn parse(&self, state: &ParseState<Self::Symbol>) -> ParseResult<Self::Symbol, Self::Output>;
}

/// A borrowed parser is a parser, so one grammar rule can be shared by
/// several others without cloning it
impl<P> Parser for &P
where
    P: Parser + ?Sized,
{
    type Symbol = P::Symbol;
    type Output = P::Output;

    fn parse(&self, state: &ParseState<Self::Symbol>) -> ParseResult<Self::Symbol, Self::Output> {
        (**self).parse(state)
    }
}
