use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::state::ParseState;

/// Parser combinator that tries the first parser, and if it fails, tries the
/// second parser from the same starting state
///
/// The first success wins and the second parser is then never run, so the
/// order of operands decides which alternative is taken on overlapping
/// input. When both fail the failure is reported at the starting state with
/// both messages joined by `or`.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2> Parser for Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Symbol = P1::Symbol, Output = P1::Output>,
{
    type Symbol = P1::Symbol;
    type Output = P1::Output;

    fn parse(&self, state: &ParseState<Self::Symbol>) -> ParseResult<Self::Symbol, Self::Output> {
        let first = match self.parser1.parse(state) {
            ParseResult::Failure { error, .. } => error,
            success => return success,
        };

        let second = match self.parser2.parse(state) {
            ParseResult::Failure { error, .. } => error,
            success => return success,
        };

        log_trace!("alternation exhausted at cursor {}", state.cursor());
        ParseResult::failure(state.clone(), ParseError::aggregate(first, second))
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Symbol = Self::Symbol, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Symbol = P1::Symbol, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}
