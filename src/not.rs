use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::state::ParseState;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome, so it must not be the
/// only thing inside a repetition.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<P> Parser for Not<P>
where
    P: Parser,
{
    type Symbol = P::Symbol;
    type Output = ();

    fn parse(&self, state: &ParseState<Self::Symbol>) -> ParseResult<Self::Symbol, Self::Output> {
        match self.parser.parse(state) {
            ParseResult::Success { .. } => ParseResult::failure(
                state.clone(),
                ParseError::syntax("negative lookahead failed: unexpected match"),
            ),
            ParseResult::Failure { .. } => ParseResult::success(state.clone(), ()),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<P>(parser: P) -> Not<P>
where
    P: Parser,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt: Parser + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<P> NotExt for P where P: Parser {}
