use crate::parser::Parser;
use crate::result::ParseResult;
use crate::state::ParseState;

/// Parser that runs the given parser and turns its failure into `None`
///
/// Never fails. On failure nothing is consumed: the result is positioned at
/// the state the combinator was given, whatever the inner parser reported.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<P> Parser for Optional<P>
where
    P: Parser,
{
    type Symbol = P::Symbol;
    type Output = Option<P::Output>;

    fn parse(&self, state: &ParseState<Self::Symbol>) -> ParseResult<Self::Symbol, Self::Output> {
        match self.parser.parse(state) {
            ParseResult::Success { state, value } => ParseResult::success(state, Some(value)),
            ParseResult::Failure { .. } => ParseResult::success(state.clone(), None),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<P>(parser: P) -> Optional<P>
where
    P: Parser,
{
    Optional::new(parser)
}
