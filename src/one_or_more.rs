use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::state::ParseState;
use crate::zero_or_more::ZeroOrMore;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Runs [`ZeroOrMore`] and rejects an empty outcome. The same termination
/// caveat applies: the inner parser must consume input on success.
pub struct OneOrMore<P> {
    repeated: ZeroOrMore<P>,
}

impl<P> OneOrMore<P> {
    pub fn new(parser: P) -> Self {
        OneOrMore {
            repeated: ZeroOrMore::new(parser),
        }
    }
}

impl<P> Parser for OneOrMore<P>
where
    P: Parser,
{
    type Symbol = P::Symbol;
    type Output = Vec<P::Output>;

    fn parse(&self, state: &ParseState<Self::Symbol>) -> ParseResult<Self::Symbol, Self::Output> {
        match self.repeated.parse(state) {
            ParseResult::Success { value, .. } if value.is_empty() => {
                log_trace!("no repetitions at cursor {}", state.cursor());
                ParseResult::failure(state.clone(), ParseError::Arity)
            }
            result => result,
        }
    }
}

/// Convenience function to create a OneOrMore parser
pub fn one_or_more<P>(parser: P) -> OneOrMore<P>
where
    P: Parser,
{
    OneOrMore::new(parser)
}
