use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::state::ParseState;
use std::borrow::Cow;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value fails with the given message at the state the filter
/// was started from; a failure of the inner parser passes through unchanged.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
    error_message: Cow<'static, str>,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F, error_message: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            error_message,
        }
    }
}

impl<P, F> Parser for FilterParser<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    type Symbol = P::Symbol;
    type Output = P::Output;

    fn parse(&self, state: &ParseState<Self::Symbol>) -> ParseResult<Self::Symbol, Self::Output> {
        match self.parser.parse(state) {
            ParseResult::Success { value, .. } if !(self.predicate)(&value) => {
                ParseResult::failure(state.clone(), ParseError::syntax(self.error_message.clone()))
            }
            result => result,
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt: Parser {
    fn filter<F>(
        self,
        predicate: F,
        error_message: impl Into<Cow<'static, str>>,
    ) -> FilterParser<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate, error_message.into())
    }
}

impl<P: Parser> FilterExt for P {}

/// Convenience function to create a filtered parser
pub fn filter<P, F>(
    parser: P,
    predicate: F,
    error_message: impl Into<Cow<'static, str>>,
) -> FilterParser<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate, error_message.into())
}
