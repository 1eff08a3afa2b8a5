use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::state::ParseState;

/// Ordered alternation over any number of parsers of the same type
///
/// Behaves exactly like folding the operands together with [`crate::or`]
/// from the left: operands run in order against the same state, the first
/// success is returned, and when everything fails the messages are joined
/// left-associatively.
pub struct Choice<P> {
    first: P,
    rest: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(first: P, rest: impl IntoIterator<Item = P>) -> Self {
        Choice {
            first,
            rest: rest.into_iter().collect(),
        }
    }
}

impl<P: Parser> Parser for Choice<P> {
    type Symbol = P::Symbol;
    type Output = P::Output;

    fn parse(&self, state: &ParseState<Self::Symbol>) -> ParseResult<Self::Symbol, Self::Output> {
        let mut error = match self.first.parse(state) {
            ParseResult::Failure { error, .. } => error,
            success => return success,
        };

        for parser in &self.rest {
            match parser.parse(state) {
                ParseResult::Failure { error: next, .. } => {
                    error = ParseError::aggregate(error, next);
                }
                success => return success,
            }
        }

        log_trace!(
            "choice of {} alternatives exhausted at cursor {}",
            self.rest.len() + 1,
            state.cursor()
        );
        ParseResult::failure(state.clone(), error)
    }
}

/// Convenience function to create a Choice parser
///
/// Taking the first operand separately keeps the alternation non-empty.
pub fn choice<P: Parser>(first: P, rest: impl IntoIterator<Item = P>) -> Choice<P> {
    Choice::new(first, rest)
}
