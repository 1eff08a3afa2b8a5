use crate::parser::Parser;
use crate::result::ParseResult;
use crate::sequence::{Sequence, sequence};
use crate::state::ParseState;

/// Parser that matches content between opening and closing delimiters
///
/// This is a generic combinator that parses: `open + content + close`
/// and returns just the `content` value with the delimiters discarded.
/// It does not skip whitespace; wrap the content in
/// [`crate::skip_whitespace`] for that.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Between<P1, P2, P3> {
    inner: Sequence<P1, Sequence<P2, P3>>,
}

impl<P1, P2, P3> Between<P1, P2, P3>
where
    P1: Parser,
    P2: Parser<Symbol = P1::Symbol>,
    P3: Parser<Symbol = P1::Symbol>,
{
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            inner: sequence(open, sequence(content, close)),
        }
    }
}

impl<P1, P2, P3> Parser for Between<P1, P2, P3>
where
    P1: Parser,
    P2: Parser<Symbol = P1::Symbol>,
    P3: Parser<Symbol = P1::Symbol>,
{
    type Symbol = P1::Symbol;
    type Output = P2::Output;

    fn parse(&self, state: &ParseState<Self::Symbol>) -> ParseResult<Self::Symbol, Self::Output> {
        self.inner.parse(state).map_value(|(_, (content, _))| content)
    }
}

/// Convenience function to create a Between parser
pub fn between<P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser,
    P2: Parser<Symbol = P1::Symbol>,
    P3: Parser<Symbol = P1::Symbol>,
{
    Between::new(open, content, close)
}
