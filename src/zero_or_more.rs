use crate::parser::Parser;
use crate::result::ParseResult;
use crate::state::ParseState;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. Stops at the first failing attempt and returns everything
/// collected so far, positioned after the last success; the failed attempt
/// leaves no trace.
///
/// The inner parser must consume at least one symbol whenever it succeeds.
/// A parser that can succeed without consuming anything makes this loop
/// forever.
pub struct ZeroOrMore<P> {
    parser: P,
}

impl<P> ZeroOrMore<P> {
    pub fn new(parser: P) -> Self {
        ZeroOrMore { parser }
    }
}

impl<P> Parser for ZeroOrMore<P>
where
    P: Parser,
{
    type Symbol = P::Symbol;
    type Output = Vec<P::Output>;

    fn parse(&self, state: &ParseState<Self::Symbol>) -> ParseResult<Self::Symbol, Self::Output> {
        let mut results = Vec::new();
        let mut current = state.clone();

        while let ParseResult::Success { state, value } = self.parser.parse(&current) {
            results.push(value);
            current = state;
        }

        ParseResult::success(current, results)
    }
}

/// Convenience function to create a ZeroOrMore parser
pub fn zero_or_more<P>(parser: P) -> ZeroOrMore<P>
where
    P: Parser,
{
    ZeroOrMore::new(parser)
}
