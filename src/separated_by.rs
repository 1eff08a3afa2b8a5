use crate::parser::Parser;
use crate::result::ParseResult;
use crate::state::ParseState;

/// Parser combinator that matches a list of items separated by a parser
///
/// Alternates between the item parser and the separator, collecting items
/// until either one fails. Never fails itself: an empty list is a valid
/// result, and the state returned is the one after the last accepted item
/// or separator. A trailing separator is therefore consumed.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `['a', 'b', 'c']`, everything consumed
/// - `"a,b,"` with separator `,` → `['a', 'b']`, trailing `,` consumed
/// - `";"` with separator `;` → `[]`, nothing consumed
///
/// # Note
/// At least one of the two parsers must consume input on success or the
/// loop never ends.
pub struct SeparatedBy<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedBy<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedBy { parser, separator }
    }
}

impl<P, PS> Parser for SeparatedBy<P, PS>
where
    P: Parser,
    PS: Parser<Symbol = P::Symbol>,
{
    type Symbol = P::Symbol;
    type Output = Vec<P::Output>;

    fn parse(&self, state: &ParseState<Self::Symbol>) -> ParseResult<Self::Symbol, Self::Output> {
        let mut results = Vec::new();
        let mut current = state.clone();

        loop {
            match self.parser.parse(&current) {
                ParseResult::Success { state, value } => {
                    results.push(value);
                    current = state;
                }
                ParseResult::Failure { .. } => break,
            }

            match self.separator.parse(&current) {
                ParseResult::Success { state, .. } => current = state,
                ParseResult::Failure { .. } => break,
            }
        }

        ParseResult::success(current, results)
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn separated_by<P, PS>(parser: P, separator: PS) -> SeparatedBy<P, PS>
where
    P: Parser,
    PS: Parser<Symbol = P::Symbol>,
{
    SeparatedBy::new(parser, separator)
}
