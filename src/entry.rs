//! Running a parser over a whole input.

use crate::parser::Parser;
use crate::result::ParseResult;
use crate::state::ParseState;
use std::rc::Rc;

/// Run `parser` from the start of `sequence`
///
/// Parsing stops wherever the grammar stops; unconsumed trailing input is
/// not an error. Follow the grammar with [`crate::end_of_input`] to demand
/// that everything is consumed.
pub fn parse<P>(
    parser: &P,
    sequence: impl Into<Rc<[P::Symbol]>>,
) -> ParseResult<P::Symbol, P::Output>
where
    P: Parser + ?Sized,
{
    let state = ParseState::new(sequence);
    log_debug!("parsing {} symbols", state.sequence().len());

    let result = parser.parse(&state);
    log_debug!(
        "parse {} at cursor {}",
        if result.is_success() { "succeeded" } else { "failed" },
        result.cursor()
    );
    result
}

/// Run `parser` over `text`, one symbol per character
pub fn parse_string<P>(parser: &P, text: &str) -> ParseResult<char, P::Output>
where
    P: Parser<Symbol = char> + ?Sized,
{
    parse(parser, text.chars().collect::<Rc<[char]>>())
}

/// Run `parser` over raw bytes
pub fn parse_bytes<P>(parser: &P, bytes: &[u8]) -> ParseResult<u8, P::Output>
where
    P: Parser<Symbol = u8> + ?Sized,
{
    parse(parser, bytes)
}
