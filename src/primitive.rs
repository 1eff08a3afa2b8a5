use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::state::ParseState;
use crate::symbol::Symbol;
use std::marker::PhantomData;

/// Parser that consumes and returns whatever symbol is under the cursor
pub struct AnySymbol<T> {
    _phantom: PhantomData<T>,
}

impl<T> AnySymbol<T> {
    pub fn new() -> Self {
        AnySymbol {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for AnySymbol<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Symbol> Parser for AnySymbol<T> {
    type Symbol = T;
    type Output = T;

    fn parse(&self, state: &ParseState<T>) -> ParseResult<T, T> {
        match state.current() {
            Some(symbol) => ParseResult::success(state.advance(), symbol.clone()),
            None => ParseResult::failure(state.clone(), ParseError::unexpected_end("a character")),
        }
    }
}

/// Parser that matches one specific symbol
pub struct IsSymbol<T> {
    expected: T,
}

impl<T: Symbol> IsSymbol<T> {
    pub fn new(expected: T) -> Self {
        IsSymbol { expected }
    }

    fn expectation(&self) -> String {
        format!("the character {}", self.expected)
    }
}

impl<T: Symbol> Parser for IsSymbol<T> {
    type Symbol = T;
    type Output = T;

    fn parse(&self, state: &ParseState<T>) -> ParseResult<T, T> {
        match state.current() {
            Some(symbol) if *symbol == self.expected => {
                ParseResult::success(state.advance(), symbol.clone())
            }
            Some(symbol) => ParseResult::failure(
                state.clone(),
                ParseError::unexpected_symbol(self.expectation(), symbol),
            ),
            None => ParseResult::failure(
                state.clone(),
                ParseError::unexpected_end(self.expectation()),
            ),
        }
    }
}

/// Parser that matches any single symbol outside an excluded set
pub struct NoneOf<T> {
    excluded: Vec<T>,
}

impl<T: Symbol> NoneOf<T> {
    pub fn new(excluded: impl IntoIterator<Item = T>) -> Self {
        NoneOf {
            excluded: excluded.into_iter().collect(),
        }
    }
}

impl<T: Symbol> Parser for NoneOf<T> {
    type Symbol = T;
    type Output = T;

    fn parse(&self, state: &ParseState<T>) -> ParseResult<T, T> {
        match state.current() {
            None => ParseResult::failure(state.clone(), ParseError::unexpected_end("a character")),
            Some(symbol) if self.excluded.contains(symbol) => ParseResult::failure(
                state.clone(),
                ParseError::unexpected_symbol(
                    format!("not one of {}", T::join(&self.excluded)),
                    symbol,
                ),
            ),
            Some(symbol) => ParseResult::success(state.advance(), symbol.clone()),
        }
    }
}

/// Parser that matches a fixed run of symbols, all or nothing
pub struct IsSequence<T> {
    expected: Vec<T>,
}

impl<T: Symbol> IsSequence<T> {
    pub fn new(expected: impl IntoIterator<Item = T>) -> Self {
        IsSequence {
            expected: expected.into_iter().collect(),
        }
    }

    fn rendered(&self) -> String {
        self.expected.iter().map(ToString::to_string).collect()
    }
}

impl<T: Symbol> Parser for IsSequence<T> {
    type Symbol = T;
    type Output = Vec<T>;

    fn parse(&self, state: &ParseState<T>) -> ParseResult<T, Vec<T>> {
        let remaining = state.remaining();

        for (offset, expected) in self.expected.iter().enumerate() {
            match remaining.get(offset) {
                Some(found) if found == expected => {}
                Some(found) => {
                    return ParseResult::failure(
                        state.clone(),
                        ParseError::syntax(format!(
                            "expected '{}', found '{}' while matching '{}'",
                            expected,
                            found,
                            self.rendered()
                        )),
                    );
                }
                None => {
                    return ParseResult::failure(
                        state.clone(),
                        ParseError::syntax(format!(
                            "expected '{}', but reached end of input while matching '{}'",
                            expected,
                            self.rendered()
                        )),
                    );
                }
            }
        }

        ParseResult::success(state.advance_by(self.expected.len()), self.expected.clone())
    }
}

/// Zero-width parser that succeeds only once the input is exhausted
pub struct EndOfInput<T> {
    _phantom: PhantomData<T>,
}

impl<T> EndOfInput<T> {
    pub fn new() -> Self {
        EndOfInput {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for EndOfInput<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Symbol> Parser for EndOfInput<T> {
    type Symbol = T;
    type Output = ();

    fn parse(&self, state: &ParseState<T>) -> ParseResult<T, ()> {
        match state.current() {
            None => ParseResult::success(state.clone(), ()),
            Some(symbol) => ParseResult::failure(
                state.clone(),
                ParseError::unexpected_symbol("end of input", symbol),
            ),
        }
    }
}

/// Convenience function to create an AnySymbol parser
pub fn any_symbol<T: Symbol>() -> AnySymbol<T> {
    AnySymbol::new()
}

/// Convenience function to create an IsSymbol parser
pub fn is_symbol<T: Symbol>(expected: T) -> IsSymbol<T> {
    IsSymbol::new(expected)
}

/// Convenience function to create a NoneOf parser
pub fn none_of<T: Symbol>(excluded: impl IntoIterator<Item = T>) -> NoneOf<T> {
    NoneOf::new(excluded)
}

/// Convenience function to create an IsSequence parser
pub fn is_sequence<T: Symbol>(expected: impl IntoIterator<Item = T>) -> IsSequence<T> {
    IsSequence::new(expected)
}

/// Convenience function to create an EndOfInput parser
pub fn end_of_input<T: Symbol>() -> EndOfInput<T> {
    EndOfInput::new()
}
