use crate::parser::Parser;
use crate::result::ParseResult;
use crate::state::ParseState;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking recursion between parsers.
///
/// The factory is called on every invocation, so a grammar rule written as a
/// function can mention itself through `lazy(rule)` without recursing while
/// the grammar is being built. The rule needs a nameable return type for
/// that, usually [`crate::BoxedParser`].
pub struct Lazy<F> {
    factory: F,
}

impl<F, P> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F, P> Parser for Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    type Symbol = P::Symbol;
    type Output = P::Output;

    fn parse(&self, state: &ParseState<Self::Symbol>) -> ParseResult<Self::Symbol, Self::Output> {
        let parser = (self.factory)();
        parser.parse(state)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy::new(factory)
}
