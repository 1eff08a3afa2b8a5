use crate::parser::Parser;
use crate::result::ParseResult;
use crate::state::ParseState;
use crate::symbol::Symbol;
use std::rc::Rc;

/// A type-erased, cheaply clonable parser
///
/// Combinator types nest quickly; boxing a rule gives it a nameable type,
/// which is what a function returning a recursive grammar needs.
pub struct BoxedParser<T: Symbol, O> {
    parser: Rc<dyn Parser<Symbol = T, Output = O>>,
}

impl<T: Symbol, O> Clone for BoxedParser<T, O> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<T: Symbol, O> BoxedParser<T, O> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<Symbol = T, Output = O> + 'static,
    {
        BoxedParser {
            parser: Rc::new(parser),
        }
    }
}

impl<T: Symbol, O> Parser for BoxedParser<T, O> {
    type Symbol = T;
    type Output = O;

    fn parse(&self, state: &ParseState<T>) -> ParseResult<T, O> {
        self.parser.parse(state)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt: Parser + Sized + 'static {
    fn boxed(self) -> BoxedParser<Self::Symbol, Self::Output> {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<P> BoxedExt for P where P: Parser + 'static {}
