use crate::boxed::BoxedParser;
use crate::error::{GrammarError, ParseError};
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::state::ParseState;
use crate::symbol::Symbol;
use std::cell::OnceCell;
use std::rc::Rc;

/// A grammar rule that can be referenced before it is defined
///
/// Clones share one slot. Hand clones to the rules that refer to this one,
/// then call [`Deferred::define`] once every rule exists. Running it before
/// that fails with [`ParseError::Undefined`].
///
/// A rule that refers back to itself through its own handle forms an `Rc`
/// cycle and is never freed.
pub struct Deferred<T: Symbol, O> {
    slot: Rc<OnceCell<BoxedParser<T, O>>>,
}

impl<T: Symbol, O> Clone for Deferred<T, O> {
    fn clone(&self) -> Self {
        Deferred {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: Symbol, O> Default for Deferred<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Symbol, O> Deferred<T, O> {
    pub fn new() -> Self {
        Deferred {
            slot: Rc::new(OnceCell::new()),
        }
    }

    /// Provide the rule's definition; a rule can only be defined once
    pub fn define<P>(&self, parser: P) -> Result<(), GrammarError>
    where
        P: Parser<Symbol = T, Output = O> + 'static,
    {
        self.slot
            .set(BoxedParser::new(parser))
            .map_err(|_| GrammarError::AlreadyDefined)
    }

    pub fn is_defined(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<T: Symbol, O> Parser for Deferred<T, O> {
    type Symbol = T;
    type Output = O;

    fn parse(&self, state: &ParseState<T>) -> ParseResult<T, O> {
        match self.slot.get() {
            Some(parser) => parser.parse(state),
            None => {
                log_debug!("undefined rule invoked at cursor {}", state.cursor());
                ParseResult::failure(state.clone(), ParseError::Undefined)
            }
        }
    }
}

/// Convenience function to create an undefined Deferred rule
pub fn deferred<T: Symbol, O>() -> Deferred<T, O> {
    Deferred::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::primitive::is_symbol;
    use crate::sequence::SequenceExt;

    #[test]
    fn test_undefined_rule_fails() {
        let rule: Deferred<char, char> = deferred();
        let state = ParseState::from_text("a");

        let result = rule.parse(&state);
        assert_eq!(result, ParseResult::failure(state.clone(), ParseError::Undefined));
        assert!(!rule.is_defined());
    }

    #[test]
    fn test_define_once() {
        let rule: Deferred<char, char> = deferred();
        assert_eq!(rule.define(is_symbol('a')), Ok(()));
        assert_eq!(rule.define(is_symbol('b')), Err(GrammarError::AlreadyDefined));

        let result = rule.parse(&ParseState::from_text("a"));
        assert_eq!(result.value(), Some(&'a'));
    }

    #[test]
    fn test_clones_see_definition() {
        let rule: Deferred<char, char> = deferred();
        let handle = rule.clone();
        rule.define(is_symbol('z')).unwrap();

        assert!(handle.is_defined());
        assert_eq!(handle.parse(&ParseState::from_text("z")).cursor(), 1);
    }

    #[test]
    fn test_self_referencing_rule() {
        // list := 'x' | '[' list ']'
        let list: Deferred<char, usize> = deferred();
        let bracketed = is_symbol('[')
            .and(list.clone())
            .and(is_symbol(']'))
            .map(|((_, depth), _)| depth + 1);
        list.define(is_symbol('x').map(|_| 0).or(bracketed)).unwrap();

        let result = list.parse(&ParseState::from_text("[[[x]]]"));
        assert_eq!(result.value(), Some(&3));
        assert!(result.state().is_at_end());
    }
}
