use std::borrow::Cow;
use thiserror::Error;

/// Why a parser failed
///
/// The rendered message of an error is what callers see as the failure
/// message. Alternation nests the errors of every operand it tried, so a
/// failure can be walked back to the individual expectations with
/// [`ParseError::alternatives`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A matcher found a different symbol than it required
    #[error("expected {expected}")]
    UnexpectedSymbol {
        expected: Cow<'static, str>,
        found: String,
    },
    /// A matcher required a symbol but the input was exhausted
    #[error("expected {expected}")]
    UnexpectedEnd { expected: Cow<'static, str> },
    /// Every operand of an alternation failed
    #[error("{first} or {second}")]
    Aggregate {
        first: Box<ParseError>,
        second: Box<ParseError>,
    },
    /// A one-or-more repetition matched nothing
    #[error("expected at least one of something")]
    Arity,
    #[error("{message}")]
    Syntax { message: Cow<'static, str> },
    /// A deferred grammar rule was invoked before it was defined
    #[error("parser invoked before its definition was provided")]
    Undefined,
}

impl ParseError {
    pub fn unexpected_symbol(
        expected: impl Into<Cow<'static, str>>,
        found: impl ToString,
    ) -> Self {
        ParseError::UnexpectedSymbol {
            expected: expected.into(),
            found: found.to_string(),
        }
    }

    pub fn unexpected_end(expected: impl Into<Cow<'static, str>>) -> Self {
        ParseError::UnexpectedEnd {
            expected: expected.into(),
        }
    }

    pub fn syntax(message: impl Into<Cow<'static, str>>) -> Self {
        ParseError::Syntax {
            message: message.into(),
        }
    }

    /// Combine the errors of two failed alternatives, left to right
    pub fn aggregate(first: ParseError, second: ParseError) -> Self {
        ParseError::Aggregate {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// Flatten nested aggregates into the leaf errors, in the order the
    /// alternatives were tried
    pub fn alternatives(&self) -> Vec<&ParseError> {
        let mut leaves = Vec::new();
        let mut pending = vec![self];

        while let Some(error) = pending.pop() {
            match error {
                ParseError::Aggregate { first, second } => {
                    pending.push(second);
                    pending.push(first);
                }
                leaf => leaves.push(leaf),
            }
        }

        leaves
    }
}

/// Mistakes made while assembling a grammar, as opposed to running it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("deferred parser was already defined")]
    AlreadyDefined,
}
