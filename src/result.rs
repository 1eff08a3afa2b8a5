use crate::error::ParseError;
use crate::state::ParseState;

/// Outcome of running a parser, always paired with the state it ended in
///
/// On success the state is where parsing should resume. On failure the
/// state only records how far the failing parser got; combinators that
/// backtrack keep their own starting state instead of resuming from it.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult<T, O> {
    Success { state: ParseState<T>, value: O },
    Failure { state: ParseState<T>, error: ParseError },
}

impl<T, O> ParseResult<T, O> {
    pub fn success(state: ParseState<T>, value: O) -> Self {
        ParseResult::Success { state, value }
    }

    pub fn failure(state: ParseState<T>, error: ParseError) -> Self {
        ParseResult::Failure { state, error }
    }

    pub fn state(&self) -> &ParseState<T> {
        match self {
            ParseResult::Success { state, .. } => state,
            ParseResult::Failure { state, .. } => state,
        }
    }

    pub fn cursor(&self) -> usize {
        self.state().cursor()
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn value(&self) -> Option<&O> {
        match self {
            ParseResult::Success { value, .. } => Some(value),
            ParseResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&ParseError> {
        match self {
            ParseResult::Success { .. } => None,
            ParseResult::Failure { error, .. } => Some(error),
        }
    }

    /// The rendered failure message, if this is a failure
    pub fn message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    /// Transform a success payload; failures pass through untouched
    pub fn map_value<U>(self, mapper: impl FnOnce(O) -> U) -> ParseResult<T, U> {
        match self {
            ParseResult::Success { state, value } => ParseResult::success(state, mapper(value)),
            ParseResult::Failure { state, error } => ParseResult::failure(state, error),
        }
    }

    /// Convert into a plain `Result`, dropping the state of a failure
    pub fn into_result(self) -> Result<(O, ParseState<T>), ParseError> {
        match self {
            ParseResult::Success { state, value } => Ok((value, state)),
            ParseResult::Failure { error, .. } => Err(error),
        }
    }
}
