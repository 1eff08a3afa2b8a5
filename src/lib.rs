//! # seqparse - Backtracking Parser Combinators
//!
//! Small matchers and higher-order combinators that compose into
//! recursive-descent parsers over any finite sequence of symbols: the
//! characters of a string, raw bytes, or tokens from a separate lexer.
//!
//! - **Pure parsers**: a parser maps a [`ParseState`] to a [`ParseResult`]
//!   and has no other effect, so combinators may run it any number of times
//! - **Explicit backtracking**: alternation and optionality retry from the
//!   state they were given, never from where a failed branch stopped
//! - **No panics**: every failure is an ordinary value carrying a
//!   [`ParseError`] and the state it was reached at
//! - **Recursive grammars**: [`lazy`] and [`Deferred`] let a rule refer to
//!   itself
//!
//! ```
//! use seqparse::{MapExt, SequenceExt, digit, one_or_more, optional, is_symbol, parse_string};
//!
//! let integer = optional(is_symbol('-'))
//!     .and(one_or_more(digit::<char>()))
//!     .map(|(sign, digits)| {
//!         let magnitude: i64 = digits.iter().collect::<String>().parse().unwrap_or(0);
//!         if sign.is_some() { -magnitude } else { magnitude }
//!     });
//!
//! let result = parse_string(&integer, "-42 apples");
//! assert_eq!(result.value(), Some(&-42));
//! assert_eq!(result.cursor(), 3);
//! ```
//!
//! Alternation tries operands left to right with no memoization, so deeply
//! nested alternatives over long inputs can take exponential time.

#[macro_use]
mod macros;

pub mod ascii;
pub mod between;
pub mod boxed;
pub mod choice;
pub mod deferred;
pub mod entry;
pub mod error;
pub mod filter;
pub mod lazy;
pub mod map;
pub mod not;
pub mod one_or_more;
pub mod optional;
pub mod or;
pub mod parser;
pub mod primitive;
pub mod result;
pub mod separated_by;
pub mod sequence;
pub mod state;
pub mod symbol;
pub mod zero_or_more;

pub use ascii::{SkipWhitespace, digit, skip_whitespace, whitespace};
pub use between::{Between, between};
pub use boxed::{BoxedExt, BoxedParser};
pub use choice::{Choice, choice};
pub use deferred::{Deferred, deferred};
pub use entry::{parse, parse_bytes, parse_string};
pub use error::{GrammarError, ParseError};
pub use filter::{FilterExt, FilterParser, filter};
pub use lazy::{Lazy, lazy};
pub use map::{Map, MapExt, map};
pub use not::{Not, NotExt, not};
pub use one_or_more::{OneOrMore, one_or_more};
pub use optional::{Optional, optional};
pub use or::{Or, OrExt, or};
pub use parser::Parser;
pub use primitive::{
    AnySymbol, EndOfInput, IsSequence, IsSymbol, NoneOf, any_symbol, end_of_input, is_sequence,
    is_symbol, none_of,
};
pub use result::ParseResult;
pub use separated_by::{SeparatedBy, separated_by};
pub use sequence::{Sequence, SequenceExt, sequence};
pub use state::ParseState;
pub use symbol::Symbol;
pub use zero_or_more::{ZeroOrMore, zero_or_more};
