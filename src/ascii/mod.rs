pub mod digit;
pub mod whitespace;

pub use digit::digit;
pub use whitespace::{SkipWhitespace, skip_whitespace, whitespace};
