use std::fmt;

/// Trait for the elements a parser consumes
///
/// Matchers only ever compare symbols for equality and render them into
/// error messages, so anything cloneable, comparable and displayable
/// qualifies: `char` for text, `u8` for bytes, or a token type produced by
/// a separate lexer.
pub trait Symbol: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// Render a list of symbols for error reporting, comma separated
    fn join(symbols: &[Self]) -> String {
        symbols
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<T> Symbol for T where T: Clone + PartialEq + fmt::Debug + fmt::Display {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Token {
        Open,
        Close,
    }

    impl fmt::Display for Token {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Token::Open => write!(f, "("),
                Token::Close => write!(f, ")"),
            }
        }
    }

    #[test]
    fn test_join_chars() {
        assert_eq!(char::join(&['(', ')', '"']), "(, ), \"");
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(u8::join(&[]), "");
    }

    #[test]
    fn test_join_tokens() {
        assert_eq!(Token::join(&[Token::Open, Token::Close]), "(, )");
    }
}
