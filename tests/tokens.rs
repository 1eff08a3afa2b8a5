//! Parsing a token stream produced by a separate lexer

use seqparse::{
    Deferred, MapExt, OrExt, ParseError, ParseResult, ParseState, Parser, SequenceExt, between,
    deferred, end_of_input, is_symbol, parse, separated_by,
};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    LParen,
    RParen,
    Comma,
    Num(i64),
    Ident(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Num(n) => write!(f, "{}", n),
            Token::Ident(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Expr {
    Num(i64),
    Var(String),
    Call(String, Vec<Expr>),
}

/// Matches one token of a given kind and extracts its payload
struct Kind<F> {
    label: &'static str,
    extract: F,
}

impl<F, O> Parser for Kind<F>
where
    F: Fn(&Token) -> Option<O>,
{
    type Symbol = Token;
    type Output = O;

    fn parse(&self, state: &ParseState<Token>) -> ParseResult<Token, O> {
        match state.current() {
            Some(token) => match (self.extract)(token) {
                Some(value) => ParseResult::success(state.advance(), value),
                None => ParseResult::failure(
                    state.clone(),
                    ParseError::unexpected_symbol(self.label, token),
                ),
            },
            None => ParseResult::failure(state.clone(), ParseError::unexpected_end(self.label)),
        }
    }
}

fn identifier() -> impl Parser<Symbol = Token, Output = String> {
    Kind {
        label: "an identifier",
        extract: |token: &Token| match token {
            Token::Ident(name) => Some(name.clone()),
            _ => None,
        },
    }
}

fn number() -> impl Parser<Symbol = Token, Output = i64> {
    Kind {
        label: "a number",
        extract: |token: &Token| match token {
            Token::Num(n) => Some(*n),
            _ => None,
        },
    }
}

/// expr := ident '(' expr (',' expr)* ')' | number | ident
fn expression() -> Deferred<Token, Expr> {
    let expr: Deferred<Token, Expr> = deferred();

    let arguments = separated_by(expr.clone(), is_symbol(Token::Comma));
    let call = identifier()
        .and(between(is_symbol(Token::LParen), arguments, is_symbol(Token::RParen)))
        .map(|(name, args)| Expr::Call(name, args));

    let rule = call
        .or(number().map(Expr::Num))
        .or(identifier().map(Expr::Var));
    expr.define(rule).unwrap();
    expr
}

fn ident(name: &str) -> Token {
    Token::Ident(name.to_string())
}

#[test]
fn test_nested_call() {
    // f(1, g(x), 3)
    let tokens = vec![
        ident("f"),
        Token::LParen,
        Token::Num(1),
        Token::Comma,
        ident("g"),
        Token::LParen,
        ident("x"),
        Token::RParen,
        Token::Comma,
        Token::Num(3),
        Token::RParen,
    ];

    let result = parse(&expression(), tokens);

    let expected = Expr::Call(
        "f".to_string(),
        vec![
            Expr::Num(1),
            Expr::Call("g".to_string(), vec![Expr::Var("x".to_string())]),
            Expr::Num(3),
        ],
    );
    assert_eq!(result.value(), Some(&expected));
    assert_eq!(result.cursor(), 11);
}

#[test]
fn test_unclosed_call_backtracks_to_variable() {
    let result = parse(&expression(), vec![ident("f"), Token::LParen, Token::Num(1)]);

    assert_eq!(result.value(), Some(&Expr::Var("f".to_string())));
    assert_eq!(result.cursor(), 1);
}

#[test]
fn test_anchored_grammar_rejects_leftovers() {
    let grammar = expression().and(end_of_input()).map(|(expr, _)| expr);
    let result = parse(&grammar, vec![ident("f"), Token::LParen, Token::Num(1)]);

    assert!(result.is_failure());
    assert_eq!(result.message().as_deref(), Some("expected end of input"));
    assert_eq!(result.cursor(), 1);
}

#[test]
fn test_kind_mismatch_reports_token() {
    let result = parse(&number(), vec![Token::Comma]);

    assert_eq!(
        result.error(),
        Some(&ParseError::unexpected_symbol("a number", ","))
    );
}

#[test]
fn test_empty_stream() {
    let result = parse(&expression(), Vec::<Token>::new());

    assert!(result.is_failure());
    assert_eq!(
        result.error().map(|e| e.alternatives().len()),
        Some(3)
    );
}
