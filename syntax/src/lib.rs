// syntax/src/lib.rs
//
// Formula front end. Pipeline:
//   1. Normalize (ASCII aliases → canonical symbols)
//   2. Tokenize (Logos DFA)
//   3. Parse (recursive descent) → AST

pub mod ast;
pub mod grammar;
pub mod lexer;
pub mod normalize;

pub use ast::{Expr, QuantifierOp};
pub use grammar::{parse_tokens, ParseError, Parser};
pub use lexer::{tokenize, LexError, Token, TokenKind};
pub use normalize::normalize;

use thiserror::Error;

/// Any failure while turning a formula string into an AST.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Normalize, tokenize, and parse a formula string.
pub fn parse_formula(formula: &str) -> Result<Expr, SyntaxError> {
    let normalized = normalize(formula);
    let tokens = tokenize(&normalized)?;
    Ok(parse_tokens(&tokens)?)
}
