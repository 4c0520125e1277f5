//! Tokenizer for normalized formulas.
//!
//! A Logos DFA over the canonical symbol alphabet. Identifiers are single
//! characters: lowercase letters are variables (or constants — which of the
//! two a letter is gets decided against the model at evaluation time),
//! uppercase letters are predicate or sentence-letter names. Whitespace is
//! skipped. `=` and `≠` are recognized so equality-flavored input lexes
//! cleanly, but no grammar production consumes them.

use std::fmt;

use logos::Logos;
use thiserror::Error;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    /// `∀` or `∃`
    #[regex("[∀∃]")]
    Quantifier,

    /// Single lowercase letter
    #[regex("[a-z]")]
    Variable,

    /// Single uppercase letter
    #[regex("[A-Z]")]
    Predicate,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("∧")]
    And,

    #[token("∨")]
    Or,

    #[token("→")]
    Implies,

    #[token("¬")]
    Not,

    #[token("=")]
    Equal,

    #[token("≠")]
    NotEqual,

    #[token(",")]
    Comma,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Quantifier => "QUANTIFIER",
            TokenKind::Variable => "VARIABLE",
            TokenKind::Predicate => "PREDICATE",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::And => "'∧'",
            TokenKind::Or => "'∨'",
            TokenKind::Implies => "'→'",
            TokenKind::Not => "'¬'",
            TokenKind::Equal => "'='",
            TokenKind::NotEqual => "'≠'",
            TokenKind::Comma => "','",
        };
        f.write_str(name)
    }
}

/// A token with its source slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
}

/// No token pattern matched at `position` (in characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unexpected character '{character}' at position {position}")]
pub struct LexError {
    pub position: usize,
    pub character: char,
}

/// Tokenize a normalized formula into a flat token sequence.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lex = TokenKind::lexer(input);
    let mut tokens = Vec::new();

    while let Some(result) = lex.next() {
        match result {
            Ok(kind) => tokens.push(Token {
                kind,
                text: lex.slice(),
            }),
            Err(()) => {
                let start = lex.span().start;
                return Err(LexError {
                    position: input[..start].chars().count(),
                    character: input[start..].chars().next().unwrap_or('\u{fffd}'),
                });
            }
        }
    }

    Ok(tokens)
}
