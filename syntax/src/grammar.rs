//! Recursive descent parser over the token stream.
//!
//! Grammar, lowest to highest binding precedence:
//!
//!   expr       → disjunct ( '→' disjunct )?        at most ONE implication
//!   disjunct   → conjunct ( '∨' conjunct )*        left-associative
//!   conjunct   → quantified ( '∧' quantified )*    left-associative
//!   quantified → ( QUANTIFIER VARIABLE )? quantified | negation
//!   negation   → '¬' negation | '(' expr ')' | predicate
//!   predicate  → PREDICATE ( '(' term (',' term)* ')' )?
//!   term       → VARIABLE
//!
//! Implication does not chain: `A → B → C` consumes the first arrow, then
//! fails on the unconsumed remainder. Quantifiers are right-recursive and
//! greedy, so `∀x∃y(P(x,y))` parses as `∀x(∃y(P(x,y)))`. Parsing is a pure
//! function from the token slice to an AST or a `ParseError`.

use thiserror::Error;

use crate::ast::{Expr, QuantifierOp};
use crate::lexer::{Token, TokenKind};

/// Parse error with the token position it was raised at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected} but found {found} at token {position}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        position: usize,
    },

    #[error("expected {expected} but the formula ended")]
    UnexpectedEnd { expected: TokenKind },

    #[error("expected a predicate but found {found} at token {position}")]
    ExpectedPredicate { found: TokenKind, position: usize },

    #[error("expected a predicate but the formula ended")]
    ExpectedPredicateAtEnd,

    #[error("{remaining} unconsumed token(s) starting with {found} at token {position}")]
    TrailingTokens {
        remaining: usize,
        found: TokenKind,
        position: usize,
    },
}

/// Recursive descent parser state: the token slice and a cursor.
pub struct Parser<'src> {
    tokens: &'src [Token<'src>],
    pos: usize,
}

impl<'src> Parser<'src> {
    pub fn new(tokens: &'src [Token<'src>]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn consume(&mut self, expected: TokenKind) -> Result<Token<'src>, ParseError> {
        match self.peek().copied() {
            Some(token) if token.kind == expected => {
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(ParseError::UnexpectedToken {
                expected,
                found: token.kind,
                position: self.pos,
            }),
            None => Err(ParseError::UnexpectedEnd { expected }),
        }
    }

    /// expr → disjunct ( '→' disjunct )?
    ///
    /// Deliberately permits a single implication per level; a second arrow
    /// at the same level is left unconsumed and caught by the caller's
    /// trailing-token check.
    pub fn expr(&mut self) -> Result<Expr, ParseError> {
        let left = self.disjunct()?;
        if self.peek_kind() == Some(TokenKind::Implies) {
            self.consume(TokenKind::Implies)?;
            let right = self.disjunct()?;
            return Ok(Expr::Implies(Box::new(left), Box::new(right)));
        }
        Ok(left)
    }

    /// disjunct → conjunct ( '∨' conjunct )*
    fn disjunct(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.conjunct()?;
        while self.peek_kind() == Some(TokenKind::Or) {
            self.consume(TokenKind::Or)?;
            let right = self.conjunct()?;
            left = Expr::Or(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    /// conjunct → quantified ( '∧' quantified )*
    fn conjunct(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.quantified()?;
        while self.peek_kind() == Some(TokenKind::And) {
            self.consume(TokenKind::And)?;
            let right = self.quantified()?;
            left = Expr::And(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    /// quantified → ( QUANTIFIER VARIABLE )? quantified | negation
    ///
    /// Right-recursive: each quantifier binds the entire remainder of the
    /// expression at its nesting point.
    fn quantified(&mut self) -> Result<Expr, ParseError> {
        if self.peek_kind() == Some(TokenKind::Quantifier) {
            let op = match self.consume(TokenKind::Quantifier)?.text {
                "∀" => QuantifierOp::ForAll,
                _ => QuantifierOp::Exists,
            };
            let variable = self.consume(TokenKind::Variable)?.text.to_string();
            let body = self.quantified()?;
            return Ok(Expr::Quantifier {
                op,
                variable,
                body: Box::new(body),
            });
        }
        self.negation()
    }

    /// negation → '¬' negation | '(' expr ')' | predicate
    fn negation(&mut self) -> Result<Expr, ParseError> {
        match self.peek_kind() {
            Some(TokenKind::Not) => {
                self.consume(TokenKind::Not)?;
                let inner = self.negation()?;
                Ok(Expr::Not(Box::new(inner)))
            }
            Some(TokenKind::LParen) => {
                self.consume(TokenKind::LParen)?;
                let inner = self.expr()?;
                self.consume(TokenKind::RParen)?;
                Ok(inner)
            }
            _ => self.predicate(),
        }
    }

    /// predicate → PREDICATE ( '(' term (',' term)* ')' )?
    fn predicate(&mut self) -> Result<Expr, ParseError> {
        let name = match self.peek().copied() {
            Some(token) if token.kind == TokenKind::Predicate => {
                self.pos += 1;
                token.text.to_string()
            }
            Some(token) => {
                return Err(ParseError::ExpectedPredicate {
                    found: token.kind,
                    position: self.pos,
                })
            }
            None => return Err(ParseError::ExpectedPredicateAtEnd),
        };

        let mut terms = Vec::new();
        if self.peek_kind() == Some(TokenKind::LParen) {
            self.consume(TokenKind::LParen)?;
            terms.push(self.term()?);
            while self.peek_kind() == Some(TokenKind::Comma) {
                self.consume(TokenKind::Comma)?;
                terms.push(self.term()?);
            }
            self.consume(TokenKind::RParen)?;
        }

        Ok(Expr::Predicate { name, terms })
    }

    /// term → VARIABLE
    ///
    /// Lowercase letters cover both variables and constants; which one a
    /// letter is gets decided against the binding environment at
    /// evaluation time.
    fn term(&mut self) -> Result<String, ParseError> {
        Ok(self.consume(TokenKind::Variable)?.text.to_string())
    }

    /// Fail if any tokens remain after the root expression.
    fn expect_end(&self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(ParseError::TrailingTokens {
                remaining: self.tokens.len() - self.pos,
                found: token.kind,
                position: self.pos,
            }),
        }
    }
}

/// Parse a complete token sequence into an AST.
pub fn parse_tokens(tokens: &[Token]) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(tokens);
    let expr = parser.expr()?;
    parser.expect_end()?;
    Ok(expr)
}
