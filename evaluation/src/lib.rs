// evaluation/src/lib.rs
//
// Front door for the whole pipeline:
//   formula string → (normalize, tokenize, parse) → AST
//   AST + model    → recursive evaluation → bool
//
// Evaluation is a pure function of (AST, model): the model is borrowed
// immutably, variable bindings live in a per-call scope stack, and calling
// `evaluate` twice on the same inputs returns the same answer twice.

pub mod evaluator;

pub use evaluator::{EvalError, EvalTrace, NodeId};

use evaluator::Session;
use veridic_semantics::Model;
use veridic_syntax::ast::Expr;
use veridic_syntax::SyntaxError;

/// Parse a formula into an AST.
///
/// The model reference is part of the signature for forward-compatible
/// symbol resolution; parsing never consults or mutates it today.
pub fn parse(formula: &str, _model: &Model) -> Result<Expr, SyntaxError> {
    veridic_syntax::parse_formula(formula)
}

/// Evaluate a formula against a model.
pub fn evaluate(ast: &Expr, model: &Model) -> Result<bool, EvalError> {
    Session::new(model).eval(ast)
}

/// Evaluate a formula against a model, recording the truth value of every
/// subformula. The per-node map is keyed by pre-order [`NodeId`] and kept
/// outside the AST, so a level-by-level consumer can read partial results
/// without re-running evaluation or touching the nodes.
pub fn evaluate_annotated(ast: &Expr, model: &Model) -> Result<EvalTrace, EvalError> {
    let mut session = Session::new(model).with_trace(ast);
    let value = session.eval(ast)?;
    Ok(EvalTrace {
        value,
        values: session.into_trace(),
    })
}
