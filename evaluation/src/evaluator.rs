//! Recursive truth evaluation of a formula against a model.
//!
//! Each call builds an evaluation session: the model's symbols (domain
//! objects, constants, predicate extensions, sentence letters) are interned
//! into a [`lasso::Rodeo`] once up front, so the inner quantifier loops
//! compare and hash fixed-size `Spur` keys instead of strings. Variable
//! bindings live in a per-session scope stack keyed by variable name —
//! never in the model — so the model is shared immutably and repeated
//! evaluation of the same (AST, model) pair is trivially idempotent.
//!
//! Evaluating `k` nested quantifiers over a domain of `n` objects visits
//! O(n^k) bindings in the worst case. That is the semantics, not a defect;
//! there is no memoization.

use std::collections::HashMap;

use lasso::{Rodeo, Spur};
use thiserror::Error;

use veridic_semantics::{ArityMismatch, Model};
use veridic_syntax::ast::{Expr, QuantifierOp};

/// Evaluation failure. Every variant is terminal; retrying without
/// changing the formula or the model cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("unknown predicate '{name}'")]
    UnknownPredicate { name: String },

    #[error("term '{name}' is not bound to any domain object")]
    UnboundVariable { name: String },

    #[error(transparent)]
    Arity(#[from] ArityMismatch),
}

/// Identity of an AST node: its position in the pre-order traversal of
/// the root expression (the root itself is `NodeId(0)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Result of an annotated evaluation: the root truth value plus the truth
/// value of every evaluated subformula, keyed by pre-order node identity.
///
/// The map lives outside the AST; nodes are never mutated. A node under a
/// quantifier is evaluated once per tried binding, and its entry keeps the
/// value from the binding tried last. The body of a quantifier over an
/// empty domain is never evaluated and has no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalTrace {
    pub value: bool,
    pub values: HashMap<NodeId, bool>,
}

struct PredicateIndex {
    arity: usize,
    extension: std::collections::HashSet<Vec<Spur>>,
}

struct Trace {
    ids: HashMap<*const Expr, usize>,
    values: HashMap<NodeId, bool>,
}

/// One evaluation pass over one model.
pub(crate) struct Session {
    symbols: Rodeo,
    domain: Vec<Spur>,
    constants: HashMap<Spur, Spur>,
    predicates: HashMap<Spur, PredicateIndex>,
    letters: HashMap<Spur, bool>,
    /// Scope stack per variable name: the innermost binding is on top.
    bindings: HashMap<Spur, Vec<Spur>>,
    trace: Option<Trace>,
}

impl Session {
    pub(crate) fn new(model: &Model) -> Self {
        let mut symbols = Rodeo::default();

        // Domain iteration order is the domain's lexical order.
        let domain = model
            .domain()
            .iter()
            .map(|obj| symbols.get_or_intern(obj))
            .collect();

        let interpretation = model.interpretation();

        let constants = interpretation
            .names()
            .iter()
            .map(|(constant, object)| {
                (
                    symbols.get_or_intern(constant),
                    symbols.get_or_intern(object),
                )
            })
            .collect();

        let predicates = interpretation
            .predicates()
            .map(|predicate| {
                let extension = predicate
                    .extension()
                    .map(|tuple| {
                        tuple
                            .iter()
                            .map(|obj| symbols.get_or_intern(obj))
                            .collect::<Vec<_>>()
                    })
                    .collect();
                (
                    symbols.get_or_intern(predicate.name()),
                    PredicateIndex {
                        arity: predicate.arity(),
                        extension,
                    },
                )
            })
            .collect();

        let letters = interpretation
            .sentence_letters()
            .map(|(letter, value)| (symbols.get_or_intern(letter), value))
            .collect();

        Self {
            symbols,
            domain,
            constants,
            predicates,
            letters,
            bindings: HashMap::new(),
            trace: None,
        }
    }

    /// Enable per-node recording for the given root expression.
    pub(crate) fn with_trace(mut self, root: &Expr) -> Self {
        let ids = root
            .preorder()
            .into_iter()
            .enumerate()
            .map(|(id, node)| (node as *const Expr, id))
            .collect();
        self.trace = Some(Trace {
            ids,
            values: HashMap::new(),
        });
        self
    }

    pub(crate) fn into_trace(self) -> HashMap<NodeId, bool> {
        self.trace.map(|t| t.values).unwrap_or_default()
    }

    /// Structural recursion over the sealed `Expr` variants. The match is
    /// exhaustive, so there is no catch-all branch to reach.
    pub(crate) fn eval(&mut self, expr: &Expr) -> Result<bool, EvalError> {
        let value = match expr {
            Expr::Predicate { name, terms } => self.eval_predicate(name, terms)?,
            Expr::Not(inner) => !self.eval(inner)?,
            // Connectives evaluate both operands, left before right, and
            // never short-circuit; only the combination differs.
            Expr::And(left, right) => {
                let l = self.eval(left)?;
                let r = self.eval(right)?;
                l && r
            }
            Expr::Or(left, right) => {
                let l = self.eval(left)?;
                let r = self.eval(right)?;
                l || r
            }
            Expr::Implies(left, right) => {
                let l = self.eval(left)?;
                let r = self.eval(right)?;
                !l || r
            }
            Expr::Quantifier { op, variable, body } => {
                self.eval_quantifier(*op, variable, body)?
            }
        };

        if let Some(trace) = &mut self.trace {
            if let Some(&id) = trace.ids.get(&(expr as *const Expr)) {
                trace.values.insert(NodeId(id), value);
            }
        }

        Ok(value)
    }

    fn eval_predicate(&mut self, name: &str, terms: &[String]) -> Result<bool, EvalError> {
        let key = self.symbols.get_or_intern(name);

        // A bare uppercase letter with a registered truth value is a
        // sentence letter, not a nullary predicate.
        if terms.is_empty() {
            if let Some(&value) = self.letters.get(&key) {
                return Ok(value);
            }
        }

        let arity = match self.predicates.get(&key) {
            Some(index) => index.arity,
            None => {
                return Err(EvalError::UnknownPredicate {
                    name: name.to_string(),
                })
            }
        };

        if terms.len() != arity {
            return Err(EvalError::Arity(ArityMismatch {
                symbol: name.to_string(),
                expected: arity,
                found: terms.len(),
            }));
        }

        let mut resolved = Vec::with_capacity(terms.len());
        for term in terms {
            resolved.push(self.resolve_term(term)?);
        }

        Ok(self.predicates[&key].extension.contains(&resolved))
    }

    /// Resolve a term to a domain object: innermost quantifier binding
    /// first, then the model's constant mapping.
    fn resolve_term(&mut self, name: &str) -> Result<Spur, EvalError> {
        let key = self.symbols.get_or_intern(name);

        if let Some(stack) = self.bindings.get(&key) {
            if let Some(&object) = stack.last() {
                return Ok(object);
            }
        }

        if let Some(&object) = self.constants.get(&key) {
            return Ok(object);
        }

        Err(EvalError::UnboundVariable {
            name: name.to_string(),
        })
    }

    fn eval_quantifier(
        &mut self,
        op: QuantifierOp,
        variable: &str,
        body: &Expr,
    ) -> Result<bool, EvalError> {
        let key = self.symbols.get_or_intern(variable);
        // Deterministic lexical order, fixed at session start.
        let domain = self.domain.clone();

        match op {
            QuantifierOp::ForAll => {
                for object in domain {
                    let result = self.eval_bound(key, object, body);
                    // Short-circuit on the first counterexample; the
                    // binding has already been unwound.
                    if !result? {
                        return Ok(false);
                    }
                }
                // Vacuously true over an empty domain.
                Ok(true)
            }
            QuantifierOp::Exists => {
                for object in domain {
                    let result = self.eval_bound(key, object, body);
                    if result? {
                        return Ok(true);
                    }
                }
                // Vacuously false over an empty domain.
                Ok(false)
            }
        }
    }

    /// Push a binding, evaluate the body, pop the binding. The pop happens
    /// whether or not the body errored, and popping restores any outer
    /// binding of the same variable name.
    fn eval_bound(&mut self, variable: Spur, object: Spur, body: &Expr) -> Result<bool, EvalError> {
        self.bindings.entry(variable).or_default().push(object);
        let result = self.eval(body);
        if let Some(stack) = self.bindings.get_mut(&variable) {
            stack.pop();
            if stack.is_empty() {
                self.bindings.remove(&variable);
            }
        }
        result
    }
}
