//! Formula abstract syntax tree.
//!
//! `Expr` is a sealed variant set: every consumer matches exhaustively, so
//! there is no reachable "unknown node" path anywhere downstream. Nodes are
//! immutable after construction and each child is owned by exactly one
//! parent (`Box`, no sharing, no cycles). Evaluation results are never
//! stored on the nodes; the annotated evaluator keeps them in a separate
//! map keyed by pre-order position.

use std::fmt;

/// Which quantifier introduced a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantifierOp {
    ForAll,
    Exists,
}

impl QuantifierOp {
    pub fn symbol(self) -> char {
        match self {
            QuantifierOp::ForAll => '∀',
            QuantifierOp::Exists => '∃',
        }
    }
}

impl fmt::Display for QuantifierOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A well-formed formula.
///
/// Terms are bare symbol names; whether a term names a variable or a
/// constant is resolved against the active binding environment at
/// evaluation time, not at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// `∀x(...)` / `∃x(...)` — binds `variable` over the whole body
    Quantifier {
        op: QuantifierOp,
        variable: String,
        body: Box<Expr>,
    },

    /// `P(t1, ..., tn)`, or a bare letter `P` (sentence-letter reference)
    Predicate { name: String, terms: Vec<String> },

    /// `¬e`
    Not(Box<Expr>),

    /// `l ∧ r`
    And(Box<Expr>, Box<Expr>),

    /// `l ∨ r`
    Or(Box<Expr>, Box<Expr>),

    /// `l → r`
    Implies(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Immediate children, left to right. Empty for predicates.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Quantifier { body, .. } => vec![body],
            Expr::Predicate { .. } => Vec::new(),
            Expr::Not(e) => vec![e],
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Implies(l, r) => vec![l, r],
        }
    }

    /// All nodes in pre-order (self first, then children left to right).
    /// The position of a node in this sequence is its `NodeId` in the
    /// annotated evaluator's result map.
    pub fn preorder(&self) -> Vec<&Expr> {
        let mut nodes = Vec::new();
        self.collect_preorder(&mut nodes);
        nodes
    }

    fn collect_preorder<'a>(&'a self, nodes: &mut Vec<&'a Expr>) {
        nodes.push(self);
        for child in self.children() {
            child.collect_preorder(nodes);
        }
    }

    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Nodes grouped by depth, root level first. This is the traversal the
    /// level-by-level visualizer consumes.
    pub fn nodes_by_level(&self) -> Vec<Vec<&Expr>> {
        let mut levels: Vec<Vec<&Expr>> = Vec::new();
        let mut current = vec![self];
        while !current.is_empty() {
            let next = current
                .iter()
                .flat_map(|node| node.children())
                .collect::<Vec<_>>();
            levels.push(current);
            current = next;
        }
        levels
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Quantifier { op, variable, body } => write!(f, "{op}{variable}({body})"),
            Expr::Predicate { name, terms } => {
                if terms.is_empty() {
                    f.write_str(name)
                } else {
                    write!(f, "{name}({})", terms.join(", "))
                }
            }
            Expr::Not(e) => write!(f, "¬{e}"),
            Expr::And(l, r) => write!(f, "({l} ∧ {r})"),
            Expr::Or(l, r) => write!(f, "({l} ∨ {r})"),
            Expr::Implies(l, r) => write!(f, "({l} → {r})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pred(name: &str, terms: &[&str]) -> Expr {
        Expr::Predicate {
            name: name.into(),
            terms: terms.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn display_is_canonical() {
        let e = Expr::Quantifier {
            op: QuantifierOp::ForAll,
            variable: "x".into(),
            body: Box::new(Expr::Or(
                Box::new(pred("N", &["x"])),
                Box::new(Expr::Not(Box::new(pred("N", &["x"])))),
            )),
        };
        assert_eq!(e.to_string(), "∀x((N(x) ∨ ¬N(x)))");
    }

    #[test]
    fn bare_letter_displays_without_parens() {
        assert_eq!(pred("A", &[]).to_string(), "A");
    }

    #[test]
    fn preorder_visits_parent_before_children() {
        let e = Expr::And(
            Box::new(pred("A", &["x"])),
            Box::new(Expr::Not(Box::new(pred("B", &["y"])))),
        );
        let nodes = e.preorder();
        assert_eq!(nodes.len(), 4);
        assert!(matches!(nodes[0], Expr::And(..)));
        assert!(matches!(nodes[1], Expr::Predicate { .. }));
        assert!(matches!(nodes[2], Expr::Not(..)));
        assert!(matches!(nodes[3], Expr::Predicate { .. }));
    }

    #[test]
    fn nodes_by_level_groups_by_depth() {
        let e = Expr::And(
            Box::new(pred("A", &["x"])),
            Box::new(Expr::Not(Box::new(pred("B", &["y"])))),
        );
        let levels = e.nodes_by_level();
        assert_eq!(levels.len(), 3);
        assert_eq!(levels[0].len(), 1);
        assert_eq!(levels[1].len(), 2);
        assert_eq!(levels[2].len(), 1);
    }
}
