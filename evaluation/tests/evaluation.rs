use veridic_evaluation::{evaluate, evaluate_annotated, parse, EvalError, NodeId};
use veridic_semantics::{DomainOfDiscourse, Interpretation, Model, Predicate};
use veridic_syntax::ast::Expr;

/// Two objects, `A` holds of both, `B` of one, `N` of none, constant `c`.
fn amber_model() -> Model {
    Model::new("M")
        .with_domain(DomainOfDiscourse::new().expand(["Corwin", "Benedict"]))
        .with_interpretation(
            Interpretation::new()
                .add_predicate(
                    Predicate::new("A", 1)
                        .extend("Corwin")
                        .unwrap()
                        .extend("Benedict")
                        .unwrap(),
                )
                .add_predicate(Predicate::new("B", 1).extend("Benedict").unwrap())
                .add_predicate(Predicate::new("N", 1))
                .bind("c", "Corwin"),
        )
}

fn eval_in(model: &Model, formula: &str) -> bool {
    let ast = parse(formula, model).unwrap_or_else(|e| panic!("parse {formula:?}: {e}"));
    evaluate(&ast, model).unwrap_or_else(|e| panic!("evaluate {formula:?}: {e}"))
}

fn eval_err(model: &Model, formula: &str) -> EvalError {
    let ast = parse(formula, model).unwrap_or_else(|e| panic!("parse {formula:?}: {e}"));
    evaluate(&ast, model).unwrap_err()
}

// ─── Quantifiers over extensions ─────────────────────────────────

#[test]
fn universal_holds_when_extension_covers_domain() {
    let model = amber_model();
    assert!(eval_in(&model, "∀x(A(x))"));
}

#[test]
fn universal_fails_on_a_counterexample() {
    // remove Benedict from A's extension
    let model = Model::new("M")
        .with_domain(DomainOfDiscourse::new().expand(["Corwin", "Benedict"]))
        .with_interpretation(
            Interpretation::new()
                .add_predicate(Predicate::new("A", 1).extend("Corwin").unwrap()),
        );
    assert!(!eval_in(&model, "∀x(A(x))"));
}

#[test]
fn existential_fails_on_empty_extension() {
    let model = amber_model();
    assert!(!eval_in(&model, "∃x(N(x))"));
}

#[test]
fn existential_holds_with_one_witness() {
    let model = amber_model();
    assert!(eval_in(&model, "∃x(B(x))"));
}

#[test]
fn retract_flips_a_universal() {
    let full = Predicate::new("P", 1)
        .extend("a")
        .unwrap()
        .extend("b")
        .unwrap();
    let model = Model::new("M")
        .with_domain(DomainOfDiscourse::new().expand(["a", "b"]))
        .with_interpretation(Interpretation::new().add_predicate(full.clone()));
    assert!(eval_in(&model, "∀x(P(x))"));

    let model = Model::new("M")
        .with_domain(DomainOfDiscourse::new().expand(["a", "b"]))
        .with_interpretation(Interpretation::new().add_predicate(full.retract("b")));
    assert!(!eval_in(&model, "∀x(P(x))"));
}

// ─── Vacuous quantification ──────────────────────────────────────

#[test]
fn empty_domain_is_vacuous() {
    let model = Model::new("M").with_interpretation(
        Interpretation::new().add_predicate(Predicate::new("P", 1)),
    );
    assert!(eval_in(&model, "∀x(P(x))"));
    assert!(!eval_in(&model, "∃x(P(x))"));
}

// ─── Connectives ─────────────────────────────────────────────────

#[test]
fn negation_and_tautology() {
    let model = amber_model();
    assert!(eval_in(&model, "∀x(N(x) ∨ ¬N(x))"));
    assert!(!eval_in(&model, "∃x(N(x) ∧ ¬N(x))"));
}

#[test]
fn implication_is_material() {
    let model = amber_model();
    // antecedent false for every x, so the conditional holds vacuously
    assert!(eval_in(&model, "∀x(N(x) → B(x))"));
    // A(c) true, B(c) false
    assert!(!eval_in(&model, "A(c) → B(c)"));
    // B holds only of Benedict, A of everything
    assert!(eval_in(&model, "∀x(B(x) → A(x))"));
}

#[test]
fn constants_resolve_through_the_interpretation() {
    let model = amber_model();
    assert!(eval_in(&model, "A(c)"));
    assert!(!eval_in(&model, "B(c)"));
}

// ─── Nested quantifiers and binary predicates ────────────────────

fn ordered_pair_model() -> Model {
    // R = strict "less than" over {a, b}: only (a, b)
    Model::new("M")
        .with_domain(DomainOfDiscourse::new().expand(["a", "b"]))
        .with_interpretation(
            Interpretation::new()
                .add_predicate(Predicate::new("R", 2).extend(["a", "b"]).unwrap()),
        )
}

#[test]
fn nested_quantifiers_over_a_relation() {
    let model = ordered_pair_model();
    assert!(eval_in(&model, "∃x∃y(R(x, y))"));
    assert!(!eval_in(&model, "∀x∃y(R(x, y))"));
    assert!(!eval_in(&model, "∃x∀y(R(x, y))"));
}

#[test]
fn shadowed_variable_restores_outer_binding() {
    // Inner ∃x rebinds x; after it unwinds, the outer ∀x binding must
    // still be in force for the R(x, x) conjunct.
    let model = Model::new("M")
        .with_domain(DomainOfDiscourse::new().expand(["a", "b"]))
        .with_interpretation(
            Interpretation::new()
                .add_predicate(Predicate::new("P", 1).extend("a").unwrap())
                .add_predicate(
                    Predicate::new("R", 2)
                        .extend(["a", "a"])
                        .unwrap()
                        .extend(["b", "b"])
                        .unwrap(),
                ),
        );
    // for every x: (some x satisfies P) and x is R-related to itself —
    // the second conjunct sees the OUTER x again
    assert!(eval_in(&model, "∀x(∃x(P(x)) ∧ R(x, x))"));
}

// ─── Sentence letters ────────────────────────────────────────────

#[test]
fn sentence_letters_have_direct_truth_values() {
    let model = Model::new("M").with_interpretation(
        Interpretation::new()
            .add_sentence_letter("S", true)
            .add_sentence_letter("F", false),
    );
    assert!(eval_in(&model, "S"));
    assert!(!eval_in(&model, "F"));
    assert!(eval_in(&model, "S ∨ F"));
    assert!(!eval_in(&model, "S ∧ F"));
    assert!(eval_in(&model, "F → S"));
}

// ─── Errors ──────────────────────────────────────────────────────

#[test]
fn unknown_predicate_is_an_error() {
    let model = amber_model();
    assert_eq!(
        eval_err(&model, "Z(c)"),
        EvalError::UnknownPredicate { name: "Z".into() }
    );
}

#[test]
fn unbound_term_is_an_error() {
    let model = amber_model();
    // x is never bound by a quantifier and is not a constant
    assert_eq!(
        eval_err(&model, "A(x)"),
        EvalError::UnboundVariable { name: "x".into() }
    );
}

#[test]
fn application_arity_mismatch_is_an_error() {
    let model = amber_model();
    // A is unary but applied to two terms
    assert!(matches!(
        eval_err(&model, "∀x∀y(A(x, y))"),
        EvalError::Arity(_)
    ));
}

#[test]
fn extension_arity_mismatch_fails_at_insertion() {
    let err = Predicate::new("A", 1).extend(["a", "b"]).unwrap_err();
    assert_eq!(err.expected, 1);
    assert_eq!(err.found, 2);
}

// ─── Purity and idempotence ──────────────────────────────────────

#[test]
fn repeated_evaluation_is_idempotent() {
    let model = amber_model();
    let ast = parse("∃x(B(x)) → ∀x(A(x))", &model).unwrap();

    let names_before = model.interpretation().names().clone();
    let first = evaluate(&ast, &model).unwrap();
    let second = evaluate(&ast, &model).unwrap();

    assert_eq!(first, second);
    assert_eq!(model.interpretation().names(), &names_before);
}

// ─── Annotated evaluation ────────────────────────────────────────

#[test]
fn annotation_covers_every_node() {
    let model = amber_model();
    let ast = parse("A(c) ∧ ¬B(c)", &model).unwrap();
    let trace = evaluate_annotated(&ast, &model).unwrap();

    assert!(trace.value);
    assert_eq!(trace.values.len(), ast.node_count());
    assert_eq!(trace.values[&NodeId(0)], true);
}

#[test]
fn both_operands_are_evaluated_without_short_circuit() {
    let model = amber_model();
    // B(c) is false, so a short-circuiting ∧ would never visit A(c);
    // the trace must still carry an entry for the right operand.
    let ast = parse("B(c) ∧ A(c)", &model).unwrap();
    let trace = evaluate_annotated(&ast, &model).unwrap();

    let nodes = ast.preorder();
    assert!(matches!(nodes[2], Expr::Predicate { .. }));
    assert_eq!(trace.values[&NodeId(0)], false);
    assert_eq!(trace.values[&NodeId(1)], false); // B(c)
    assert_eq!(trace.values[&NodeId(2)], true); // A(c), still evaluated
}

#[test]
fn annotated_quantifier_body_keeps_last_binding_value() {
    let model = amber_model();
    // domain order is Benedict, Corwin; ∃ short-circuits at Benedict,
    // so the body's recorded value is from that binding
    let ast = parse("∃x(B(x))", &model).unwrap();
    let trace = evaluate_annotated(&ast, &model).unwrap();

    assert!(trace.value);
    assert_eq!(trace.values[&NodeId(1)], true);
}

#[test]
fn annotated_and_plain_evaluation_agree() {
    let model = ordered_pair_model();
    for formula in ["∃x∃y(R(x, y))", "∀x∃y(R(x, y))", "¬∀x∃y(R(x, y))"] {
        let ast = parse(formula, &model).unwrap();
        let plain = evaluate(&ast, &model).unwrap();
        let trace = evaluate_annotated(&ast, &model).unwrap();
        assert_eq!(plain, trace.value, "{formula}");
        assert_eq!(trace.values[&NodeId(0)], plain, "{formula}");
    }
}
