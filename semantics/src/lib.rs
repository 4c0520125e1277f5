// semantics/src/lib.rs
//
// The semantic model a formula is evaluated against: a finite domain of
// discourse plus an interpretation function mapping constants to domain
// objects, predicate names to extensions, and sentence letters to truth
// values. Everything is built through fluent, chainable mutators; arity
// is validated at extension-insertion time so a malformed extension can
// never reach evaluation.

pub mod domain;
pub mod interpretation;
pub mod model;

pub use domain::DomainOfDiscourse;
pub use interpretation::{ArityMismatch, Function, Interpretation, Predicate};
pub use model::Model;

/// An ordered argument tuple of domain objects.
pub type Tuple = Vec<String>;

/// Accepted shapes for the object arguments of the fluent mutators: a
/// single object or any collection of objects.
pub trait IntoObjects {
    fn into_objects(self) -> Vec<String>;
}

impl IntoObjects for &str {
    fn into_objects(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoObjects for String {
    fn into_objects(self) -> Vec<String> {
        vec![self]
    }
}

impl<const N: usize> IntoObjects for [&str; N] {
    fn into_objects(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl IntoObjects for &[&str] {
    fn into_objects(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl IntoObjects for Vec<&str> {
    fn into_objects(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl IntoObjects for Vec<String> {
    fn into_objects(self) -> Vec<String> {
        self
    }
}
