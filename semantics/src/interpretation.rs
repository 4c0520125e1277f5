//! The interpretation function: meanings for constants, predicates,
//! sentence letters, and function symbols.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use thiserror::Error;

use crate::{IntoObjects, Tuple};

/// A tuple was inserted into (or tested against) a predicate or function
/// symbol whose declared arity does not match the tuple's length.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{symbol}' has arity {expected} but was given {found} object(s)")]
pub struct ArityMismatch {
    pub symbol: String,
    pub expected: usize,
    pub found: usize,
}

/// A predicate: a name, a declared arity, and the extension — the set of
/// argument tuples for which the predicate holds.
///
/// The extension only ever contains tuples of length `arity`; `extend`
/// rejects anything else up front rather than letting a malformed
/// extension reach evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    name: String,
    arity: usize,
    extension: BTreeSet<Tuple>,
}

impl Predicate {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
            extension: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Add a tuple (or a single object, for unary predicates) to the
    /// extension. Fails fast when the tuple length differs from the
    /// declared arity.
    pub fn extend(mut self, objects: impl IntoObjects) -> Result<Self, ArityMismatch> {
        let tuple = objects.into_objects();
        if tuple.len() != self.arity {
            return Err(ArityMismatch {
                symbol: self.name.clone(),
                expected: self.arity,
                found: tuple.len(),
            });
        }
        self.extension.insert(tuple);
        Ok(self)
    }

    /// Remove a tuple from the extension. Removing a tuple that was never
    /// added is a no-op.
    pub fn retract(mut self, objects: impl IntoObjects) -> Self {
        self.extension.remove(&objects.into_objects());
        self
    }

    /// Membership of a resolved argument tuple in the extension.
    pub fn holds_for(&self, tuple: &[String]) -> bool {
        self.extension.contains(tuple)
    }

    /// The extension tuples, in lexical order.
    pub fn extension(&self) -> impl Iterator<Item = &Tuple> {
        self.extension.iter()
    }

    fn render_extension(&self) -> String {
        if self.extension.is_empty() {
            return "∅".to_string();
        }
        let tuples = self
            .extension
            .iter()
            .map(|t| {
                if t.len() == 1 {
                    t[0].clone()
                } else {
                    format!("({})", t.join(", "))
                }
            })
            .collect::<Vec<_>>();
        format!("{{ {} }}", tuples.join(", "))
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A function symbol: declared in the data model for completeness, never
/// consulted by evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    name: String,
    arity: usize,
    mapping: BTreeMap<Tuple, String>,
}

impl Function {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
            mapping: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Map an argument tuple to its image object.
    pub fn map(
        mut self,
        objects: impl IntoObjects,
        image: impl Into<String>,
    ) -> Result<Self, ArityMismatch> {
        let tuple = objects.into_objects();
        if tuple.len() != self.arity {
            return Err(ArityMismatch {
                symbol: self.name.clone(),
                expected: self.arity,
                found: tuple.len(),
            });
        }
        self.mapping.insert(tuple, image.into());
        Ok(self)
    }
}

/// The interpretation: constant ↦ object bindings, predicate extensions,
/// and sentence-letter truth values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    name: String,
    names: BTreeMap<String, String>,
    predicates: BTreeMap<String, Predicate>,
    sentence_letters: BTreeMap<String, bool>,
    functions: BTreeMap<String, Function>,
}

impl Interpretation {
    /// An empty interpretation with the conventional name `I`.
    pub fn new() -> Self {
        Self::named("I")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            names: BTreeMap::new(),
            predicates: BTreeMap::new(),
            sentence_letters: BTreeMap::new(),
            functions: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Map a constant symbol to a domain object.
    pub fn bind(mut self, constant: impl Into<String>, object: impl Into<String>) -> Self {
        self.names.insert(constant.into(), object.into());
        self
    }

    /// Remove a constant's object mapping. Unbinding an unknown constant
    /// is a no-op.
    pub fn unbind(mut self, constant: &str) -> Self {
        self.names.remove(constant);
        self
    }

    pub fn add_predicate(mut self, predicate: Predicate) -> Self {
        self.predicates.insert(predicate.name().to_string(), predicate);
        self
    }

    pub fn add_sentence_letter(mut self, letter: impl Into<String>, value: bool) -> Self {
        self.sentence_letters.insert(letter.into(), value);
        self
    }

    pub fn add_function(mut self, function: Function) -> Self {
        self.functions.insert(function.name().to_string(), function);
        self
    }

    /// Look up the object a constant symbol denotes.
    pub fn resolve(&self, symbol: &str) -> Option<&str> {
        self.names.get(symbol).map(String::as_str)
    }

    pub fn predicate(&self, name: &str) -> Option<&Predicate> {
        self.predicates.get(name)
    }

    pub fn sentence_letter(&self, letter: &str) -> Option<bool> {
        self.sentence_letters.get(letter).copied()
    }

    /// The constant ↦ object mapping.
    pub fn names(&self) -> &BTreeMap<String, String> {
        &self.names
    }

    pub fn predicates(&self) -> impl Iterator<Item = &Predicate> {
        self.predicates.values()
    }

    pub fn sentence_letters(&self) -> impl Iterator<Item = (&str, bool)> {
        self.sentence_letters.iter().map(|(l, &v)| (l.as_str(), v))
    }
}

impl Default for Interpretation {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Interpretation {}", self.name)?;

        if !self.names.is_empty() {
            writeln!(f, "\nConstants ↦ Objects:")?;
            for (constant, object) in &self.names {
                writeln!(f, "  {constant} ↦ {object}")?;
            }
        }

        if !self.predicates.is_empty() {
            writeln!(f, "\nPredicates and Extensions:")?;
            for (name, predicate) in &self.predicates {
                writeln!(f, "  {name} = {}", predicate.render_extension())?;
            }
        }

        if !self.sentence_letters.is_empty() {
            writeln!(f, "\nSentence Letters and Truth Values:")?;
            for (letter, value) in &self.sentence_letters {
                writeln!(f, "  {letter}: {}", if *value { "True" } else { "False" })?;
            }
        }

        Ok(())
    }
}
