//! Domain of discourse: the finite set of objects quantifiers range over.

use std::collections::BTreeSet;
use std::fmt;

use crate::IntoObjects;

/// A named, deduplicated set of domain-object identifiers.
///
/// Objects are kept in ascending lexical order so that quantifier
/// iteration is deterministic regardless of insertion order. An empty
/// domain is legal: universal quantification over it is vacuously true,
/// existential quantification vacuously false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainOfDiscourse {
    name: String,
    objects: BTreeSet<String>,
}

impl Default for DomainOfDiscourse {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainOfDiscourse {
    /// An empty domain with the conventional name `D`.
    pub fn new() -> Self {
        Self::named("D")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a single object or a collection of objects.
    pub fn expand(mut self, objects: impl IntoObjects) -> Self {
        self.objects.extend(objects.into_objects());
        self
    }

    /// Remove a single object or a collection of objects.
    pub fn restrict(mut self, objects: impl IntoObjects) -> Self {
        for obj in objects.into_objects() {
            self.objects.remove(&obj);
        }
        self
    }

    pub fn contains(&self, object: &str) -> bool {
        self.objects.contains(object)
    }

    /// Objects in ascending lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.objects.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl fmt::Display for DomainOfDiscourse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.objects.is_empty() {
            return f.write_str("∅");
        }
        let objects = self.objects.iter().cloned().collect::<Vec<_>>();
        write!(f, "{{ {} }}", objects.join(", "))
    }
}
