//! A model: a named pairing of a domain with an interpretation.

use std::fmt;

use crate::{DomainOfDiscourse, Interpretation};

/// The unit a formula is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    name: String,
    domain: DomainOfDiscourse,
    interpretation: Interpretation,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: DomainOfDiscourse::new(),
            interpretation: Interpretation::new(),
        }
    }

    pub fn with_domain(mut self, domain: DomainOfDiscourse) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_interpretation(mut self, interpretation: Interpretation) -> Self {
        self.interpretation = interpretation;
        self
    }

    /// Map a constant symbol to a domain object (passthrough to the
    /// interpretation).
    pub fn bind(mut self, constant: impl Into<String>, object: impl Into<String>) -> Self {
        self.interpretation = self.interpretation.bind(constant, object);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &DomainOfDiscourse {
        &self.domain
    }

    pub fn interpretation(&self) -> &Interpretation {
        &self.interpretation
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model {}", self.name)?;
        writeln!(f, "\nDomain {}:\n  {}", self.domain.name(), self.domain)?;
        write!(f, "\n{}", self.interpretation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Predicate;

    #[test]
    fn fluent_construction() {
        let model = Model::new("M")
            .with_domain(DomainOfDiscourse::new().expand(["Corwin", "Benedict"]))
            .with_interpretation(
                Interpretation::new()
                    .add_predicate(Predicate::new("A", 1).extend("Corwin").unwrap()),
            )
            .bind("c", "Corwin");

        assert_eq!(model.domain().len(), 2);
        assert_eq!(model.interpretation().resolve("c"), Some("Corwin"));
        assert!(model.interpretation().predicate("A").is_some());
    }

    #[test]
    fn display_includes_domain_and_interpretation() {
        let model = Model::new("M")
            .with_domain(DomainOfDiscourse::new().expand(["a", "b"]))
            .bind("c", "a");
        let report = model.to_string();
        assert!(report.contains("Model M"));
        assert!(report.contains("{ a, b }"));
        assert!(report.contains("c ↦ a"));
    }
}
