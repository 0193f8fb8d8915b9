//! Record walker: resolves each field's annotation and applies the rule.

use tracing::debug;

use fieldcheck_model::{FieldIssue, OptionParsing, RecordSpec, ValidationReport};

use crate::registry::RuleRegistry;
use crate::resolve;

/// Validation engine owning the rule registry and the parsing policy.
///
/// Rule instances are constructed fresh for every field on every pass and
/// dropped afterwards, so one engine can validate different records from
/// multiple threads once its registry is populated.
#[derive(Debug, Clone)]
pub struct Engine {
    registry: RuleRegistry,
    option_parsing: OptionParsing,
}

impl Engine {
    /// Engine with the built-in rules and lenient option parsing.
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::with_builtins())
    }

    /// Engine over an injected registry.
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            registry,
            option_parsing: OptionParsing::default(),
        }
    }

    /// Set the malformed-clause policy.
    #[must_use]
    pub fn with_option_parsing(mut self, parsing: OptionParsing) -> Self {
        self.option_parsing = parsing;
        self
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Mutable registry access for late registration.
    pub fn registry_mut(&mut self) -> &mut RuleRegistry {
        &mut self.registry
    }

    /// Walk the record's fields in declaration order, collecting one
    /// diagnostic per failing or unresolvable field.
    ///
    /// Fields whose annotation is absent or the skip sentinel are never
    /// evaluated. A resolution failure on one field does not abort the
    /// pass; the walker appends the error and moves on. The record is
    /// never mutated.
    pub fn validate<R>(&self, spec: &RecordSpec<R>, record: &R) -> ValidationReport {
        let mut report = ValidationReport::new(spec.record());
        for field in spec.fields() {
            if field.is_skipped() {
                continue;
            }
            debug!(
                field = field.name(),
                annotation = field.annotation(),
                "resolving rule"
            );
            let rule = match resolve::resolve(&self.registry, field.annotation(), self.option_parsing)
            {
                Ok(rule) => rule,
                Err(error) => {
                    report.push(FieldIssue::new(field.name(), error));
                    continue;
                }
            };
            if let Err(error) = rule.validate(&field.value(record)) {
                report.push(FieldIssue::new(field.name(), error));
            }
        }
        report
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a record with a default engine (built-in rules, lenient
/// parsing).
pub fn validate_record<R>(spec: &RecordSpec<R>, record: &R) -> ValidationReport {
    Engine::new().validate(spec, record)
}
