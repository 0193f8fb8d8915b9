//! Validation diagnostics, ordered by field declaration.

use std::fmt;

use crate::error::RuleError;

/// A diagnostic for a single field: the typed error plus the field it
/// originated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub error: RuleError,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, error: RuleError) -> Self {
        Self {
            field: field.into(),
            error,
        }
    }

    /// Machine-readable error kind tag.
    pub fn kind(&self) -> &'static str {
        self.error.kind()
    }

    /// Human-readable diagnostic without the field prefix.
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

/// Result of one validation pass over a record.
///
/// Issues appear in the same order as the fields they originate from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub record: String,
    pub issues: Vec<FieldIssue>,
}

impl ValidationReport {
    pub fn new(record: impl Into<String>) -> Self {
        Self {
            record: record.into(),
            issues: Vec::new(),
        }
    }

    pub fn push(&mut self, issue: FieldIssue) {
        self.issues.push(issue);
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Display strings for every issue, in field order.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}
