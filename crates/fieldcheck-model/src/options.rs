//! Configuration options for rule construction and annotation parsing.

use serde::{Deserialize, Serialize};

/// Lower bound applied when an annotation names a rule with no arguments.
pub const DEFAULT_MIN: i64 = i8::MIN as i64;

/// Upper bound applied when an annotation names a rule with no arguments.
pub const DEFAULT_MAX: i64 = i8::MAX as i64;

/// How a malformed `min=`/`max=` clause is handled during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OptionParsing {
    /// Fail resolution with `MalformedOptions`.
    Strict,
    /// Keep the zero bounds and continue; the rule resolves but rejects
    /// every value outside [0,0].
    #[default]
    Lenient,
}

/// Construction parameters for a rule instance.
///
/// The default value keeps the zero bounds and no pattern; each variant
/// copies only the fields it cares about at construction time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOptions {
    pub min: i64,
    pub max: i64,
    pub pattern: Option<String>,
}

impl RuleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for an annotation that carries no explicit arguments:
    /// bounds span the full 8-bit signed range.
    pub fn bounded_defaults() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            pattern: None,
        }
    }

    #[must_use]
    pub fn with_min(mut self, min: i64) -> Self {
        self.min = min;
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: i64) -> Self {
        self.max = max;
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }
}
