//! Pattern-matching email rule.

use std::sync::LazyLock;

use regex::Regex;

use fieldcheck_model::{Result, RuleError, RuleOptions, Value, ValueKind};

use super::Validate;

/// Anchored pattern applied when the options carry no override. `\A`/`\z`
/// anchor at the very start and end of the string, so embedded newlines
/// cannot smuggle a match past the anchors.
pub const DEFAULT_EMAIL_PATTERN: &str = r"\A[\w+\-.]+@[a-z\d\-]+(\.[a-z]+)*\.[a-z]+\z";

static DEFAULT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_EMAIL_PATTERN).expect("invalid default email pattern"));

/// Passes strings fully matching the configured pattern.
#[derive(Debug, Clone)]
pub struct EmailRule {
    pattern: Regex,
}

impl EmailRule {
    /// Compile the configured pattern. An uncompilable pattern is a
    /// configuration error that aborts construction, never a per-value
    /// failure.
    pub fn new(options: &RuleOptions) -> Result<Self> {
        let pattern = match options.pattern.as_deref() {
            None => DEFAULT_EMAIL_REGEX.clone(),
            Some(raw) => Regex::new(raw).map_err(|err| RuleError::InvalidPattern {
                pattern: raw.to_string(),
                message: err.to_string(),
            })?,
        };
        Ok(Self { pattern })
    }
}

impl Validate for EmailRule {
    fn validate(&self, value: &Value) -> Result<()> {
        let Value::Str(text) = value else {
            return Err(RuleError::TypeMismatch {
                expected: ValueKind::Str,
            });
        };
        if !self.pattern.is_match(text) {
            return Err(RuleError::PatternMismatch);
        }
        Ok(())
    }
}

pub(crate) fn construct(options: &RuleOptions) -> Result<Box<dyn Validate>> {
    Ok(Box::new(EmailRule::new(options)?))
}
