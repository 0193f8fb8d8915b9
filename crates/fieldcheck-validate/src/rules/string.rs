//! Bounded-length string rule.

use fieldcheck_model::{Result, RuleError, RuleOptions, Value, ValueKind};

use super::Validate;

/// Passes strings whose character count is in the inclusive range
/// `[min, max]`.
#[derive(Debug, Clone, Copy)]
pub struct StringRule {
    min: i64,
    max: i64,
}

impl StringRule {
    pub fn new(options: &RuleOptions) -> Self {
        Self {
            min: options.min,
            max: options.max,
        }
    }
}

impl Validate for StringRule {
    fn validate(&self, value: &Value) -> Result<()> {
        let Value::Str(text) = value else {
            return Err(RuleError::TypeMismatch {
                expected: ValueKind::Str,
            });
        };
        let length = text.chars().count();
        if (length as i64) < self.min || (length as i64) > self.max {
            return Err(RuleError::LengthOutOfRange {
                length,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

pub(crate) fn construct(options: &RuleOptions) -> Result<Box<dyn Validate>> {
    Ok(Box::new(StringRule::new(options)))
}
