//! Bounded integer rule.

use fieldcheck_model::{Result, RuleError, RuleOptions, Value, ValueKind};

use super::Validate;

/// Passes integers in the inclusive range `[min, max]`.
#[derive(Debug, Clone, Copy)]
pub struct NumberRule {
    min: i64,
    max: i64,
}

impl NumberRule {
    pub fn new(options: &RuleOptions) -> Self {
        Self {
            min: options.min,
            max: options.max,
        }
    }
}

impl Validate for NumberRule {
    fn validate(&self, value: &Value) -> Result<()> {
        let Value::Int(number) = value else {
            return Err(RuleError::TypeMismatch {
                expected: ValueKind::Int,
            });
        };
        if *number < self.min || *number > self.max {
            return Err(RuleError::OutOfRange {
                value: *number,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

pub(crate) fn construct(options: &RuleOptions) -> Result<Box<dyn Validate>> {
    Ok(Box::new(NumberRule::new(options)))
}
