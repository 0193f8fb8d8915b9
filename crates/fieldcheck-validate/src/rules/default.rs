//! Null rule: accepts every value.

use fieldcheck_model::{Result, RuleOptions, Value};

use super::Validate;

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRule;

impl DefaultRule {
    pub fn new(_options: &RuleOptions) -> Self {
        Self
    }
}

impl Validate for DefaultRule {
    fn validate(&self, _value: &Value) -> Result<()> {
        Ok(())
    }
}

pub(crate) fn construct(options: &RuleOptions) -> Result<Box<dyn Validate>> {
    Ok(Box::new(DefaultRule::new(options)))
}
