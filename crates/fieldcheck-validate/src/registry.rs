//! Rule registry mapping rule names to constructors.

use std::collections::HashMap;

use fieldcheck_model::{Result, RuleOptions};

use crate::rules::{self, Validate};

/// Constructor for a rule instance. Construction fails only when the
/// configuration itself is invalid (e.g. an uncompilable pattern).
pub type RuleConstructor = fn(&RuleOptions) -> Result<Box<dyn Validate>>;

/// Registry of rule constructors indexed by rule name.
///
/// Registration takes `&mut self`, so population is exclusive by
/// construction; once populated, the registry is all-reads and can be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    constructors: HashMap<String, RuleConstructor>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Registry pre-populated with the built-in rules: `default`, `int`,
    /// `string` and `email`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("default", rules::construct_default);
        registry.register("int", rules::construct_number);
        registry.register("string", rules::construct_string);
        registry.register("email", rules::construct_email);
        registry
    }

    /// Insert or overwrite the constructor for `name`. Duplicate
    /// registration silently overwrites: last writer wins.
    pub fn register(&mut self, name: impl Into<String>, constructor: RuleConstructor) {
        self.constructors.insert(name.into(), constructor);
    }

    /// Look up the constructor for a rule name.
    pub fn lookup(&self, name: &str) -> Option<RuleConstructor> {
        self.constructors.get(name).copied()
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Iterate over registered rule names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
