//! Annotation parsing and rule resolution.
//!
//! An annotation has the form `<rule>[,min=<int>,max=<int>]`. The first
//! comma-separated token names the rule; the remainder, if present, is a
//! single order-sensitive option clause.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use fieldcheck_model::{OptionParsing, Result, RuleError, RuleOptions};

use crate::registry::RuleRegistry;
use crate::rules::Validate;

/// Extraction pattern for the option clause. All-or-nothing: a clause
/// that does not match in full leaves both bounds at zero.
static OPTION_CLAUSE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\Amin=(-?\d+),max=(-?\d+)\z").expect("invalid option clause regex")
});

/// Resolve an annotation to a configured rule instance.
///
/// Bare annotations (`"int"`) get the full 8-bit signed range as bounds
/// and the package default email pattern. A fresh instance is constructed
/// on every call; nothing is cached.
pub fn resolve(
    registry: &RuleRegistry,
    annotation: &str,
    parsing: OptionParsing,
) -> Result<Box<dyn Validate>> {
    let mut tokens = annotation.split(',');
    let rule_name = tokens.next().unwrap_or_default();
    if rule_name.trim().is_empty() {
        return Err(RuleError::MissingRuleName);
    }
    let constructor = registry
        .lookup(rule_name)
        .ok_or_else(|| RuleError::UnknownRule {
            name: rule_name.to_string(),
        })?;

    let rest: Vec<&str> = tokens.collect();
    let options = if rest.is_empty() {
        RuleOptions::bounded_defaults()
    } else {
        parse_option_clause(&rest.join(","), parsing)?
    };

    constructor(&options)
}

/// Parse a `min=<int>,max=<int>` clause.
///
/// A clause that fails extraction (wrong key order, missing key, junk, or
/// an integer that overflows) resolves to the zero bounds in lenient mode
/// and to `MalformedOptions` in strict mode. A well-formed `min=0,max=0`
/// is not an error here; it simply produces a rule that rejects every
/// out-of-[0,0] value at validation time.
fn parse_option_clause(clause: &str, parsing: OptionParsing) -> Result<RuleOptions> {
    if let Some(captures) = OPTION_CLAUSE_REGEX.captures(clause)
        && let (Ok(min), Ok(max)) = (captures[1].parse::<i64>(), captures[2].parse::<i64>())
    {
        return Ok(RuleOptions::new().with_min(min).with_max(max));
    }

    match parsing {
        OptionParsing::Strict => Err(RuleError::MalformedOptions {
            clause: clause.to_string(),
        }),
        OptionParsing::Lenient => {
            warn!(clause = %clause, "malformed option clause, keeping zero bounds");
            Ok(RuleOptions::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldcheck_model::Value;

    fn registry() -> RuleRegistry {
        RuleRegistry::with_builtins()
    }

    #[test]
    fn bare_annotation_gets_i8_bounds() {
        let rule = resolve(&registry(), "int", OptionParsing::Lenient).expect("resolve");
        assert!(rule.validate(&Value::Int(-128)).is_ok());
        assert!(rule.validate(&Value::Int(127)).is_ok());
        assert!(rule.validate(&Value::Int(128)).is_err());
        assert!(rule.validate(&Value::Int(-129)).is_err());
    }

    #[test]
    fn clause_sets_bounds() {
        let rule = resolve(&registry(), "int,min=18,max=30", OptionParsing::Lenient)
            .expect("resolve");
        assert!(rule.validate(&Value::Int(18)).is_ok());
        assert!(rule.validate(&Value::Int(31)).is_err());
    }

    #[test]
    fn negative_bounds_parse() {
        let rule = resolve(&registry(), "int,min=-5,max=-1", OptionParsing::Lenient)
            .expect("resolve");
        assert!(rule.validate(&Value::Int(-3)).is_ok());
        assert!(rule.validate(&Value::Int(0)).is_err());
    }

    #[test]
    fn unknown_rule() {
        let err = resolve(&registry(), "bogus", OptionParsing::Lenient)
            .err()
            .expect("must fail");
        assert_eq!(
            err,
            RuleError::UnknownRule {
                name: "bogus".to_string()
            }
        );
    }

    #[test]
    fn blank_rule_name() {
        for annotation in [",min=1,max=2", "", "   "] {
            let err = resolve(&registry(), annotation, OptionParsing::Lenient)
                .err()
                .expect("must fail");
            assert_eq!(err, RuleError::MissingRuleName, "{annotation:?}");
        }
    }

    #[test]
    fn malformed_clause_lenient_keeps_zero_bounds() {
        // Reordered keys, partial clause, junk: all leave the zero bounds,
        // so only the value 0 passes afterwards.
        for annotation in [
            "int,max=30,min=18",
            "int,min=18",
            "int,bounds=wide",
            "int,min=99999999999999999999,max=3",
        ] {
            let rule =
                resolve(&registry(), annotation, OptionParsing::Lenient).expect("resolve");
            assert!(rule.validate(&Value::Int(0)).is_ok(), "{annotation}");
            assert!(rule.validate(&Value::Int(18)).is_err(), "{annotation}");
        }
    }

    #[test]
    fn malformed_clause_strict_fails() {
        let err = resolve(&registry(), "int,max=30,min=18", OptionParsing::Strict)
            .err()
            .expect("must fail");
        assert_eq!(
            err,
            RuleError::MalformedOptions {
                clause: "max=30,min=18".to_string()
            }
        );
    }

    #[test]
    fn zero_pair_resolves_but_over_restricts() {
        let rule = resolve(&registry(), "string,min=0,max=0", OptionParsing::Strict)
            .expect("resolution must succeed");
        assert!(rule.validate(&Value::from("")).is_ok());
        assert!(rule.validate(&Value::from("x")).is_err());
    }
}
