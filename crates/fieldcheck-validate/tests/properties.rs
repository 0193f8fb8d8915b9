//! Property tests for rule bounds and pass stability.

use proptest::prelude::*;

use fieldcheck_model::{RecordSpec, RuleOptions, Value};
use fieldcheck_validate::{NumberRule, StringRule, Validate, validate_record};

proptest! {
    #[test]
    fn int_rule_accepts_exactly_the_inclusive_range(
        min in -1000i64..1000,
        span in 0i64..1000,
        value in -3000i64..3000,
    ) {
        let max = min + span;
        let rule = NumberRule::new(&RuleOptions::new().with_min(min).with_max(max));
        let inside = value >= min && value <= max;
        prop_assert_eq!(rule.validate(&Value::Int(value)).is_ok(), inside);
    }

    #[test]
    fn string_rule_accepts_exactly_the_inclusive_length_range(
        min in 0i64..20,
        span in 0i64..20,
        text in "[a-z]{0,40}",
    ) {
        let max = min + span;
        let rule = StringRule::new(&RuleOptions::new().with_min(min).with_max(max));
        let length = text.chars().count() as i64;
        let inside = length >= min && length <= max;
        prop_assert_eq!(rule.validate(&Value::from(text)).is_ok(), inside);
    }

    #[test]
    fn repeated_passes_are_identical(name in "[a-zA-Z0-9@._-]{0,24}", age in -200i64..200) {
        struct Record {
            name: String,
            age: i64,
        }

        let spec = RecordSpec::new("Record")
            .field("Name", "string,min=2,max=16", |r: &Record| {
                Value::from(r.name.clone())
            })
            .field("Email", "email", |r: &Record| Value::from(r.name.clone()))
            .field("Age", "int", |r: &Record| Value::Int(r.age));
        let record = Record { name, age };

        let first = validate_record(&spec, &record);
        let second = validate_record(&spec, &record);
        prop_assert_eq!(first, second);
    }
}
