pub mod error;
pub mod options;
pub mod record;
pub mod report;
pub mod value;

pub use error::{Result, RuleError};
pub use options::{DEFAULT_MAX, DEFAULT_MIN, OptionParsing, RuleOptions};
pub use record::{FieldSpec, RecordSpec, SKIP_ANNOTATION};
pub use report::{FieldIssue, ValidationReport};
pub use value::{Value, ValueKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_serialize() {
        let options = RuleOptions::new().with_min(18).with_max(30);
        let json = serde_json::to_string(&options).expect("serialize options");
        let round: RuleOptions = serde_json::from_str(&json).expect("deserialize options");
        assert_eq!(round, options);
    }

    #[test]
    fn parsing_mode_default_is_lenient() {
        assert_eq!(OptionParsing::default(), OptionParsing::Lenient);
    }
}
