use thiserror::Error;

use crate::value::ValueKind;

/// Everything that can go wrong while resolving an annotation or checking
/// a value against a rule.
///
/// Resolution kinds (`MissingRuleName`, `UnknownRule`, `MalformedOptions`,
/// `InvalidPattern`) surface before a rule instance exists; the rest are
/// per-value diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("validation rule missing from annotation")]
    MissingRuleName,
    #[error("no rule registered for `{name}`")]
    UnknownRule { name: String },
    #[error("malformed option clause `{clause}`")]
    MalformedOptions { clause: String },
    #[error("not of {expected} type")]
    TypeMismatch { expected: ValueKind },
    #[error("integer {value}, allowed range [{min},{max}]")]
    OutOfRange { value: i64, min: i64, max: i64 },
    #[error("string length {length}, allowed range [{min},{max}]")]
    LengthOutOfRange { length: usize, min: i64, max: i64 },
    #[error("not a valid email address")]
    PatternMismatch,
    #[error("invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl RuleError {
    /// Stable machine-readable tag for report output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingRuleName => "missing_rule_name",
            Self::UnknownRule { .. } => "unknown_rule",
            Self::MalformedOptions { .. } => "malformed_options",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::OutOfRange { .. } => "out_of_range",
            Self::LengthOutOfRange { .. } => "length_out_of_range",
            Self::PatternMismatch => "pattern_mismatch",
            Self::InvalidPattern { .. } => "invalid_pattern",
        }
    }

    /// True for errors raised while turning an annotation into a rule
    /// instance, as opposed to checking a value.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::MissingRuleName
                | Self::UnknownRule { .. }
                | Self::MalformedOptions { .. }
                | Self::InvalidPattern { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RuleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_echo_bounds() {
        let err = RuleError::OutOfRange {
            value: 85,
            min: 18,
            max: 30,
        };
        assert_eq!(err.to_string(), "integer 85, allowed range [18,30]");
        assert_eq!(err.kind(), "out_of_range");

        let err = RuleError::LengthOutOfRange {
            length: 4,
            min: 10,
            max: 13,
        };
        assert_eq!(err.to_string(), "string length 4, allowed range [10,13]");
    }

    #[test]
    fn resolution_vs_validation() {
        assert!(
            RuleError::UnknownRule {
                name: "bogus".to_string()
            }
            .is_resolution_error()
        );
        assert!(!RuleError::PatternMismatch.is_resolution_error());
    }
}
