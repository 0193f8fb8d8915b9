//! Built-in rule variants.
//!
//! Each variant lives in its own file, owns a copy of the options relevant
//! to it, and is immutable once constructed. Variants are wired into a
//! `RuleRegistry` by name; the registry can be extended with additional
//! constructors at any point before a validation pass.

mod default;
mod email;
mod number;
mod string;

pub use default::DefaultRule;
pub use email::{DEFAULT_EMAIL_PATTERN, EmailRule};
pub use number::NumberRule;
pub use string::StringRule;

pub(crate) use default::construct as construct_default;
pub(crate) use email::construct as construct_email;
pub(crate) use number::construct as construct_number;
pub(crate) use string::construct as construct_string;

use fieldcheck_model::{Result, Value};

/// Capability contract implemented by every rule variant: check one value,
/// returning the diagnostic on failure.
pub trait Validate {
    fn validate(&self, value: &Value) -> Result<()>;
}
