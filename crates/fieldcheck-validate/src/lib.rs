//! Annotation-driven field validation.
//!
//! A record type declares a [`RecordSpec`](fieldcheck_model::RecordSpec):
//! one (name, annotation, accessor) binding per field, in declaration
//! order. The [`Engine`] resolves each annotation through its
//! [`RuleRegistry`] and applies the resulting rule to the field's value,
//! collecting every diagnostic instead of stopping at the first.
//!
//! ```
//! use fieldcheck_model::{RecordSpec, Value};
//! use fieldcheck_validate::validate_record;
//!
//! struct User {
//!     name: String,
//!     age: i64,
//! }
//!
//! let spec = RecordSpec::new("User")
//!     .field("Name", "string,min=2,max=16", |u: &User| {
//!         Value::from(u.name.clone())
//!     })
//!     .field("Age", "int,min=18,max=30", |u: &User| Value::Int(u.age));
//!
//! let user = User {
//!     name: "oshank".to_string(),
//!     age: 85,
//! };
//! let report = validate_record(&spec, &user);
//! assert_eq!(report.issue_count(), 1);
//! assert_eq!(report.issues[0].field, "Age");
//! ```

mod engine;
mod registry;
mod report;
mod resolve;
pub mod rules;

pub use engine::{Engine, validate_record};
pub use registry::{RuleConstructor, RuleRegistry};
pub use report::{IssueJson, ReportPayload, ReportSummary, report_payload, write_report_json};
pub use resolve::resolve;
pub use rules::{DEFAULT_EMAIL_PATTERN, DefaultRule, EmailRule, NumberRule, StringRule, Validate};
