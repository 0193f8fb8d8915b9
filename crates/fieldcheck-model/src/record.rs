//! Declarative validation descriptors for record types.
//!
//! Instead of reflecting over a record at runtime, a `RecordSpec` is a
//! static table of (field name, annotation, accessor) bindings declared
//! once per record type. The walker iterates the table in declaration
//! order; accessors take `&R`, so validation never mutates the record.

use std::fmt;

use crate::value::Value;

/// Annotation value marking a field as never evaluated.
pub const SKIP_ANNOTATION: &str = "_";

/// One field binding: where to read the value and which rule to apply.
pub struct FieldSpec<R> {
    name: &'static str,
    annotation: &'static str,
    accessor: fn(&R) -> Value,
}

impl<R> FieldSpec<R> {
    pub fn new(name: &'static str, annotation: &'static str, accessor: fn(&R) -> Value) -> Self {
        Self {
            name,
            annotation,
            accessor,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn annotation(&self) -> &'static str {
        self.annotation
    }

    /// True when the field carries no annotation or the skip sentinel.
    pub fn is_skipped(&self) -> bool {
        self.annotation.is_empty() || self.annotation == SKIP_ANNOTATION
    }

    /// Read the field's current value from the record.
    pub fn value(&self, record: &R) -> Value {
        (self.accessor)(record)
    }
}

impl<R> Clone for FieldSpec<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            annotation: self.annotation,
            accessor: self.accessor,
        }
    }
}

impl<R> fmt::Debug for FieldSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("annotation", &self.annotation)
            .finish()
    }
}

/// Ordered validation descriptor for a record type.
pub struct RecordSpec<R> {
    record: &'static str,
    fields: Vec<FieldSpec<R>>,
}

impl<R> RecordSpec<R> {
    /// Empty descriptor labelled with the record type name.
    pub fn new(record: &'static str) -> Self {
        Self {
            record,
            fields: Vec::new(),
        }
    }

    /// Append a field binding. Declaration order is report order.
    #[must_use]
    pub fn field(
        mut self,
        name: &'static str,
        annotation: &'static str,
        accessor: fn(&R) -> Value,
    ) -> Self {
        self.fields.push(FieldSpec::new(name, annotation, accessor));
        self
    }

    /// Append a field that is never evaluated.
    #[must_use]
    pub fn skip(self, name: &'static str, accessor: fn(&R) -> Value) -> Self {
        self.field(name, SKIP_ANNOTATION, accessor)
    }

    pub fn record(&self) -> &'static str {
        self.record
    }

    pub fn fields(&self) -> &[FieldSpec<R>] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<R> Clone for RecordSpec<R> {
    fn clone(&self) -> Self {
        Self {
            record: self.record,
            fields: self.fields.clone(),
        }
    }
}

impl<R> fmt::Debug for RecordSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordSpec")
            .field("record", &self.record)
            .field("fields", &self.fields)
            .finish()
    }
}
