//! Field rule and validation result types.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// The canonical type a field must coerce to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `true`/`false`, also accepting the integers 0/1 (toggle widgets
    /// post their state as 0/1).
    Boolean,
    /// A JSON integer, or a float with no fractional part.
    Integer,
    /// An RFC 3339 timestamp or a plain `YYYY-MM-DD` date string.
    Date,
    /// A non-blank string referencing another entity. Identifier
    /// format and referential integrity are enforced by storage.
    Reference,
    /// A plain string; required text must be non-blank.
    Text,
}

/// A single declarative rule: one field, one kind, presence flags.
///
/// `required` takes precedence over `nullable`: a required field fails
/// on null even when its declared type permits null.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub nullable: bool,
}

impl FieldRule {
    /// A field that must be present and non-null.
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            nullable: false,
        }
    }

    /// A field that may be absent or null.
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            nullable: true,
        }
    }

    /// Mark the declared type as nullable without lifting the required
    /// constraint (the yup-style `nullable().required()` chain).
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// Per-field validation errors: field name -> human-readable message.
///
/// Backed by a `BTreeMap` so serialization and iteration order are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}
