//! Validation report: field name -> ordered failure messages.

use std::collections::BTreeMap;

use serde::Serialize;

/// Outcome of one validation pass.
///
/// Messages under a field keep rule declaration order and duplicates are preserved.
/// An empty report means the candidate is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a failure message for `field`.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages recorded for `field`, if any.
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Names of the fields that failed, in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// True when every expected message is recorded under `field`.
    pub fn contains(&self, field: &str, expected: &[&str]) -> bool {
        self.field(field).is_some_and(|messages| {
            expected
                .iter()
                .all(|want| messages.iter().any(|have| have == want))
        })
    }
}
