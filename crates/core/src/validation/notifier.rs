//! Notifier: aggregates every failure of a validation pass into one report.

use serde_json::{Map, Value};

use crate::error::EntityValidationError;
use crate::validation::report::ValidationReport;
use crate::validation::rules::RuleSet;

/// Collects field failures for a single validation pass.
///
/// The notifier knows nothing about what a rule means; it only runs the declared
/// table and keeps every message. A fresh notifier is used per pass.
#[derive(Debug, Default)]
pub struct Notifier {
    report: ValidationReport,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `rules` against `candidate` and return the full report.
    ///
    /// With `fields_to_validate`, only the named fields are checked. Nothing
    /// short-circuits: every rule of every selected field runs.
    pub fn validate(
        candidate: &Map<String, Value>,
        rules: &RuleSet,
        fields_to_validate: Option<&[&str]>,
    ) -> ValidationReport {
        let mut notifier = Self::new();

        let selected = rules.fields().iter().filter(|declared| {
            fields_to_validate.is_none_or(|wanted| wanted.contains(&declared.field()))
        });

        for declared in selected {
            let value = candidate.get(declared.field());
            if declared.is_optional() && matches!(value, None | Some(Value::Null)) {
                continue;
            }
            for rule in declared.rules() {
                if let Some(message) = rule.check(declared.field(), value) {
                    notifier.add_error(declared.field(), message);
                }
            }
        }

        notifier.report
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.report.push(field, message);
    }

    pub fn has_errors(&self) -> bool {
        !self.report.is_empty()
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// `Ok(())` when nothing was recorded, otherwise the aggregated error.
    pub fn into_result(self) -> Result<(), EntityValidationError> {
        if self.has_errors() {
            Err(EntityValidationError::new(self.report))
        } else {
            Ok(())
        }
    }
}

impl From<ValidationReport> for Notifier {
    fn from(report: ValidationReport) -> Self {
        Self { report }
    }
}
