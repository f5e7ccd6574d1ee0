//! Domain error model.

use thiserror::Error;

use crate::validation::ValidationReport;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// A supplied identifier did not match the canonical UUID textual grammar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("ID must be a valid UUID")]
pub struct InvalidIdentifierError {
    input: String,
}

impl InvalidIdentifierError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The rejected input, verbatim.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// One or more declared field invariants failed.
///
/// Always carries the complete report of the validation pass that raised it, never
/// just the first failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Entity Validation Error")]
pub struct EntityValidationError {
    report: ValidationReport,
}

impl EntityValidationError {
    pub fn new(report: ValidationReport) -> Self {
        Self { report }
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn into_report(self) -> ValidationReport {
        self.report
    }
}

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Nothing here is
/// retryable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifierError),

    /// One or more field invariants were violated.
    #[error(transparent)]
    EntityValidation(#[from] EntityValidationError),
}

impl DomainError {
    /// The validation report, when this is a field validation failure.
    pub fn validation_report(&self) -> Option<&ValidationReport> {
        match self {
            DomainError::EntityValidation(e) => Some(e.report()),
            DomainError::InvalidIdentifier(_) => None,
        }
    }
}
