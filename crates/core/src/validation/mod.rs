//! Field validation: declarative rule tables, the notifier that aggregates their
//! failures, and an invocation spy for validation hooks.

pub mod notifier;
pub mod report;
pub mod rules;
pub mod spy;

pub use notifier::Notifier;
pub use report::ValidationReport;
pub use rules::{Rule, RuleSet};
