//! Declarative rule tables.
//!
//! Each entity declares, per field, an ordered list of named constraints. A constraint
//! looks at the candidate value (absent when the field is missing) and yields a
//! human-readable failure message or nothing.

use core::fmt;

use serde_json::Value;

type Check = dyn Fn(&str, Option<&Value>) -> Option<String> + Send + Sync;

/// A named constraint on a single field value.
pub struct Rule {
    name: &'static str,
    check: Box<Check>,
}

impl Rule {
    pub fn new<F>(name: &'static str, check: F) -> Self
    where
        F: Fn(&str, Option<&Value>) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            name,
            check: Box::new(check),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluate against `value`, returning the failure message if the rule is violated.
    pub fn check(&self, field: &str, value: Option<&Value>) -> Option<String> {
        (self.check)(field, value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Fails on absent, `null` and the empty string.
pub fn not_empty() -> Rule {
    Rule::new("not_empty", |field, value| match value {
        None | Some(Value::Null) => Some(format!("{field} should not be empty")),
        Some(Value::String(s)) if s.is_empty() => Some(format!("{field} should not be empty")),
        Some(_) => None,
    })
}

pub fn is_string() -> Rule {
    Rule::new("is_string", |field, value| match value {
        Some(Value::String(_)) => None,
        _ => Some(format!("{field} must be a string")),
    })
}

/// Fails on strings longer than `max` characters, and on anything that is not a string.
pub fn max_length(max: usize) -> Rule {
    Rule::new("max_length", move |field, value| match value {
        Some(Value::String(s)) if s.chars().count() <= max => None,
        _ => Some(format!(
            "{field} must be shorter than or equal to {max} characters"
        )),
    })
}

pub fn is_boolean() -> Rule {
    Rule::new("is_boolean", |field, value| match value {
        Some(Value::Bool(_)) => None,
        _ => Some(format!("{field} must be a boolean value")),
    })
}

/// Constraints declared for one field.
#[derive(Debug)]
pub struct FieldRules {
    field: &'static str,
    optional: bool,
    rules: Vec<Rule>,
}

impl FieldRules {
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// Per-entity table: field name -> ordered constraints.
#[derive(Debug, Default)]
pub struct RuleSet {
    fields: Vec<FieldRules>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field whose rules always run.
    pub fn required(mut self, field: &'static str, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push(FieldRules {
            field,
            optional: false,
            rules: rules.into_iter().collect(),
        });
        self
    }

    /// Declare a field whose rules are skipped when the value is absent or `null`.
    pub fn optional(mut self, field: &'static str, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push(FieldRules {
            field,
            optional: true,
            rules: rules.into_iter().collect(),
        });
        self
    }

    pub fn fields(&self) -> &[FieldRules] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(rule: Rule, value: Option<Value>) -> Option<String> {
        rule.check("name", value.as_ref())
    }

    #[test]
    fn not_empty_rejects_absent_null_and_empty_string() {
        let msg = Some("name should not be empty".to_string());
        assert_eq!(run(not_empty(), None), msg);
        assert_eq!(run(not_empty(), Some(Value::Null)), msg);
        assert_eq!(run(not_empty(), Some(json!(""))), msg);
        assert_eq!(run(not_empty(), Some(json!(" "))), None);
        assert_eq!(run(not_empty(), Some(json!(5))), None);
    }

    #[test]
    fn is_string_accepts_only_strings() {
        assert_eq!(run(is_string(), Some(json!("x"))), None);
        assert_eq!(
            run(is_string(), Some(json!(5))),
            Some("name must be a string".to_string())
        );
        assert!(run(is_string(), None).is_some());
    }

    #[test]
    fn max_length_counts_characters_and_rejects_non_strings() {
        let msg = Some("name must be shorter than or equal to 3 characters".to_string());
        assert_eq!(run(max_length(3), Some(json!("abc"))), None);
        assert_eq!(run(max_length(3), Some(json!("äöü"))), None);
        assert_eq!(run(max_length(3), Some(json!("abcd"))), msg);
        assert_eq!(run(max_length(3), Some(json!(1))), msg);
        assert_eq!(run(max_length(3), Some(Value::Null)), msg);
    }

    #[test]
    fn is_boolean_accepts_only_booleans() {
        assert_eq!(run(is_boolean(), Some(json!(false))), None);
        assert_eq!(
            run(is_boolean(), Some(json!(5))),
            Some("name must be a boolean value".to_string())
        );
    }

    #[test]
    fn rule_set_keeps_declaration_order() {
        let rules = RuleSet::new()
            .required("name", [not_empty(), is_string()])
            .optional("description", [is_string()]);

        let names: Vec<_> = rules.fields().iter().map(FieldRules::field).collect();
        assert_eq!(names, ["name", "description"]);
        assert!(!rules.fields()[0].is_optional());
        assert!(rules.fields()[1].is_optional());
        assert_eq!(rules.fields()[0].rules()[1].name(), "is_string");
    }
}
