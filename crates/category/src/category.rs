use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use catalog_core::validation::rules::{is_boolean, is_string, max_length, not_empty};
use catalog_core::validation::spy;
use catalog_core::{
    DomainResult, Entity, EntityValidationError, Identifier, InvalidIdentifierError, Notifier,
    RuleSet, ValidationReport,
};

/// Hook name recorded by every call to [`Category::validate`].
pub const CATEGORY_VALIDATE_HOOK: &str = "Category::validate";

/// Maximum category name length, in characters.
pub const NAME_MAX_LENGTH: usize = 255;

static CATEGORY_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .required("name", [not_empty(), is_string(), max_length(NAME_MAX_LENGTH)])
        .optional("description", [is_string()])
        .optional("is_active", [is_boolean()])
});

/// Input for [`Category::create`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCreateCommand {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl CategoryCreateCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_active: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Input for the non-validating [`Category::new`] path (reconstruction from trusted
/// storage). Absent values fall back to the same defaults as [`Category::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryProps {
    pub category_id: Option<Identifier>,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

impl CategoryProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            category_id: None,
            name: name.into(),
            description: None,
            is_active: None,
            created_at: None,
        }
    }
}

/// Entity: Category.
///
/// Every construction through [`Category::create`] and every field-changing mutation
/// funnels through [`Category::validate`]. Mutations are applied before validation and
/// are not rolled back when it fails.
#[derive(Debug, Clone)]
pub struct Category {
    category_id: Identifier,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Build without validating field invariants.
    pub fn new(props: CategoryProps) -> Self {
        Self {
            category_id: props.category_id.unwrap_or_else(Identifier::generate),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
        }
    }

    /// Factory: assemble a new category with defaults, then validate it.
    pub fn create(command: CategoryCreateCommand) -> Result<Self, EntityValidationError> {
        let category = Self::new(CategoryProps {
            category_id: None,
            name: command.name,
            description: command.description,
            is_active: command.is_active,
            created_at: None,
        });
        Self::validate(&category.fields(), None)?;

        tracing::debug!(category_id = %category.category_id, "category created");
        Ok(category)
    }

    /// Factory over untyped input, e.g. a decoded request body.
    ///
    /// Type violations (`"name": 5`, `"is_active": "yes"`) are reported through the
    /// same aggregated error as business invariants.
    pub fn create_from_json(input: Value) -> Result<Self, EntityValidationError> {
        let Value::Object(mut candidate) = input else {
            return Err(not_an_object());
        };
        candidate.entry("description").or_insert(Value::Null);
        if matches!(candidate.get("is_active"), None | Some(Value::Null)) {
            candidate.insert("is_active".to_owned(), Value::Bool(true));
        }
        Self::validate(&candidate, None)?;

        let category = Self::from_validated(None, &candidate, None);
        tracing::debug!(category_id = %category.category_id, "category created");
        Ok(category)
    }

    /// Rebuild from a stored serialization view (see [`Entity::to_json`]).
    ///
    /// The identifier is format-checked and the fields are type-checked against the
    /// category rules; a missing `created_at` defaults to now.
    pub fn restore(stored: Value) -> DomainResult<Self> {
        let Value::Object(fields) = stored else {
            return Err(not_an_object().into());
        };

        let category_id = match fields.get("category_id") {
            None | Some(Value::Null) => None,
            Some(Value::String(id)) => Some(Identifier::parse(id)?),
            Some(other) => return Err(InvalidIdentifierError::new(other.to_string()).into()),
        };

        Self::validate(&fields, None)?;

        let created_at = match fields.get("created_at") {
            None | Some(Value::Null) => None,
            Some(Value::String(raw)) => Some(
                DateTime::parse_from_rfc3339(raw)
                    .map(|t| t.with_timezone(&Utc))
                    .map_err(|_| invalid_created_at())?,
            ),
            Some(_) => return Err(invalid_created_at().into()),
        };

        Ok(Self::from_validated(category_id, &fields, created_at))
    }

    /// The single validation hook for categories.
    ///
    /// Runs the category rule table over `candidate` (restricted to `fields` when
    /// given) and raises every failure at once.
    pub fn validate(
        candidate: &Map<String, Value>,
        fields: Option<&[&str]>,
    ) -> Result<(), EntityValidationError> {
        spy::record(CATEGORY_VALIDATE_HOOK);

        let report = Notifier::validate(candidate, &CATEGORY_RULES, fields);
        if !report.is_empty() {
            let failed: Vec<&str> = report.fields().collect();
            tracing::debug!(entity = "Category", ?failed, "validation failed");
        }
        Notifier::from(report).into_result()
    }

    pub fn category_id(&self) -> &Identifier {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Rename, then re-validate. On failure the new name stays in place.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), EntityValidationError> {
        self.name = name.into();
        Self::validate(&self.fields(), None)
    }

    /// Replace the description, then re-validate. On failure the new value stays in place.
    pub fn change_description(
        &mut self,
        description: Option<String>,
    ) -> Result<(), EntityValidationError> {
        self.description = description;
        Self::validate(&self.fields(), None)
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    fn fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert(
            "category_id".to_owned(),
            Value::String(self.category_id.to_string()),
        );
        fields.insert("name".to_owned(), Value::String(self.name.clone()));
        fields.insert(
            "description".to_owned(),
            self.description.clone().map_or(Value::Null, Value::String),
        );
        fields.insert("is_active".to_owned(), Value::Bool(self.is_active));
        fields.insert(
            "created_at".to_owned(),
            Value::String(self.created_at.to_rfc3339()),
        );
        fields
    }

    /// Build from a candidate that already passed [`Category::validate`].
    fn from_validated(
        category_id: Option<Identifier>,
        candidate: &Map<String, Value>,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        let text = |field: &str| candidate.get(field).and_then(Value::as_str).map(str::to_owned);

        Self::new(CategoryProps {
            category_id,
            name: text("name").unwrap_or_default(),
            description: text("description"),
            is_active: candidate.get("is_active").and_then(Value::as_bool),
            created_at,
        })
    }
}

impl Entity for Category {
    type Id = Identifier;

    fn entity_id(&self) -> &Identifier {
        &self.category_id
    }

    fn to_json(&self) -> Value {
        Value::Object(self.fields())
    }
}

fn not_an_object() -> EntityValidationError {
    let mut report = ValidationReport::new();
    report.push("category", "category must be an object");
    EntityValidationError::new(report)
}

fn invalid_created_at() -> EntityValidationError {
    let mut report = ValidationReport::new();
    report.push("created_at", "created_at must be a valid ISO 8601 date string");
    EntityValidationError::new(report)
}
