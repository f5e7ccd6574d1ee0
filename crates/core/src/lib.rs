//! `catalog-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! value objects, the identifier value object, the entity contract and the
//! validation notifier entities funnel their invariants through.

pub mod entity;
pub mod error;
pub mod id;
pub mod validation;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, EntityValidationError, InvalidIdentifierError};
pub use id::Identifier;
pub use validation::{Notifier, Rule, RuleSet, ValidationReport};
pub use value_object::ValueObject;
