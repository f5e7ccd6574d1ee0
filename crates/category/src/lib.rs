//! Category domain module.
//!
//! A reference entity that validates itself on construction and on every
//! field-changing mutation, reporting all violations at once.

pub mod category;

pub use category::{
    CATEGORY_VALIDATE_HOOK, Category, CategoryCreateCommand, CategoryProps, NAME_MAX_LENGTH,
};
