//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are interchangeable.

use core::any::Any;

/// Trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Structural equality is
/// the type's own `PartialEq`, which for derived impls walks exactly the declared
/// fields: nested value objects compare through their own `PartialEq`, `Vec`s and maps
/// elementwise.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// ## Usage Pattern
///
/// ```
/// use catalog_core::ValueObject;
///
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
///
/// let m1 = Money { amount: 100, currency: "USD".to_string() };
/// let m2 = Money { amount: 100, currency: "USD".to_string() };
/// assert!(m1.equals(Some(&m2)));
/// assert!(!m1.equals(None));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + Any {
    /// Structural comparison against an arbitrary, possibly absent, other object.
    ///
    /// Returns `false` for `None` and for any value of a different concrete type, even
    /// when the field contents coincide. Never panics.
    fn equals(&self, other: Option<&dyn Any>) -> bool {
        other
            .and_then(|other| other.downcast_ref::<Self>())
            .is_some_and(|other| self == other)
    }
}
