//! Entity trait: identity + continuity across state changes.

use crate::value_object::ValueObject;

/// Entity marker + minimal interface.
///
/// Entities are mutable, but their identifier never changes after creation.
pub trait Entity {
    /// Identifier value object.
    type Id: ValueObject;

    /// Returns the entity identifier.
    fn entity_id(&self) -> &Self::Id;

    /// Serialization view of the entity's current state.
    fn to_json(&self) -> serde_json::Value;

    /// Identity comparison: by identifier, never by field content.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.entity_id() == other.entity_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Identifier;

    struct Note {
        id: Identifier,
        text: String,
    }

    impl Entity for Note {
        type Id = Identifier;

        fn entity_id(&self) -> &Identifier {
            &self.id
        }

        fn to_json(&self) -> serde_json::Value {
            serde_json::json!({ "id": self.id.as_str(), "text": self.text })
        }
    }

    #[test]
    fn identity_ignores_field_content() {
        let id = Identifier::generate();
        let a = Note { id: id.clone(), text: "a".into() };
        let b = Note { id, text: "b".into() };
        let c = Note { id: Identifier::generate(), text: "a".into() };

        assert!(a.same_identity_as(&b));
        assert!(!a.same_identity_as(&c));
        assert_eq!(a.to_json()["text"], "a");
    }
}
