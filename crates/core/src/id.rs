//! Identifier value object: a validated, textual UUID.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::InvalidIdentifierError;
use crate::validation::spy;
use crate::value_object::ValueObject;

/// Hook name recorded by [`Identifier`]'s validation step.
pub const IDENTIFIER_VALIDATE_HOOK: &str = "Identifier::validate";

/// Entity identifier in canonical `8-4-4-4-12` hexadecimal form.
///
/// Either freshly generated or validated from caller input; the input string is kept
/// exactly as given (case is not normalised).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier {
    id: String,
}

impl Identifier {
    /// Generate a fresh time-ordered (v7) identifier.
    ///
    /// The generated text still goes through the grammar check, so generation counts
    /// as one validation step like every other construction path.
    pub fn generate() -> Self {
        let id = Uuid::now_v7().hyphenated().to_string();
        let valid = Self::validate(&id).is_ok();
        debug_assert!(valid, "generated identifier must be canonical");
        Self { id }
    }

    /// Generate when `id` is absent, otherwise validate it.
    pub fn new(id: Option<String>) -> Result<Self, InvalidIdentifierError> {
        match id {
            None => Ok(Self::generate()),
            Some(id) => {
                Self::validate(&id)?;
                Ok(Self { id })
            }
        }
    }

    pub fn parse(id: &str) -> Result<Self, InvalidIdentifierError> {
        Self::new(Some(id.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// The single grammar check; runs once per construction.
    fn validate(id: &str) -> Result<(), InvalidIdentifierError> {
        spy::record(IDENTIFIER_VALIDATE_HOOK);
        // Only the hyphenated form is exactly 36 characters long.
        if id.len() == 36 && Uuid::try_parse(id).is_ok() {
            Ok(())
        } else {
            tracing::debug!(input = id, "rejected malformed identifier");
            Err(InvalidIdentifierError::new(id))
        }
    }
}

impl ValueObject for Identifier {}

impl Default for Identifier {
    fn default() -> Self {
        Self::generate()
    }
}

impl core::fmt::Display for Identifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.id)
    }
}

impl FromStr for Identifier {
    type Err = InvalidIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = InvalidIdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(Some(value))
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::spy::Spy;
    use proptest::prelude::*;

    fn is_canonical(id: &str) -> bool {
        let groups: Vec<&str> = id.split('-').collect();
        groups.iter().map(|g| g.len()).eq([8, 4, 4, 4, 12])
            && groups
                .iter()
                .all(|g| g.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()))
    }

    #[test]
    fn rejects_invalid_uuid() {
        let spy = Spy::on(IDENTIFIER_VALIDATE_HOOK);
        let err = Identifier::new(Some("invalid-uuid".to_string())).unwrap_err();
        assert_eq!(err, InvalidIdentifierError::new("invalid-uuid"));
        assert_eq!(spy.calls(), 1);
    }

    #[test]
    fn generates_a_valid_uuid() {
        let spy = Spy::on(IDENTIFIER_VALIDATE_HOOK);
        let id = Identifier::new(None).unwrap();
        assert!(is_canonical(id.as_str()), "{id}");
        assert_eq!(spy.calls(), 1);
    }

    #[test]
    fn accepts_a_valid_uuid_verbatim() {
        let spy = Spy::on(IDENTIFIER_VALIDATE_HOOK);
        let id = Identifier::parse("123e4567-e89b-12d3-a456-426655440000").unwrap();
        assert_eq!(id.as_str(), "123e4567-e89b-12d3-a456-426655440000");
        assert_eq!(spy.calls(), 1);
    }

    #[test]
    fn every_construction_path_validates_exactly_once() {
        const VALID: &str = "123e4567-e89b-12d3-a456-426655440000";
        let paths: [(&str, fn() -> Identifier); 7] = [
            ("generate", Identifier::generate),
            ("default", Identifier::default),
            ("new(None)", || Identifier::new(None).unwrap()),
            ("parse", || Identifier::parse(VALID).unwrap()),
            ("from_str", || VALID.parse().unwrap()),
            ("try_from", || Identifier::try_from(VALID.to_string()).unwrap()),
            ("deserialize", || serde_json::from_value(serde_json::json!(VALID)).unwrap()),
        ];

        for (path, construct) in paths {
            let spy = Spy::on(IDENTIFIER_VALIDATE_HOOK);
            let id = construct();
            assert!(is_canonical(&id.as_str().to_ascii_lowercase()), "{path}: {id}");
            assert_eq!(spy.calls(), 1, "{path}");
        }
    }

    #[test]
    fn accepts_uppercase_and_keeps_case() {
        let id: Identifier = "123E4567-E89B-12D3-A456-426655440000".parse().unwrap();
        assert_eq!(id.to_string(), "123E4567-E89B-12D3-A456-426655440000");
    }

    #[test]
    fn rejects_non_hyphenated_forms() {
        for input in [
            "",
            "123e4567e89b12d3a456426655440000",
            "{123e4567-e89b-12d3-a456-426655440000}",
            "urn:uuid:123e4567-e89b-12d3-a456-426655440000",
            "123e4567-e89b-12d3-a456-42665544000g",
            "123e4567-e89b-12d3-a456-4266554400000",
        ] {
            assert!(Identifier::parse(input).is_err(), "{input:?} accepted");
        }
    }

    #[test]
    fn equality_is_structural() {
        let a = Identifier::parse("123e4567-e89b-12d3-a456-426655440000").unwrap();
        let b = Identifier::parse("123e4567-e89b-12d3-a456-426655440000").unwrap();
        assert!(a.equals(Some(&b)));
        assert!(!a.equals(Some(&Identifier::generate())));
        assert!(!a.equals(None));
    }

    #[test]
    fn deserialization_validates() {
        let id: Identifier =
            serde_json::from_str("\"123e4567-e89b-12d3-a456-426655440000\"").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"123e4567-e89b-12d3-a456-426655440000\"");
        assert!(serde_json::from_str::<Identifier>("\"nope\"").is_err());
    }

    proptest! {
        /// Property: any canonical hex string of the right shape is accepted as-is.
        #[test]
        fn canonical_strings_round_trip(
            a in "[0-9a-fA-F]{8}",
            b in "[0-9a-fA-F]{4}",
            c in "[0-9a-fA-F]{4}",
            d in "[0-9a-fA-F]{4}",
            e in "[0-9a-fA-F]{12}",
        ) {
            let input = format!("{a}-{b}-{c}-{d}-{e}");
            let id = Identifier::parse(&input).unwrap();
            prop_assert_eq!(id.as_str(), input.as_str());
        }

        /// Property: generated identifiers always match the canonical grammar.
        #[test]
        fn generated_identifiers_are_canonical(_n in 0u8..16) {
            let id = Identifier::generate();
            prop_assert!(is_canonical(id.as_str()));
        }
    }
}
