//! Person Name Value Object
//!
//! First or last name of a user.
//!
//! ## Invariants
//! - NFKC normalized and trimmed
//! - Non-empty, at most [`PERSON_NAME_MAX_LENGTH`] characters
//! - No control characters

use std::fmt;

use kernel::domain::value_object::ValueObject;
use kernel::error::domain_error::{DomainError, DomainResult};
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

/// Maximum length (in characters, after normalization)
pub const PERSON_NAME_MAX_LENGTH: usize = 100;

/// Validated, normalized personal name
///
/// Serialize-only: inbound names arrive as raw strings and are validated
/// against their own field through [`PersonName::new`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Validate `input`, reporting failures against `field`
    pub fn new(field: &str, input: impl AsRef<str>) -> DomainResult<Self> {
        let normalized = input.as_ref().nfkc().collect::<String>().trim().to_string();

        if normalized.is_empty() {
            return Err(DomainError::validation(field, format!("{} cannot be empty", label(field))));
        }

        let length = normalized.chars().count();
        if length > PERSON_NAME_MAX_LENGTH {
            return Err(DomainError::validation(
                field,
                format!(
                    "{} must be at most {} characters",
                    label(field),
                    PERSON_NAME_MAX_LENGTH
                ),
            ));
        }

        if normalized.chars().any(char::is_control) {
            return Err(DomainError::validation(
                field,
                format!("{} contains invalid characters", label(field)),
            ));
        }

        Ok(Self(normalized))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `firstName` -> `First name`
fn label(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 2);
    for (i, c) in field.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.push(' ');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

impl ValueObject for PersonName {
    type Value = str;

    fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PersonName").field(&self.0).finish()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_and_keep_case() {
        let name = PersonName::new("firstName", "  John ").unwrap();
        assert_eq!(name.as_str(), "John");
    }

    #[test]
    fn test_nfkc_normalization() {
        // Full-width 'Ｊ' (U+FF2A) normalizes to ASCII 'J'
        let name = PersonName::new("firstName", "Ｊohn").unwrap();
        assert_eq!(name.as_str(), "John");
    }

    #[test]
    fn test_non_ascii_allowed() {
        assert!(PersonName::new("lastName", "Müller").is_ok());
        assert!(PersonName::new("lastName", "山田").is_ok());
    }

    #[test]
    fn test_empty_fails_with_field() {
        let err = PersonName::new("firstName", "   ").unwrap_err();
        let fields = err.field_errors().unwrap();
        assert_eq!(
            fields.get("firstName").unwrap(),
            ["First name cannot be empty".to_string()]
        );
    }

    #[test]
    fn test_length_limit() {
        assert!(PersonName::new("lastName", "a".repeat(PERSON_NAME_MAX_LENGTH)).is_ok());
        assert!(PersonName::new("lastName", "a".repeat(PERSON_NAME_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_control_characters_rejected() {
        assert!(PersonName::new("lastName", "Do\u{0007}e").is_err());
    }

    #[test]
    fn test_structural_equality() {
        let a = PersonName::new("firstName", "John").unwrap();
        let b = PersonName::new("lastName", " John").unwrap();
        assert!(a.equals(&b));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let name = PersonName::new("firstName", " Ｊohn ").unwrap();
        assert_eq!(serde_json::to_value(&name).unwrap(), serde_json::json!("John"));
    }

    #[test]
    fn test_label() {
        assert_eq!(label("firstName"), "First name");
        assert_eq!(label("name"), "Name");
    }
}
