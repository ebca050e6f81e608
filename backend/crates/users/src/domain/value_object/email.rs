//! Email Value Object
//!
//! Represents a validated email address.
//! Basic validation only - actual verification is done via email confirmation.

use kernel::domain::value_object::ValueObject;
use kernel::error::domain_error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Field name reported in validation errors
pub const EMAIL_FIELD: &str = "email";

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum local part length (per RFC 5321)
const LOCAL_PART_MAX_LENGTH: usize = 64;

/// Email address value object
///
/// Stored trimmed and lowercased; two emails are equal when their
/// normalized forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl AsRef<str>) -> DomainResult<Self> {
        let email = email.as_ref().trim().to_lowercase();

        if email.is_empty() {
            return Err(DomainError::validation(EMAIL_FIELD, "Email cannot be empty"));
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(DomainError::validation(
                EMAIL_FIELD,
                format!("Email must be at most {} characters", EMAIL_MAX_LENGTH),
            ));
        }

        // Basic email format validation
        if !Self::is_valid_format(&email) {
            return Err(DomainError::validation(EMAIL_FIELD, "Invalid email format"));
        }

        Ok(Self(email))
    }

    /// Basic email format validation
    fn is_valid_format(email: &str) -> bool {
        // Must contain exactly one @
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        if domain.contains('@') {
            return false;
        }

        // Local part checks
        if local.is_empty() || local.len() > LOCAL_PART_MAX_LENGTH {
            return false;
        }
        if local.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return false;
        }

        // Domain checks
        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        // Check domain has valid characters
        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        // Domain shouldn't start or end with dot or hyphen
        if domain.starts_with('.') || domain.ends_with('.') {
            return false;
        }
        if domain.starts_with('-') || domain.ends_with('-') {
            return false;
        }
        if domain.contains("..") {
            return false;
        }

        true
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Email {
    type Value = str;

    fn value(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Email::new(s)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Email::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("a@b.com").is_ok());
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("User@Example.COM").is_ok()); // Should lowercase
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        for input in [
            "",
            "not-an-email",
            "userexample.com",
            "user@",
            "@example.com",
            "user@@example.com",
            "user@example",
            "user@.example.com",
            "user@example..com",
            "us er@example.com",
        ] {
            let err = Email::new(input).unwrap_err();
            assert!(
                err.field_errors().is_some_and(|f| f.contains(EMAIL_FIELD)),
                "expected email validation error for {input:?}"
            );
        }
    }

    #[test]
    fn test_email_too_long() {
        let input = format!("{}@example.com", "a".repeat(250));
        assert!(Email::new(input).is_err());
    }

    #[test]
    fn test_structural_equality() {
        let a = Email::new("a@b.com").unwrap();
        let b = Email::new("  A@B.com ").unwrap();
        assert!(a.equals(&b));
        assert_eq!(a, b);
        assert!(!a.equals(&Email::new("c@b.com").unwrap()));
    }

    #[test]
    fn test_email_case_normalization() {
        let email = Email::new("User@Example.COM").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_deserialize_validates() {
        let email: Email = serde_json::from_str("\"John@Example.com\"").unwrap();
        assert_eq!(email.as_str(), "john@example.com");
        assert!(serde_json::from_str::<Email>("\"nope\"").is_err());
    }
}
