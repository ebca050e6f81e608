//! Field Errors
//!
//! Ordered `field -> messages` map carried by validation failures.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::domain_error::DomainError;

/// Per-field validation messages
///
/// Fields are kept in lexical order so rendered output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-field error set
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Record a message against a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Fold another set into this one, keeping message order per field
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// Absorb a validation failure and hand back the value on success.
    ///
    /// Validation errors are merged and yield `Ok(None)`; any other
    /// domain error is returned as-is so the caller can propagate it.
    pub fn capture<T>(&mut self, result: Result<T, DomainError>) -> Result<Option<T>, DomainError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(DomainError::Validation { errors }) => {
                self.merge(errors);
                Ok(None)
            }
            Err(other) => Err(other),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one message
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Wrap into a validation error regardless of content
    pub fn into_error(self) -> DomainError {
        DomainError::Validation { errors: self }
    }

    /// `Ok(())` when nothing was recorded, otherwise a validation error
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{}: {}", field, messages.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_groups_by_field() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Email cannot be empty");
        errors.add("email", "Invalid email format");
        errors.add("firstName", "First name cannot be empty");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email").map(<[String]>::len), Some(2));
        assert!(errors.contains("firstName"));
        assert!(!errors.contains("lastName"));
    }

    #[test]
    fn test_merge_appends() {
        let mut left = FieldErrors::single("email", "a");
        left.merge(FieldErrors::single("email", "b"));
        assert_eq!(left.get("email").unwrap(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_capture_validation_and_passthrough() {
        let mut errors = FieldErrors::new();

        let ok = errors.capture(Ok::<_, DomainError>(7)).unwrap();
        assert_eq!(ok, Some(7));

        let none = errors
            .capture::<i32>(Err(DomainError::validation("email", "Invalid email format")))
            .unwrap();
        assert_eq!(none, None);
        assert!(errors.contains("email"));

        let passthrough = errors.capture::<i32>(Err(DomainError::conflict("taken")));
        assert!(matches!(passthrough, Err(DomainError::Conflict { .. })));
    }

    #[test]
    fn test_into_result() {
        assert!(FieldErrors::new().into_result().is_ok());
        let err = FieldErrors::single("email", "bad").into_result().unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_display_and_serialize() {
        let mut errors = FieldErrors::new();
        errors.add("lastName", "required");
        errors.add("email", "bad");
        assert_eq!(errors.to_string(), "email: bad; lastName: required");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"email": ["bad"], "lastName": ["required"]}));
    }
}
