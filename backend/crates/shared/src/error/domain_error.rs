//! Domain Error - The closed failure taxonomy
//!
//! Every expected business-level rejection in any domain is one of the
//! [`DomainError`] variants. Each carries a stable machine-readable code and
//! a status classification ([`ErrorKind`]). New failure kinds extend this
//! enum rather than inventing ad hoc shapes.

use std::borrow::Cow;
use std::fmt::Display;

use serde_json::{Value, json};
use thiserror::Error;

use super::field_errors::FieldErrors;
use super::kind::ErrorKind;

/// Domain result type alias
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain failure taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A business invariant would be broken (422)
    #[error("{message}")]
    BusinessRule {
        /// Dotted rule identifier, e.g. `user.deleted`
        rule: Cow<'static, str>,
        message: Cow<'static, str>,
    },

    /// Lookup by identifier found nothing (404)
    #[error("{entity} with id {id} not found")]
    EntityNotFound { entity: &'static str, id: String },

    /// Input failed field-level validation (422)
    #[error("Validation failed: {errors}")]
    Validation { errors: FieldErrors },

    /// Request collides with current state (409)
    #[error("{message}")]
    Conflict { message: Cow<'static, str> },

    /// Caller is not authenticated (401)
    #[error("{message}")]
    Unauthorized { message: Cow<'static, str> },

    /// Caller lacks permission (403)
    #[error("{message}")]
    Forbidden { message: Cow<'static, str> },
}

impl DomainError {
    pub fn business_rule(
        rule: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::BusinessRule {
            rule: rule.into(),
            message: message.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: impl Display) -> Self {
        Self::EntityNotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Single-field validation failure
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            errors: FieldErrors::single(field, message),
        }
    }

    pub fn conflict(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Stable machine-readable code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BusinessRule { .. } => "BUSINESS_RULE_VIOLATION",
            Self::EntityNotFound { .. } => "ENTITY_NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Conflict { .. } => "CONFLICT",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Forbidden { .. } => "FORBIDDEN",
        }
    }

    /// Suggested status classification
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::BusinessRule { .. } | Self::Validation { .. } => ErrorKind::UnprocessableEntity,
            Self::EntityNotFound { .. } => ErrorKind::NotFound,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::Forbidden { .. } => ErrorKind::Forbidden,
        }
    }

    #[inline]
    pub const fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Human-readable message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Structured details for the error envelope
    ///
    /// * validation: the field map
    /// * not found: `{entity, id}`
    /// * business rule: `{rule}`
    pub fn details(&self) -> Option<Value> {
        match self {
            Self::Validation { errors } => serde_json::to_value(errors).ok(),
            Self::EntityNotFound { entity, id } => Some(json!({ "entity": entity, "id": id })),
            Self::BusinessRule { rule, .. } => Some(json!({ "rule": rule })),
            Self::Conflict { .. } | Self::Unauthorized { .. } | Self::Forbidden { .. } => None,
        }
    }

    /// Field errors, when this is a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation { errors } => Some(errors),
            _ => None,
        }
    }
}

/// Extension trait turning a lookup `Option<T>` into a [`DomainResult<T>`]
pub trait OptionExt<T> {
    /// Map `None` to [`DomainError::EntityNotFound`]
    fn ok_or_not_found(self, entity: &'static str, id: impl Display) -> DomainResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &'static str, id: impl Display) -> DomainResult<T> {
        self.ok_or_else(|| DomainError::not_found(entity, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_kinds() {
        let cases = [
            (
                DomainError::business_rule("user.deleted", "gone"),
                "BUSINESS_RULE_VIOLATION",
                422,
            ),
            (DomainError::not_found("User", 7), "ENTITY_NOT_FOUND", 404),
            (DomainError::validation("email", "bad"), "VALIDATION_ERROR", 422),
            (DomainError::conflict("taken"), "CONFLICT", 409),
            (DomainError::unauthorized("who"), "UNAUTHORIZED", 401),
            (DomainError::forbidden("no"), "FORBIDDEN", 403),
        ];

        for (err, code, status) in cases {
            assert_eq!(err.code(), code);
            assert_eq!(err.status_code(), status);
        }
    }

    #[test]
    fn test_not_found_message_and_details() {
        let err = DomainError::not_found("User", "abc");
        assert_eq!(err.message(), "User with id abc not found");
        assert_eq!(
            err.details(),
            Some(json!({ "entity": "User", "id": "abc" }))
        );
    }

    #[test]
    fn test_validation_details_carry_field_map() {
        let err = DomainError::validation("email", "Invalid email format");
        assert_eq!(
            err.details(),
            Some(json!({ "email": ["Invalid email format"] }))
        );
        assert!(err.field_errors().unwrap().contains("email"));
        assert!(DomainError::conflict("x").field_errors().is_none());
    }

    #[test]
    fn test_option_ext() {
        let none: Option<i32> = None;
        let err = none.ok_or_not_found("User", "42").unwrap_err();
        assert!(matches!(err, DomainError::EntityNotFound { entity: "User", ref id } if id == "42"));

        assert_eq!(Some(1).ok_or_not_found("User", "42").unwrap(), 1);
    }
}
