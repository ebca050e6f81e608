//! User Entity
//!
//! Identity-equal user profile with lifecycle timestamps and soft delete.

use chrono::{DateTime, Utc};
use kernel::domain::entity::{Entity, Identifiable};
use kernel::domain::lifecycle::Lifecycle;
use kernel::error::domain_error::{DomainError, DomainResult};
use kernel::error::field_errors::FieldErrors;

use crate::domain::value_object::{Email, PersonName, UserId};

/// Field names used in validation errors
pub const FIRST_NAME_FIELD: &str = "firstName";
pub const LAST_NAME_FIELD: &str = "lastName";

/// User entity
///
/// Fields are private; state changes only through the methods below, each of
/// which refreshes `updated_at`. Equality is by `id` alone.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    email: Email,
    first_name: PersonName,
    last_name: PersonName,
    lifecycle: Lifecycle,
}

impl User {
    /// Create a new user from validated parts
    pub fn new(email: Email, first_name: PersonName, last_name: PersonName) -> Self {
        Self {
            id: UserId::new(),
            email,
            first_name,
            last_name,
            lifecycle: Lifecycle::new(),
        }
    }

    /// Validate raw input and create a user.
    ///
    /// Every invalid field is reported in a single validation error.
    pub fn register(email: &str, first_name: &str, last_name: &str) -> DomainResult<Self> {
        let mut errors = FieldErrors::new();
        let email = errors.capture(Email::new(email))?;
        let first_name = errors.capture(PersonName::new(FIRST_NAME_FIELD, first_name))?;
        let last_name = errors.capture(PersonName::new(LAST_NAME_FIELD, last_name))?;

        let (Some(email), Some(first_name), Some(last_name)) = (email, first_name, last_name)
        else {
            return Err(errors.into_error());
        };

        Ok(Self::new(email, first_name, last_name))
    }

    #[inline]
    pub fn email(&self) -> &Email {
        &self.email
    }

    #[inline]
    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    #[inline]
    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[inline]
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.lifecycle.deleted_at()
    }

    /// Replace the email. Returns `false` when unchanged.
    pub fn update_email(&mut self, email: Email) -> DomainResult<bool> {
        self.ensure_active()?;
        if self.email == email {
            return Ok(false);
        }
        self.email = email;
        self.lifecycle.touch();
        Ok(true)
    }

    /// Replace first and last name. Returns `false` when unchanged.
    pub fn rename(&mut self, first_name: PersonName, last_name: PersonName) -> DomainResult<bool> {
        self.ensure_active()?;
        if self.first_name == first_name && self.last_name == last_name {
            return Ok(false);
        }
        self.first_name = first_name;
        self.last_name = last_name;
        self.lifecycle.touch();
        Ok(true)
    }

    /// Soft delete. Returns `false` if already deleted.
    pub fn mark_deleted(&mut self) -> bool {
        self.lifecycle.mark_deleted()
    }

    fn ensure_active(&self) -> DomainResult<()> {
        if self.lifecycle.is_deleted() {
            return Err(DomainError::business_rule(
                "user.deleted",
                "Deleted users cannot be modified",
            ));
        }
        Ok(())
    }
}

impl Identifiable for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

impl Entity for User {
    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for User {}
