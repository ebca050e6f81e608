//! Entity Lifecycle
//!
//! Timestamps and the soft-delete marker shared by every entity.
//! Entities hold a [`Lifecycle`] by composition and expose it through
//! [`Entity::lifecycle`](crate::domain::entity::Entity::lifecycle).

use chrono::{DateTime, Utc};

/// Creation / update timestamps plus soft-delete marker
///
/// State machine: `active -> deleted`, one-way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lifecycle {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Lifecycle {
    /// Fresh lifecycle: `created_at == updated_at`, not deleted
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    #[inline]
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Refresh `updated_at`; never moves it backwards
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }

    /// Set the deletion marker.
    ///
    /// Returns `false` (and changes nothing) when already deleted.
    pub fn mark_deleted(&mut self) -> bool {
        if self.is_deleted() {
            return false;
        }
        self.touch();
        self.deleted_at = Some(self.updated_at);
        true
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_has_equal_timestamps() {
        let lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.created_at(), lifecycle.updated_at());
        assert!(!lifecycle.is_deleted());
    }

    #[test]
    fn test_touch_never_moves_backwards() {
        let future = Utc::now() + Duration::hours(1);
        let mut lifecycle = Lifecycle {
            created_at: future,
            updated_at: future,
            deleted_at: None,
        };
        lifecycle.touch();
        assert_eq!(lifecycle.updated_at(), future);
    }

    #[test]
    fn test_mark_deleted_is_idempotent() {
        let mut once = Lifecycle::new();
        assert!(once.mark_deleted());
        let snapshot = once.clone();

        assert!(!once.mark_deleted());
        assert_eq!(once, snapshot);
        assert_eq!(once.deleted_at(), Some(once.updated_at()));
    }
}
