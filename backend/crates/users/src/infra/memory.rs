//! In-memory user repository.
//!
//! A single `RwLock` guards both the primary map and the email index, so
//! the uniqueness check and the write in [`save`](UserRepository::save) happen
//! under one write lock.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::domain::entity::{Entity, Identifiable};
use kernel::error::domain_error::DomainError;
use kernel::pagination::PageRequest;
use tokio::sync::RwLock;

use crate::application::config::UsersConfig;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, UserId};
use crate::error::{UserError, UserResult};

#[derive(Default)]
struct Store {
    by_id: HashMap<UserId, User>,
    /// Normalized email -> owner. Soft-deleted users keep their entry.
    by_email: HashMap<String, UserId>,
}

/// In-memory [`UserRepository`] adapter
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
    max_entries: Option<usize>,
}

impl InMemoryUserRepository {
    /// Creates a new empty, unbounded repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository that refuses new users beyond `max_entries`.
    pub fn with_capacity_limit(max_entries: usize) -> Self {
        Self {
            max_entries: Some(max_entries),
            ..Self::default()
        }
    }

    pub fn from_config(config: &UsersConfig) -> Self {
        Self {
            max_entries: config.max_entries,
            ..Self::default()
        }
    }

    /// Number of stored users, soft-deleted included.
    pub async fn len(&self) -> usize {
        self.store.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> UserResult<()> {
        let mut store = self.store.write().await;
        let id = *user.id();
        let email_key = user.email().as_str();

        if let Some(owner) = store.by_email.get(email_key)
            && *owner != id
        {
            return Err(DomainError::conflict("Email already exists").into());
        }

        let previous_email = match store.by_id.get(&id) {
            // Soft delete is one-way; a stale active copy must not overwrite it
            Some(existing) if existing.is_deleted() && !user.is_deleted() => {
                return Err(DomainError::business_rule(
                    "user.deleted",
                    "Deleted users cannot be modified",
                )
                .into());
            }
            Some(existing) => Some(existing.email().as_str().to_string()),
            None => {
                if let Some(max) = self.max_entries
                    && store.by_id.len() >= max
                {
                    return Err(UserError::Storage(format!(
                        "User store capacity of {} entries exhausted",
                        max
                    )));
                }
                None
            }
        };

        if let Some(previous) = previous_email
            && previous != email_key
        {
            store.by_email.remove(&previous);
        }

        store.by_email.insert(email_key.to_string(), id);
        store.by_id.insert(id, user.clone());

        tracing::trace!(user_id = %id, "User stored");
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> UserResult<Option<User>> {
        Ok(self.store.read().await.by_id.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store
            .by_email
            .get(email.as_str())
            .and_then(|id| store.by_id.get(id))
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> UserResult<bool> {
        Ok(self.store.read().await.by_email.contains_key(email.as_str()))
    }

    async fn list(&self, page: &PageRequest) -> UserResult<(Vec<User>, u64)> {
        let store = self.store.read().await;

        let mut active: Vec<&User> = store
            .by_id
            .values()
            .filter(|user| !user.is_deleted())
            .collect();
        active.sort_by_key(|user| (user.created_at(), *user.id()));

        let total = active.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let users = active
            .into_iter()
            .skip(offset)
            .take(page.limit() as usize)
            .cloned()
            .collect();

        Ok((users, total))
    }
}
