//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the infrastructure layer.

use kernel::pagination::PageRequest;

use crate::domain::entity::User;
use crate::domain::value_object::{Email, UserId};
use crate::error::UserResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert or replace a user.
    ///
    /// Atomic with respect to email uniqueness: if another user already holds
    /// the email, fails with a `Conflict` domain error and stores nothing.
    async fn save(&self, user: &User) -> UserResult<()>;

    /// Find user by ID (including soft-deleted users)
    async fn find_by_id(&self, user_id: &UserId) -> UserResult<Option<User>>;

    /// Find user by email (including soft-deleted users)
    async fn find_by_email(&self, email: &Email) -> UserResult<Option<User>>;

    /// Check if email is held by any user
    async fn exists_by_email(&self, email: &Email) -> UserResult<bool>;

    /// One page of active users, oldest first, plus the total active count
    async fn list(&self, page: &PageRequest) -> UserResult<(Vec<User>, u64)>;
}
