//! Get User Use Case

use std::sync::Arc;

use kernel::domain::entity::Entity;
use kernel::error::domain_error::OptionExt;

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserId;
use crate::error::UserResult;

/// Entity name reported in not-found errors
pub const USER_ENTITY: &str = "User";

/// Get user use case
///
/// Soft-deleted users are reported as not found.
pub struct GetUserUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> GetUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: UserId) -> UserResult<User> {
        let user = find_active(self.user_repo.as_ref(), &user_id).await?;
        tracing::debug!(user_id = %user_id, "User fetched");
        Ok(user)
    }
}

/// Load a user that exists and is not soft-deleted
pub(crate) async fn find_active<R>(user_repo: &R, user_id: &UserId) -> UserResult<User>
where
    R: UserRepository,
{
    let user = user_repo
        .find_by_id(user_id)
        .await?
        .filter(|user| !user.is_deleted())
        .ok_or_not_found(USER_ENTITY, user_id)?;
    Ok(user)
}
