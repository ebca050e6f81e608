//! Delete User Use Case
//!
//! Soft delete. Deleting an already-deleted user succeeds without writing.

use std::sync::Arc;

use kernel::error::domain_error::OptionExt;

use crate::application::get_user::USER_ENTITY;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserId;
use crate::error::UserResult;

/// Delete user use case
pub struct DeleteUserUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> DeleteUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: UserId) -> UserResult<User> {
        let mut user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or_not_found(USER_ENTITY, user_id)?;

        if user.mark_deleted() {
            self.user_repo.save(&user).await?;
            tracing::info!(user_id = %user_id, "User deleted");
        } else {
            tracing::debug!(user_id = %user_id, "User already deleted");
        }

        Ok(user)
    }
}
