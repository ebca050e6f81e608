//! Update User Use Case
//!
//! Changes email and/or names of an active user.

use std::sync::Arc;

use kernel::domain::entity::Identifiable;
use kernel::error::domain_error::DomainError;
use kernel::error::field_errors::FieldErrors;

use crate::application::get_user::find_active;
use crate::domain::entity::User;
use crate::domain::entity::user::{FIRST_NAME_FIELD, LAST_NAME_FIELD};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, PersonName, UserId};
use crate::error::UserResult;

/// Update user input; `None` leaves a field as it is
#[derive(Debug, Clone)]
pub struct UpdateUserInput {
    pub user_id: UserId,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Update user use case
pub struct UpdateUserUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: UpdateUserInput) -> UserResult<User> {
        // Validate everything before touching the entity
        let mut errors = FieldErrors::new();
        let email = errors
            .capture(input.email.as_deref().map(Email::new).transpose())?
            .flatten();
        let first_name = errors
            .capture(
                input
                    .first_name
                    .as_deref()
                    .map(|raw| PersonName::new(FIRST_NAME_FIELD, raw))
                    .transpose(),
            )?
            .flatten();
        let last_name = errors
            .capture(
                input
                    .last_name
                    .as_deref()
                    .map(|raw| PersonName::new(LAST_NAME_FIELD, raw))
                    .transpose(),
            )?
            .flatten();
        errors.into_result()?;

        let mut user = find_active(self.user_repo.as_ref(), &input.user_id).await?;
        let mut changed = false;

        if let Some(email) = email
            && email != *user.email()
        {
            if let Some(holder) = self.user_repo.find_by_email(&email).await?
                && !holder.same_identity(&user)
            {
                tracing::debug!(
                    user_id = %input.user_id,
                    holder_id = %holder.id(),
                    "Requested email is held by another user"
                );
                return Err(DomainError::conflict("Email already exists").into());
            }
            changed |= user.update_email(email)?;
        }

        if first_name.is_some() || last_name.is_some() {
            let first_name = first_name.unwrap_or_else(|| user.first_name().clone());
            let last_name = last_name.unwrap_or_else(|| user.last_name().clone());
            changed |= user.rename(first_name, last_name)?;
        }

        if !changed {
            tracing::debug!(user_id = %input.user_id, "User update had no effect");
            return Ok(user);
        }

        self.user_repo.save(&user).await?;

        tracing::info!(user_id = %input.user_id, "User updated");

        Ok(user)
    }
}
