//! Create User Use Case
//!
//! Registers a new user with a unique email.

use std::sync::Arc;

use kernel::domain::entity::Identifiable;
use kernel::error::domain_error::DomainError;

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::error::UserResult;

/// Create user input
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Create user use case
pub struct CreateUserUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> CreateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: CreateUserInput) -> UserResult<User> {
        // Validate all fields and build the entity
        let user = User::register(&input.email, &input.first_name, &input.last_name)?;

        // Fast path; `save` re-checks atomically
        if self.user_repo.exists_by_email(user.email()).await? {
            return Err(DomainError::conflict("Email already exists").into());
        }

        self.user_repo.save(&user).await?;

        tracing::info!(user_id = %user.id(), "User created");

        Ok(user)
    }
}
