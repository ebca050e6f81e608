//! List Users Use Case

use std::sync::Arc;

use kernel::pagination::{PageRequest, Paginated};

use crate::application::config::UsersConfig;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::error::UserResult;

/// List users input; missing values fall back to config defaults
#[derive(Debug, Clone, Copy, Default)]
pub struct ListUsersInput {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// List users use case
pub struct ListUsersUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    config: Arc<UsersConfig>,
}

impl<R> ListUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, config: Arc<UsersConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: ListUsersInput) -> UserResult<Paginated<User>> {
        let request = PageRequest::new(
            input.page.unwrap_or(1),
            input.limit.unwrap_or(self.config.default_page_limit),
            self.config.max_page_limit,
        )?;

        let (users, total) = self.user_repo.list(&request).await?;

        tracing::debug!(
            page = request.page(),
            limit = request.limit(),
            total,
            "Users listed"
        );

        Ok(Paginated::new(users, &request, total))
    }
}
