//! Command Handlers
//!
//! One JSON command in, one [`ApiResponse`] envelope out.

use std::sync::Arc;

use kernel::error::app_error::AppError;
use kernel::error::domain_error::DomainError;
use kernel::pagination::Paginated;
use kernel::response::ApiResponse;
use serde::{Deserialize, Serialize};

use crate::application::config::UsersConfig;
use crate::application::{
    CreateUserInput, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersInput,
    ListUsersUseCase, UpdateUserInput, UpdateUserUseCase,
};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserId;
use crate::error::UserResult;
use crate::presentation::dto::{
    CreateUserRequest, ListUsersRequest, UpdateUserRequest, UserIdRequest, UserResponse,
};

/// Incoming command, discriminated by `op`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum UserCommand {
    Create(CreateUserRequest),
    Get(UserIdRequest),
    Update(UpdateUserRequest),
    Delete(UserIdRequest),
    List(ListUsersRequest),
}

/// Payload of a successful command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    User(UserResponse),
    Users(Paginated<UserResponse>),
}

/// Shared state for user handlers
pub struct UserHandlers<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<UsersConfig>,
}

impl<R> Clone for UserHandlers<R>
where
    R: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
        }
    }
}

impl<R> UserHandlers<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<UsersConfig>) -> Self {
        Self { repo, config }
    }

    /// Parse one JSON line and dispatch it
    pub async fn handle_line(&self, line: &str) -> ApiResponse<CommandOutput> {
        match serde_json::from_str::<UserCommand>(line) {
            Ok(command) => self.dispatch(command).await,
            Err(err) => {
                let err = AppError::from(err);
                tracing::debug!(error = %err, "Malformed command rejected");
                ApiResponse::failure(&err)
            }
        }
    }

    pub async fn dispatch(&self, command: UserCommand) -> ApiResponse<CommandOutput> {
        let result = match command {
            UserCommand::Create(req) => self.create(req).await.map(CommandOutput::User),
            UserCommand::Get(req) => self.get(req).await.map(CommandOutput::User),
            UserCommand::Update(req) => self.update(req).await.map(CommandOutput::User),
            UserCommand::Delete(req) => self.delete(req).await.map(CommandOutput::User),
            UserCommand::List(req) => self.list(req).await.map(CommandOutput::Users),
        };
        ApiResponse::from_result(result)
    }

    // ========================================================================
    // Create
    // ========================================================================

    pub async fn create(&self, req: CreateUserRequest) -> UserResult<UserResponse> {
        let use_case = CreateUserUseCase::new(self.repo.clone());

        let input = CreateUserInput {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
        };

        let user = use_case.execute(input).await?;
        Ok(UserResponse::from(&user))
    }

    // ========================================================================
    // Get
    // ========================================================================

    pub async fn get(&self, req: UserIdRequest) -> UserResult<UserResponse> {
        let user_id = parse_user_id(&req.id)?;
        let user = GetUserUseCase::new(self.repo.clone())
            .execute(user_id)
            .await?;
        Ok(UserResponse::from(&user))
    }

    // ========================================================================
    // Update
    // ========================================================================

    pub async fn update(&self, req: UpdateUserRequest) -> UserResult<UserResponse> {
        let use_case = UpdateUserUseCase::new(self.repo.clone());

        let input = UpdateUserInput {
            user_id: parse_user_id(&req.id)?,
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
        };

        let user = use_case.execute(input).await?;
        Ok(UserResponse::from(&user))
    }

    // ========================================================================
    // Delete
    // ========================================================================

    pub async fn delete(&self, req: UserIdRequest) -> UserResult<UserResponse> {
        let user_id = parse_user_id(&req.id)?;
        let user = DeleteUserUseCase::new(self.repo.clone())
            .execute(user_id)
            .await?;
        Ok(UserResponse::from(&user))
    }

    // ========================================================================
    // List
    // ========================================================================

    pub async fn list(&self, req: ListUsersRequest) -> UserResult<Paginated<UserResponse>> {
        let use_case = ListUsersUseCase::new(self.repo.clone(), self.config.clone());

        let input = ListUsersInput {
            page: req.page,
            limit: req.limit,
        };

        let page = use_case.execute(input).await?;
        Ok(page.map(UserResponse::from))
    }
}

fn parse_user_id(raw: &str) -> Result<UserId, DomainError> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::validation("id", "Invalid user id"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryUserRepository;
    use serde_json::{Value, json};

    fn handlers() -> UserHandlers<InMemoryUserRepository> {
        UserHandlers::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(UsersConfig::default()),
        )
    }

    fn to_json(response: &ApiResponse<CommandOutput>) -> Value {
        serde_json::to_value(response).unwrap()
    }

    #[tokio::test]
    async fn test_create_command_envelope() {
        let handlers = handlers();
        let response = handlers
            .handle_line(r#"{"op":"create","email":"A@B.com","firstName":"John","lastName":"Doe"}"#)
            .await;

        let body = to_json(&response);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["email"], json!("a@b.com"));
        assert_eq!(body["data"]["firstName"], json!("John"));
        assert_eq!(body["data"]["createdAt"], body["data"]["updatedAt"]);
        assert!(body["data"].get("deletedAt").is_none());
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let response = handlers().handle_line("{not json").await;

        assert!(!response.success);
        let error = response.error.unwrap();
        assert_eq!(error.code, "BAD_REQUEST");
        assert!(error.message.starts_with("JSON parse error"));
    }

    #[tokio::test]
    async fn test_unknown_op_is_bad_request() {
        let response = handlers().handle_line(r#"{"op":"explode"}"#).await;
        assert_eq!(response.error.unwrap().code, "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_invalid_id_is_validation_error() {
        let response = handlers().handle_line(r#"{"op":"get","id":"nope"}"#).await;

        let body = to_json(&response);
        assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));
        assert_eq!(body["error"]["details"]["id"], json!(["Invalid user id"]));
    }

    #[tokio::test]
    async fn test_list_command_output_shape() {
        let handlers = handlers();
        for email in ["a@b.com", "c@d.com"] {
            let line = json!({ "op": "create", "email": email, "firstName": "A", "lastName": "B" });
            assert!(handlers.handle_line(&line.to_string()).await.success);
        }

        let response = handlers.handle_line(r#"{"op":"list","limit":1}"#).await;
        let body = to_json(&response);
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"]["total"], json!(2));
        assert_eq!(body["data"]["totalPages"], json!(2));
        assert_eq!(body["data"]["page"], json!(1));
    }
}
