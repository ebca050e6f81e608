//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod update_user;

// Re-exports
pub use config::UsersConfig;
pub use create_user::{CreateUserInput, CreateUserUseCase};
pub use delete_user::DeleteUserUseCase;
pub use get_user::GetUserUseCase;
pub use list_users::{ListUsersInput, ListUsersUseCase};
pub use update_user::{UpdateUserInput, UpdateUserUseCase};
