//! Users Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository port
//! - `application/` - Use cases and configuration
//! - `infra/` - Storage adapters (in-memory)
//! - `presentation/` - DTOs and the command dispatcher used by boundary binaries
//!
//! ## Features
//! - Create / get / update / soft-delete / list users
//! - Email uniqueness enforced atomically by the repository `save`
//! - Paginated listing of active users
//!
//! Use cases depend only on the [`UserRepository`](domain::repository::UserRepository)
//! port, which they receive explicitly at construction.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::UsersConfig;
pub use error::{UserError, UserResult};
pub use infra::memory::InMemoryUserRepository;
pub use presentation::handlers::UserHandlers;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    domain_error::DomainError,
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
