//! DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::domain::entity::{Entity, Identifiable};
use serde::{Deserialize, Serialize};

use crate::domain::entity::User;
use crate::domain::value_object::{Email, PersonName, UserId};

// ============================================================================
// Create
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

// ============================================================================
// Get / Delete
// ============================================================================

/// Request addressing one user by id
#[derive(Debug, Clone, Deserialize)]
pub struct UserIdRequest {
    /// Raw id; parsed by the handler so a malformed id becomes a field error
    pub id: String,
}

// ============================================================================
// Update
// ============================================================================

/// Update user request; absent fields are left unchanged
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

// ============================================================================
// List
// ============================================================================

/// List users request
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListUsersRequest {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

// ============================================================================
// Response
// ============================================================================

/// User representation returned to clients
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub email: Email,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: *user.id(),
            email: user.email().clone(),
            first_name: user.first_name().clone(),
            last_name: user.last_name().clone(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
            deleted_at: user.deleted_at(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}
