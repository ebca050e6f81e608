//! User Error Types
//!
//! This module provides user-module error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Two channels:
//! - [`UserError::Domain`] - expected business outcomes, callers branch on them
//! - [`UserError::Storage`] - systemic adapter faults, surfaced as internal errors

use kernel::error::{app_error::AppError, domain_error::DomainError, kind::ErrorKind};
use thiserror::Error;

/// User-module result type alias
pub type UserResult<T> = Result<T, UserError>;

/// User-module error variants
#[derive(Debug, Error)]
pub enum UserError {
    /// Business-level rejection (validation, conflict, not found, ...)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Storage adapter failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl UserError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::Domain(err) => err.kind(),
            UserError::Storage(_) => ErrorKind::InternalServerError,
        }
    }

    /// Domain error, if this is an expected business outcome
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            UserError::Domain(err) => Some(err),
            UserError::Storage(_) => None,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            UserError::Storage(msg) => {
                tracing::error!(detail = %msg, "User storage error");
            }
            UserError::Domain(err @ (DomainError::Conflict { .. } | DomainError::Forbidden { .. })) => {
                tracing::warn!(code = err.code(), error = %err, "User request rejected");
            }
            UserError::Domain(err) => {
                tracing::debug!(code = err.code(), error = %err, "User error");
            }
        }
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        err.log();
        match err {
            UserError::Domain(domain) => AppError::from(domain),
            UserError::Storage(msg) => AppError::internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let err: UserError = DomainError::not_found("User", "x").into();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.as_domain().is_some());

        let err = UserError::Storage("capacity exhausted".into());
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
        assert!(err.as_domain().is_none());
    }

    #[test]
    fn test_storage_error_becomes_opaque_internal_error() {
        let app: AppError = UserError::Storage("shard 2 unreachable".into()).into();
        assert_eq!(app.code(), "INTERNAL_ERROR");
        assert_eq!(app.public_message(), "Internal Server Error");
    }

    #[test]
    fn test_domain_error_keeps_code() {
        let app: AppError = UserError::from(DomainError::conflict("Email already exists")).into();
        assert_eq!(app.code(), "CONFLICT");
        assert_eq!(app.status_code(), 409);
    }
}
