//! Response envelope
//!
//! `{success, data?, error?: {code, message, details?}}` produced by the
//! boundary layer from a use-case result.

use serde::Serialize;
use serde_json::Value;

use crate::error::app_error::AppError;
use crate::outcome::OutcomeExt;

/// Error part of the envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<&AppError> for ErrorBody {
    /// Server-side errors are reduced to their public form.
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.public_message().to_string(),
            details: err.public_details().cloned(),
        }
    }
}

/// Standard response envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(err: &AppError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody::from(err)),
        }
    }

    /// Fold a result into an envelope
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: Into<AppError>,
    {
        result.fold(Self::success, |err| Self::failure(&err.into()))
    }
}
