// ABOUTME: Common response envelope, error payload, and pagination types of the backend API
// ABOUTME: Unwraps {success, data | error} responses into AppResult values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

use crate::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error codes reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    /// Request failed validation
    ValidationError,
    /// Malformed request
    BadRequest,
    /// Missing or rejected credentials
    Unauthorized,
    /// Resource does not exist
    NotFound,
    /// HTTP method not supported on the endpoint
    MethodNotAllowed,
    /// Resource already exists
    Conflict,
    /// Backend database failure
    DbError,
    /// Unexpected backend failure
    InternalError,
}

impl ApiErrorCode {
    /// Wire literal
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::Conflict => "CONFLICT",
            Self::DbError => "DB_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ApiErrorCode> for ErrorCode {
    fn from(code: ApiErrorCode) -> Self {
        match code {
            ApiErrorCode::ValidationError | ApiErrorCode::BadRequest => Self::InvalidInput,
            ApiErrorCode::Unauthorized => Self::AuthInvalid,
            ApiErrorCode::NotFound => Self::ResourceNotFound,
            ApiErrorCode::Conflict => Self::ResourceAlreadyExists,
            ApiErrorCode::MethodNotAllowed | ApiErrorCode::DbError | ApiErrorCode::InternalError => {
                Self::ExternalServiceError
            }
        }
    }
}

/// Error payload of a failed response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Backend error code
    pub code: ApiErrorCode,
    /// Human-readable message
    pub message: String,
    /// Field-level details
    #[serde(default)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl From<ApiErrorResponse> for AppError {
    fn from(error: ApiErrorResponse) -> Self {
        let code = ErrorCode::from(error.code);
        let mut details = error.details;
        details.insert(
            "api_code".to_owned(),
            serde_json::Value::String(error.code.as_str().to_owned()),
        );
        Self::new(code, error.message).with_details(serde_json::Value::Object(details))
    }
}

/// Response envelope wrapping every backend payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    /// Whether the call succeeded
    pub success: bool,
    /// Optional status message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload, present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error, present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorResponse>,
}

impl<T> ApiEnvelope<T> {
    /// Successful envelope
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            error: None,
        }
    }

    /// Failed envelope
    #[must_use]
    pub const fn failure(error: ApiErrorResponse) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: Some(error),
        }
    }

    /// Unwrap the payload or convert the reported error
    ///
    /// # Errors
    ///
    /// Returns the backend error mapped onto [`ErrorCode`], or
    /// `ExternalServiceError` when the envelope is internally inconsistent
    pub fn into_result(self) -> AppResult<T> {
        match (self.success, self.data, self.error) {
            (true, Some(data), _) => Ok(data),
            (true, None, _) => Err(AppError::external_service(
                "Successful response carried no data",
            )),
            (false, _, Some(error)) => Err(error.into()),
            (false, _, None) => Err(AppError::external_service(
                self.message
                    .unwrap_or_else(|| "Request failed without an error payload".to_owned()),
            )),
        }
    }
}

/// Page request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// One-based page number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Page metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResponse {
    /// Total matching items
    pub total: u64,
    /// Current page
    pub page: u32,
    /// Items per page
    pub limit: u32,
    /// Whether another page follows
    pub has_next: bool,
}

/// A page of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Page metadata
    pub pagination: PaginationResponse,
}
