//! Error handling
//!
//! Defines all application error types and their conversion into HTTP
//! responses using the uniform `{success, data, message, error}` envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Main application errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{message}")]
    LimitExceeded {
        code: &'static str,
        limit: i64,
        current: i64,
        message: String,
    },

    #[error("Insufficient stock for '{part}': requested {requested}, available {available}")]
    InsufficientStock {
        part: String,
        requested: i64,
        available: i64,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Hash error: {0}")]
    Hash(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error body serialized into the response envelope
#[derive(Debug, serde::Serialize)]
struct ErrorBody {
    success: bool,
    data: Option<serde_json::Value>,
    message: String,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl ErrorBody {
    fn new(code: &str, message: String, details: Option<serde_json::Value>) -> Self {
        Self {
            success: false,
            data: None,
            message,
            error: code.to_string(),
            details,
        }
    }
}

/// Internal error detail is only surfaced in development mode
fn is_development() -> bool {
    std::env::var("ENVIRONMENT")
        .map(|e| e == "development")
        .unwrap_or(true)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                let details = is_development().then(|| json!({ "sql_error": e.to_string() }));
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(
                        "DB_ERROR",
                        "An error occurred while accessing the database".to_string(),
                        details,
                    ),
                )
            }

            AppError::Validation(e) => {
                tracing::warn!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody::new(
                        "VALIDATION_ERROR",
                        "The provided data is invalid".to_string(),
                        Some(json!(e)),
                    ),
                )
            }

            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody::new("BAD_REQUEST", msg, None),
                )
            }

            AppError::LimitExceeded {
                code,
                limit,
                current,
                message,
            } => {
                tracing::warn!("Limit exceeded ({}): current {} / limit {}", code, current, limit);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody::new(
                        code,
                        message,
                        Some(json!({ "limit": limit, "current": current })),
                    ),
                )
            }

            AppError::InsufficientStock {
                part,
                requested,
                available,
            } => {
                tracing::warn!(
                    "Insufficient stock for '{}': requested {}, available {}",
                    part,
                    requested,
                    available
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody::new(
                        "INSUFFICIENT_STOCK",
                        format!(
                            "Insufficient stock for '{}': requested {}, available {}",
                            part, requested, available
                        ),
                        Some(json!({ "requested": requested, "available": available })),
                    ),
                )
            }

            AppError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized access: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorBody::new("UNAUTHORIZED", msg, None),
                )
            }

            AppError::Forbidden(msg) => {
                tracing::warn!("Forbidden access: {}", msg);
                (StatusCode::FORBIDDEN, ErrorBody::new("FORBIDDEN", msg, None))
            }

            AppError::NotFound(msg) => {
                tracing::warn!("Resource not found: {}", msg);
                (StatusCode::NOT_FOUND, ErrorBody::new("NOT_FOUND", msg, None))
            }

            AppError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (StatusCode::CONFLICT, ErrorBody::new("CONFLICT", msg, None))
            }

            AppError::Hash(msg) => {
                tracing::error!("Hash error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(
                        "HASH_ERROR",
                        "An error occurred while processing credentials".to_string(),
                        None,
                    ),
                )
            }

            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                let details = is_development().then(|| json!({ "internal_error": msg }));
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(
                        "INTERNAL_ERROR",
                        "An unexpected error occurred".to_string(),
                        details,
                    ),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Typed result for operations that can fail
pub type AppResult<T> = Result<T, AppError>;

/// Helper for not-found errors
pub fn not_found_error(resource: &str, id: impl std::fmt::Display) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Helper for conflict errors
pub fn conflict_error(resource: &str, field: &str, value: &str) -> AppError {
    AppError::Conflict(format!(
        "{} with {} '{}' already exists",
        resource, field, value
    ))
}

/// Helper for bad-request errors
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
