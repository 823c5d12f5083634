// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    TokenInvalid,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Activity not found: {0}")]
    NotFound(String),

    #[error("Activity is at maximum capacity")]
    AtCapacity,

    #[error("Student is already signed up")]
    AlreadyEnrolled,

    #[error("Student is not signed up for this activity")]
    NotEnrolled,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Unauthenticated => (StatusCode::UNAUTHORIZED, "authentication_required", None),
            AppError::TokenExpired => (StatusCode::UNAUTHORIZED, "token_expired", None),
            AppError::TokenInvalid => (StatusCode::UNAUTHORIZED, "invalid_token", None),
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "invalid_credentials", None)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            AppError::AtCapacity => (
                StatusCode::BAD_REQUEST,
                "at_capacity",
                Some(self.to_string()),
            ),
            AppError::AlreadyEnrolled => (
                StatusCode::BAD_REQUEST,
                "already_enrolled",
                Some(self.to_string()),
            ),
            AppError::NotEnrolled => (
                StatusCode::BAD_REQUEST,
                "not_enrolled",
                Some(self.to_string()),
            ),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
