// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer-token authentication middleware.

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Authenticated teacher extracted from a valid token.
#[derive(Debug, Clone)]
pub struct AuthTeacher {
    pub username: String,
}

/// Middleware that requires a valid teacher session token.
///
/// A missing Authorization header is `Unauthenticated`; a present but bad
/// token reports `TokenExpired` or `TokenInvalid` from the token service.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(h) if h.starts_with("Bearer ") => &h[7..],
        _ => return Err(AppError::Unauthenticated),
    };

    let username = state.tokens.validate(token)?;

    request.extensions_mut().insert(AuthTeacher { username });

    Ok(next.run(request).await)
}
