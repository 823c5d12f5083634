// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Teacher login and token verification routes.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Result;
use crate::middleware::auth::AuthTeacher;
use crate::AppState;

/// Query parameters for login.
#[derive(Deserialize)]
pub struct LoginParams {
    username: String,
    password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub teacher_name: String,
    pub message: String,
}

/// Authenticate a teacher and return a session token.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LoginParams>,
) -> Result<Json<LoginResponse>> {
    let teacher_name = state
        .teachers
        .authenticate(&params.username, &params.password)
        .map_err(|e| {
            tracing::warn!(username = %params.username, "Login failed");
            e
        })?;

    let token = state.tokens.issue(&params.username)?;

    tracing::info!(username = %params.username, "Teacher logged in");

    Ok(Json(LoginResponse {
        token,
        teacher_name,
        message: "Login successful".to_string(),
    }))
}

#[derive(Serialize)]
pub struct VerifyResponse {
    pub authenticated: bool,
    pub username: String,
    pub teacher_name: String,
}

/// Report the identity behind the supplied token.
///
/// The auth middleware has already validated the token; this handler only
/// resolves the display name.
pub async fn verify(
    State(state): State<Arc<AppState>>,
    Extension(teacher): Extension<AuthTeacher>,
) -> Result<Json<VerifyResponse>> {
    let teacher_name = state.teachers.display_name(&teacher.username)?;

    Ok(Json(VerifyResponse {
        authenticated: true,
        username: teacher.username,
        teacher_name,
    }))
}
