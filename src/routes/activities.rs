// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity catalog and enrollment routes.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::middleware::auth::AuthTeacher;
use crate::models::Activity;
use crate::AppState;

/// Full catalog snapshot, keyed by activity name.
pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Json<HashMap<String, Activity>> {
    Json(state.registry.list().await)
}

/// Query parameters for signup/unregister.
#[derive(Deserialize)]
pub struct EnrollmentParams {
    email: String,
}

#[derive(Serialize)]
pub struct EnrollmentResponse {
    pub message: String,
}

/// Sign a student up for an activity (teachers only).
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Extension(teacher): Extension<AuthTeacher>,
    Path(name): Path<String>,
    Query(params): Query<EnrollmentParams>,
) -> Result<Json<EnrollmentResponse>> {
    state.registry.enroll(&name, &params.email).await?;

    tracing::info!(
        activity = %name,
        email = %params.email,
        teacher = %teacher.username,
        "Signup"
    );

    Ok(Json(EnrollmentResponse {
        message: format!("Signed up {} for {}", params.email, name),
    }))
}

/// Unregister a student from an activity (teachers only).
pub async fn unregister(
    State(state): State<Arc<AppState>>,
    Extension(teacher): Extension<AuthTeacher>,
    Path(name): Path<String>,
    Query(params): Query<EnrollmentParams>,
) -> Result<Json<EnrollmentResponse>> {
    state.registry.withdraw(&name, &params.email).await?;

    tracing::info!(
        activity = %name,
        email = %params.email,
        teacher = %teacher.username,
        "Unregister"
    );

    Ok(Json(EnrollmentResponse {
        message: format!("Unregistered {} from {}", params.email, name),
    }))
}
