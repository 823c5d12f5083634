// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mergington High School API Server
//!
//! Serves the activity catalog and teacher-authenticated enrollment
//! endpoints over HTTP.

use mergington_api::{
    config::Config,
    services::{ActivityRegistry, TeacherDirectory, TokenService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Mergington High School API");

    // Seed the in-memory activity catalog
    let registry = ActivityRegistry::with_default_catalog();
    tracing::info!(count = registry.list().await.len(), "Activity catalog seeded");

    // Teacher credentials live in an external JSON file, re-read per request
    let teachers = TeacherDirectory::new(&config.teachers_file);
    tracing::info!(path = %config.teachers_file, "Teacher directory configured");

    // Token signing/validation uses one key for the process lifetime
    let tokens = TokenService::new(&config.jwt_signing_key);

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        registry,
        teachers,
        tokens,
    });

    // Build router
    let app = mergington_api::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mergington_api=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
