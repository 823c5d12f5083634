// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use mergington_api::config::Config;
use mergington_api::models::Activity;
use mergington_api::routes::create_router;
use mergington_api::services::{ActivityRegistry, TeacherDirectory, TokenService};
use mergington_api::AppState;
use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

/// Teachers file fixture used across integration tests.
pub const TEACHERS_JSON: &str = r#"{
    "teachers": {
        "ms_martinez": {"password": "chess-rocks", "name": "Ms. Martinez"},
        "mr_chen": {"password": "art4ever", "name": "Mr. Chen"}
    }
}"#;

/// Registry fixture: Chess Club is full (capacity 2), Art Club has room.
#[allow(dead_code)]
pub fn test_registry() -> ActivityRegistry {
    let mut activities = HashMap::new();
    activities.insert(
        "Chess Club".to_string(),
        Activity::new("Chess", "Fridays, 3:30 PM - 5:00 PM", 2)
            .with_participants(&["a@x.edu", "b@x.edu"]),
    );
    activities.insert(
        "Art Club".to_string(),
        Activity::new("Art", "Thursdays, 3:30 PM - 5:00 PM", 15)
            .with_participants(&["amelia@mergington.edu"]),
    );
    ActivityRegistry::new(activities)
}

/// Create a test app backed by a temp teachers file and the fixture registry.
///
/// Returns the router, the JWT signing key, and the temp file guard (the
/// file is deleted when the guard drops, so keep it alive for the test).
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Vec<u8>, tempfile::NamedTempFile) {
    let mut teachers_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    teachers_file
        .write_all(TEACHERS_JSON.as_bytes())
        .expect("Failed to write teachers fixture");

    let config = Config {
        teachers_file: teachers_file.path().to_string_lossy().into_owned(),
        ..Config::default()
    };
    let signing_key = config.jwt_signing_key.clone();

    let state = Arc::new(AppState {
        teachers: TeacherDirectory::new(teachers_file.path()),
        registry: test_registry(),
        tokens: TokenService::new(&signing_key),
        config,
    });

    (create_router(state), signing_key, teachers_file)
}
