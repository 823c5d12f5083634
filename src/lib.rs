// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Mergington High School API
//!
//! This crate provides the backend API for viewing and signing up for
//! extracurricular activities. Students are enrolled by teachers, who
//! authenticate with a short-lived signed token.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::{ActivityRegistry, TeacherDirectory, TokenService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub registry: ActivityRegistry,
    pub teachers: TeacherDirectory,
    pub tokens: TokenService,
}
