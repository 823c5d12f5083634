// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod registry;
pub mod teachers;
pub mod token;

pub use registry::ActivityRegistry;
pub use teachers::TeacherDirectory;
pub use token::{Claims, TokenService};
