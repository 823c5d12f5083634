// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod teacher;

pub use activity::Activity;
pub use teacher::TeacherRecord;
