// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Teacher directory - credential lookup from an external JSON file.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{AppError, Result};
use crate::models::teacher::{TeacherFile, TeacherRecord};

/// Read-only directory of teacher credentials.
///
/// The backing file is re-read on every call rather than cached, so edits
/// to it take effect without a restart. A missing file is not an error:
/// it degrades to "no teachers known". A present-but-malformed file is an
/// error; silently treating a corrupt credential store as empty would turn
/// every login into `InvalidCredentials`.
#[derive(Clone)]
pub struct TeacherDirectory {
    path: PathBuf,
}

impl TeacherDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the directory from disk.
    pub fn load(&self) -> Result<HashMap<String, TeacherRecord>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => {
                tracing::debug!(path = %self.path.display(), "Teachers file not found, directory empty");
                return Ok(HashMap::new());
            }
        };

        let file: TeacherFile = serde_json::from_str(&raw).map_err(|e| {
            AppError::Internal(anyhow::anyhow!(
                "Malformed teachers file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(file.teachers)
    }

    /// Check a username/password pair and return the teacher's display name.
    ///
    /// Comparison is exact plaintext match against the stored credential.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<String> {
        let teachers = self.load()?;

        match teachers.get(username) {
            Some(record) if record.password == password => Ok(record.name.clone()),
            _ => Err(AppError::InvalidCredentials),
        }
    }

    /// Look up a display name, falling back to the username itself when the
    /// record is missing (e.g. the file changed since the token was issued).
    pub fn display_name(&self, username: &str) -> Result<String> {
        Ok(self
            .load()?
            .get(username)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| username.to_string()))
    }
}
