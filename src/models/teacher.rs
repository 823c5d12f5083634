//! Teacher credential records loaded from the external directory file.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One teacher's login credential and display name.
///
/// The password is stored and compared in plaintext for parity with the
/// existing credential file format. Known weakness, not silently changed:
/// hashing here would break every stored credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherRecord {
    pub password: String,
    pub name: String,
}

/// On-disk shape of the teachers file:
/// `{"teachers": {"<username>": {"password": ..., "name": ...}}}`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TeacherFile {
    #[serde(default)]
    pub teachers: HashMap<String, TeacherRecord>,
}
