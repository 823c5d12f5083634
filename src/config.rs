//! Application configuration loaded from environment variables.

use std::env;

/// Development-only fallback signing key. Deployments override this via
/// JWT_SIGNING_KEY; the fallback exists so a checkout runs out of the box.
const DEV_SIGNING_KEY: &str = "mergington-high-school-secret-key-2025";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// JWT signing key for teacher session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
    /// Path to the teacher credentials file
    pub teachers_file: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!!".to_vec(),
            teachers_file: "teachers.json".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
            jwt_signing_key: env::var("JWT_SIGNING_KEY")
                .unwrap_or_else(|_| DEV_SIGNING_KEY.to_string())
                .into_bytes(),
            teachers_file: env::var("TEACHERS_FILE")
                .unwrap_or_else(|_| "teachers.json".to_string()),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
