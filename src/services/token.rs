// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Signed teacher session tokens.
//!
//! Tokens are stateless HS256 JWTs carrying the teacher's username and an
//! absolute expiry. There is no revocation list; expiry is the only
//! lifecycle bound.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Token lifetime: 8 hours.
const TOKEN_TTL_SECS: i64 = 8 * 60 * 60;

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Teacher username
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Issues and validates signed session tokens for a fixed signing key.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(signing_key: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(signing_key),
            decoding_key: DecodingKey::from_secret(signing_key),
        }
    }

    /// Create a signed token for an authenticated teacher, expiring in 8 hours.
    pub fn issue(&self, username: &str) -> Result<String> {
        let claims = Claims {
            username: username.to_string(),
            exp: chrono::Utc::now().timestamp() + TOKEN_TTL_SECS,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Token encoding failed: {}", e)))
    }

    /// Verify a token and return the embedded username.
    ///
    /// Distinguishes an expired token from one that fails signature or
    /// payload validation, so callers can report each to the client.
    pub fn validate(&self, token: &str) -> Result<String> {
        let mut validation = Validation::new(Algorithm::HS256);
        // No clock leeway: a token one second past expiry is expired.
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::TokenInvalid,
                }
            })?;

        if token_data.claims.username.is_empty() {
            return Err(AppError::TokenInvalid);
        }

        Ok(token_data.claims.username)
    }
}
