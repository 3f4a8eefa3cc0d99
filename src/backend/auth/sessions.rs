/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation for user sessions.
 * Tokens are HS256-signed, carry the user id as `sub`, and expire after the
 * configured lifetime (one hour by default).
 */

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Signing and verification keys derived from the configured secret
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenKeys {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Lifetime of the tokens this key set issues
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a JWT token for a user
    pub fn create_token(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp().max(0) as u64;

        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + self.ttl.as_secs(),
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify and decode a JWT token
    ///
    /// Fails for malformed tokens, bad signatures and expired tokens.
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }

    /// Extract user ID from token
    pub fn user_id_from_token(&self, token: &str) -> Result<Uuid, String> {
        let claims = self
            .verify_token(token)
            .map_err(|e| format!("Token verification failed: {}", e))?;
        Uuid::parse_str(&claims.sub).map_err(|e| format!("Invalid user ID in token: {}", e))
    }
}
