//! Bearer token generation and validation
//!
//! Tokens are HS256-signed JWTs carrying the username as subject and a
//! 30-day expiry. The algorithm is pinned on both the encode and decode
//! sides; a token signed with anything else is rejected outright.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Token encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

/// Claims carried by a bearer token. There are no roles or scopes: a token
/// proves "is this username" and nothing more.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// Issue a signed bearer token for a username.
///
/// The token is not persisted anywhere; it expires `ttl_days` after issuance
/// and cannot be revoked before then.
pub fn issue_token(username: &str, secret: &str, ttl_days: i64) -> Result<String, JwtError> {
    let now = Utc::now();
    let exp = now + Duration::days(ttl_days);

    let claims = Claims {
        sub: username.to_string(),
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| JwtError::EncodingFailed(e.to_string()))
}

/// Verify a bearer token and return its claims.
///
/// Rejects expired tokens, bad signatures, malformed input, tokens signed
/// with a different algorithm, and tokens missing the subject.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => JwtError::TokenExpired,
        _ => JwtError::InvalidToken(e.to_string()),
    })?;

    if token_data.claims.sub.is_empty() {
        return Err(JwtError::InvalidToken("Missing subject".to_string()));
    }

    Ok(token_data.claims)
}
