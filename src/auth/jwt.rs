use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::members;

/// Session token claims.
///
/// The `sub` field is the member's UUID. `username` and `email` are copied in
/// at login so the client can restore its session without another request.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The member UUID.
    pub sub: String,
    /// Token expiration (Unix timestamp).
    pub exp: usize,
    /// Token issued-at (Unix timestamp).
    pub iat: Option<usize>,
    pub username: String,
    pub email: Option<String>,
}

/// A freshly signed token and the instant it stops being accepted.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Claims {
    /// Build claims for `member`, issued at `now` and expiring at `expires_at`.
    pub fn for_member(
        member: &members::Model,
        now: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: member.id.to_string(),
            exp: expires_at.timestamp() as usize,
            iat: Some(now.timestamp() as usize),
            username: member.username.clone(),
            email: Some(member.email.clone()),
        }
    }

    /// Extract the member UUID from the `sub` claim.
    pub fn member_id(&self) -> Result<Uuid, String> {
        Uuid::parse_str(&self.sub).map_err(|e| format!("Invalid UUID in sub claim: {e}"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token lifetime of {0} hours is out of range")]
    InvalidTtl(i64),

    #[error(transparent)]
    Encode(#[from] jsonwebtoken::errors::Error),
}

/// Sign a session token for `member` with HS256, valid for `ttl_hours`.
pub fn issue_token(
    member: &members::Model,
    secret: &str,
    ttl_hours: i64,
) -> Result<IssuedToken, TokenError> {
    let now = Utc::now();
    let expires_at = expiry(now, ttl_hours).ok_or(TokenError::InvalidTtl(ttl_hours))?;

    let claims = Claims::for_member(member, now, expires_at);
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(IssuedToken { token, expires_at })
}

fn expiry(now: DateTime<Utc>, ttl_hours: i64) -> Option<DateTime<Utc>> {
    if ttl_hours <= 0 {
        return None;
    }
    Duration::try_hours(ttl_hours).and_then(|ttl| now.checked_add_signed(ttl))
}

/// Validate an HS256 session token and return the decoded claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, String> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| format!("Token validation failed: {e}"))
}
