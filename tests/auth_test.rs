//! Session token and password hashing tests.
//!
//! Tokens are minted locally with the same HS256 secret the server would use.
//! No running server or database is needed.
//!
//! Run with: `cargo test --test auth_test`
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

use artfolio::auth::jwt::{Claims, TokenError, issue_token, validate_token};
use artfolio::auth::password::{hash_password, verify_password};
use artfolio::models::members;

/// Signing secret used only by these tests.
const TEST_SECRET: &str = "test-secret-at-least-256-bits-long-for-hs256-xxxxxxx";

fn sample_member() -> members::Model {
    members::Model {
        id: Uuid::new_v4(),
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password_hash: "unused".to_string(),
        about: None,
        location: Some("Wellington".to_string()),
        website: None,
        created_at: Utc::now(),
    }
}

#[test]
fn test_issued_token_decodes_correctly() {
    let member = sample_member();
    let issued = issue_token(&member, TEST_SECRET, 24).expect("Token should be issued");

    let claims = validate_token(&issued.token, TEST_SECRET).expect("Token should be valid");

    assert_eq!(claims.member_id().unwrap(), member.id);
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.email.as_deref(), Some("alice@example.com"));
    assert!(issued.expires_at > Utc::now());
}

#[test]
fn test_expired_token_is_rejected() {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        exp: now - 300, // expired 5 minutes ago (well past the 60s default leeway)
        iat: Some(now - 3600),
        username: "expired".to_string(),
        email: None,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let result = validate_token(&token, TEST_SECRET);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("ExpiredSignature"));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let issued = issue_token(&sample_member(), TEST_SECRET, 1).unwrap();

    let result = validate_token(&issued.token, "completely-wrong-secret-xxxxxxxxxxxxxxxxxxx");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("InvalidSignature"));
}

#[test]
fn test_garbage_token_is_rejected() {
    let result = validate_token("not.a.valid.jwt", TEST_SECRET);
    assert!(result.is_err());
}

#[test]
fn test_non_uuid_subject_is_reported() {
    let claims = Claims {
        sub: "not-a-uuid".to_string(),
        exp: usize::MAX,
        iat: None,
        username: "bob".to_string(),
        email: None,
    };

    assert!(claims.member_id().is_err());
}

#[test]
fn test_password_hash_round_trip() {
    let hash = hash_password("correct horse").unwrap();

    assert!(hash.starts_with("$argon2"));
    assert!(verify_password("correct horse", &hash).unwrap());
    assert!(!verify_password("battery staple", &hash).unwrap());
}

#[test]
fn test_same_password_gets_different_salts() {
    let first = hash_password("hunter2").unwrap();
    let second = hash_password("hunter2").unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_malformed_stored_hash_is_an_error() {
    assert!(verify_password("anything", "not-a-phc-string").is_err());
}

#[test]
fn test_huge_token_lifetime_is_an_error() {
    let result = issue_token(&sample_member(), TEST_SECRET, 9_000_000_000_000);
    assert!(matches!(result, Err(TokenError::InvalidTtl(9_000_000_000_000))));

    let result = issue_token(&sample_member(), TEST_SECRET, i64::MAX);
    assert!(matches!(result, Err(TokenError::InvalidTtl(_))));
}

#[test]
fn test_non_positive_token_lifetime_is_an_error() {
    assert!(matches!(
        issue_token(&sample_member(), TEST_SECRET, 0),
        Err(TokenError::InvalidTtl(0))
    ));
    assert!(matches!(
        issue_token(&sample_member(), TEST_SECRET, -5),
        Err(TokenError::InvalidTtl(-5))
    ));
}

#[test]
fn test_expiry_claim_matches_reported_expiry() {
    let issued = issue_token(&sample_member(), TEST_SECRET, 2).unwrap();
    let claims = validate_token(&issued.token, TEST_SECRET).unwrap();

    assert_eq!(claims.exp as i64, issued.expires_at.timestamp());
    assert_eq!(claims.exp - claims.iat.unwrap(), 2 * 3600);
}
