use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::jwt;
use crate::auth::middleware::JwtSettings;
use crate::auth::password::{hash_password, verify_password};
use crate::db::members as member_db;
use crate::error::{ApiError, ApiResult};
use crate::handlers::{JsonOrForm, into_body};
use crate::models::members::{
    LoginMember, LoginResponse, MemberResponse, NewMember, RegisterMember,
};
use crate::models::required;

/// POST /registerMember — create an account.
///
/// Username uniqueness is enforced by the database; the violation is the conflict signal.
pub async fn register_member(
    db: web::Data<DatabaseConnection>,
    body: JsonOrForm<RegisterMember>,
) -> ApiResult<HttpResponse> {
    let input = into_body(body);

    let username = required(&input.username)
        .ok_or_else(|| ApiError::InvalidInput("username is required".to_string()))?;
    let email = required(&input.email)
        .ok_or_else(|| ApiError::InvalidInput("email is required".to_string()))?;
    if input.password.is_empty() {
        return Err(ApiError::InvalidInput("password is required".to_string()));
    }

    let password = input.password;
    let password_hash = web::block(move || hash_password(&password))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let new_member = NewMember {
        username,
        email,
        password_hash,
        about: input.about.as_deref().and_then(required),
        location: input.location.as_deref().and_then(required),
        website: input.website.as_deref().and_then(required),
    };

    let member = member_db::insert_member(db.get_ref(), new_member)
        .await
        .map_err(|e| {
            ApiError::from_insert(e, "Username already taken. Please try another one")
        })?;

    tracing::info!(member_id = %member.id, username = %member.username, "member registered");
    Ok(HttpResponse::Created().json(MemberResponse::from(member)))
}

/// POST /loginMember — check credentials and issue a session token.
pub async fn login_member(
    db: web::Data<DatabaseConnection>,
    jwt_settings: web::Data<JwtSettings>,
    body: JsonOrForm<LoginMember>,
) -> ApiResult<HttpResponse> {
    let input = into_body(body);

    let username = required(&input.username)
        .ok_or_else(|| ApiError::InvalidInput("username is required".to_string()))?;
    if input.password.is_empty() {
        return Err(ApiError::InvalidInput("password is required".to_string()));
    }

    let member = member_db::get_member_by_username(db.get_ref(), &username)
        .await?
        .ok_or_else(|| ApiError::NotFound("Member not found. Please register".to_string()))?;

    let password = input.password;
    let stored_hash = member.password_hash.clone();
    let matches = web::block(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    if !matches {
        tracing::warn!(username = %member.username, "login rejected: wrong password");
        return Err(ApiError::Unauthorized("Not Authorized".to_string()));
    }

    let issued = jwt::issue_token(&member, &jwt_settings.secret, jwt_settings.ttl_hours)
        .map_err(|e| ApiError::Internal(format!("Failed to sign token: {e}")))?;

    tracing::info!(member_id = %member.id, "member logged in");
    Ok(HttpResponse::Ok().json(LoginResponse {
        token: issued.token,
        expires_at: issued.expires_at,
        member: MemberResponse::from(member),
    }))
}
