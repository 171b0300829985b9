use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use sea_orm::DatabaseConnection;
use std::future::Future;
use std::pin::Pin;

use crate::auth::jwt;
use crate::db::members::get_member_by_id;
use crate::error::ApiError;
use crate::models::members;

/// The member behind a valid `Authorization: Bearer <token>` header.
pub struct AuthenticatedMember(pub members::Model);

impl FromRequest for AuthenticatedMember {
    type Error = ApiError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // 1. Extract the Bearer token from the Authorization header.
            let bearer = BearerAuth::extract(&req).await.map_err(|_| {
                ApiError::Unauthorized("Authorization header must be: Bearer <token>".to_string())
            })?;

            // 2. Validate the token against the configured secret.
            let settings = req.app_data::<web::Data<JwtSettings>>().ok_or_else(|| {
                ApiError::Internal("JWT settings not configured".to_string())
            })?;

            let claims = jwt::validate_token(bearer.token(), &settings.secret)
                .map_err(|e| ApiError::Unauthorized(format!("Invalid token: {e}")))?;

            let member_id = claims.member_id().map_err(ApiError::Unauthorized)?;

            // 3. Load the member; a token for a vanished account is worthless.
            let db = req
                .app_data::<web::Data<DatabaseConnection>>()
                .ok_or_else(|| ApiError::Internal("Database not configured".to_string()))?;

            let member = get_member_by_id(db.get_ref(), member_id)
                .await?
                .ok_or_else(|| ApiError::Unauthorized("Member no longer exists".to_string()))?;

            Ok(AuthenticatedMember(member))
        })
    }
}

/// Signing settings for session tokens, stored in Actix app data.
#[derive(Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub ttl_hours: i64,
}
