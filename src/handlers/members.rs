use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::authorization::verify_account_owner;
use crate::auth::middleware::AuthenticatedMember;
use crate::db::members as member_db;
use crate::error::{ApiError, ApiResult};
use crate::models::members::MemberResponse;

/// GET /allMembers — list every member's public profile.
pub async fn get_members(db: web::Data<DatabaseConnection>) -> ApiResult<HttpResponse> {
    let members = member_db::get_all_members(db.get_ref()).await?;
    let response: Vec<MemberResponse> = members.into_iter().map(MemberResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// GET /myAccountInfo/{account_id} — the caller's own profile (requires authentication).
pub async fn get_account_info(
    auth_member: AuthenticatedMember,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let account_id = path.into_inner();
    verify_account_owner(&auth_member.0, account_id)?;

    let member = member_db::get_member_by_id(db.get_ref(), account_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Member {account_id} not found")))?;

    Ok(HttpResponse::Ok().json(MemberResponse::from(member)))
}
