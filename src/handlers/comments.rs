use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::auth::authorization::verify_claimed_identity;
use crate::auth::middleware::AuthenticatedMember;
use crate::db::comments as comment_db;
use crate::db::portfolio as portfolio_db;
use crate::error::{ApiError, ApiResult};
use crate::handlers::{JsonOrForm, into_body};
use crate::models::comments::{CreateComment, NewComment};
use crate::models::required;

/// POST /addComment — post a comment on a portfolio (requires authentication).
///
/// The author is the authenticated member; the username is stored alongside the
/// comment so the detail view needs no extra join.
pub async fn add_comment(
    auth_member: AuthenticatedMember,
    db: web::Data<DatabaseConnection>,
    body: JsonOrForm<CreateComment>,
) -> ApiResult<HttpResponse> {
    let input = into_body(body);
    let author = auth_member.0;

    verify_claimed_identity(&author, input.post_by_id, input.post_by_username.as_deref())?;

    if required(&input.content).is_none() {
        return Err(ApiError::InvalidInput("content is required".to_string()));
    }

    let posted = match input.post_date {
        Some(millis) => DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| ApiError::InvalidInput(format!("postDate {millis} is out of range")))?,
        None => Utc::now(),
    };

    let portfolio_id = input.portfolio_id;
    if portfolio_db::get_portfolio_by_id(db.get_ref(), portfolio_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound(format!(
            "Portfolio item {portfolio_id} not found"
        )));
    }

    let comment = comment_db::insert_comment(
        db.get_ref(),
        NewComment {
            portfolio_id,
            post_by_id: author.id,
            post_by_username: author.username,
            posted,
            text: input.content,
        },
    )
    .await?;

    tracing::info!(comment_id = %comment.id, portfolio_id = %portfolio_id, "comment posted");
    Ok(HttpResponse::Created().json(comment))
}
