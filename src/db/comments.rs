use sea_orm::*;
use uuid::Uuid;

use crate::models::comments::{self, NewComment};

/// Insert a new comment.
pub async fn insert_comment(
    db: &DatabaseConnection,
    input: NewComment,
) -> Result<comments::Model, DbErr> {
    let new_comment = comments::ActiveModel {
        id: Set(Uuid::new_v4()),
        portfolio_id: Set(input.portfolio_id),
        post_by_id: Set(input.post_by_id),
        post_by_username: Set(input.post_by_username),
        posted: Set(input.posted),
        text: Set(input.text),
    };

    new_comment.insert(db).await
}
