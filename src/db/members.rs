use sea_orm::*;
use uuid::Uuid;

use crate::models::members::{self, NewMember};

/// Insert a new member. A duplicate username surfaces as a unique-constraint `DbErr`.
pub async fn insert_member(
    db: &DatabaseConnection,
    input: NewMember,
) -> Result<members::Model, DbErr> {
    let new_member = members::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(input.username),
        email: Set(input.email),
        password_hash: Set(input.password_hash),
        about: Set(input.about),
        location: Set(input.location),
        website: Set(input.website),
        created_at: Set(chrono::Utc::now()),
    };

    new_member.insert(db).await
}

/// Fetch all members, oldest first.
pub async fn get_all_members(db: &DatabaseConnection) -> Result<Vec<members::Model>, DbErr> {
    members::Entity::find()
        .order_by_asc(members::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch a single member by ID.
pub async fn get_member_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<members::Model>, DbErr> {
    members::Entity::find_by_id(id).one(db).await
}

/// Fetch a single member by username.
pub async fn get_member_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<members::Model>, DbErr> {
    members::Entity::find()
        .filter(members::Column::Username.eq(username))
        .one(db)
        .await
}
