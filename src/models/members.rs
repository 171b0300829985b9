use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `members` table.
///
/// Never serialized directly; convert to [`MemberResponse`] or [`AuthorInfo`]
/// before responding.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    pub password_hash: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub about: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::portfolio::Entity")]
    Portfolios,
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
}

impl Related<super::portfolio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Portfolios.def()
    }
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs (not stored in DB, used for request bodies) ──

/// Body of `POST /registerMember`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterMember {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Body of `POST /loginMember`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginMember {
    pub username: String,
    pub password: String,
}

/// Registration input after validation, with the password already hashed.
#[derive(Debug, Clone)]
pub struct NewMember {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub about: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
}

/// A safe member representation for API responses (never leaks the password hash).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub about: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTimeUtc,
}

impl From<Model> for MemberResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            email: m.email,
            about: m.about,
            location: m.location,
            website: m.website,
            created_at: m.created_at,
        }
    }
}

/// The author fields joined onto portfolios in the public feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorInfo {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub location: Option<String>,
    pub website: Option<String>,
}

impl From<Model> for AuthorInfo {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            location: m.location,
            website: m.website,
        }
    }
}

/// Response of `POST /loginMember`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTimeUtc,
    pub member: MemberResponse,
}
