use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `comments` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "portfolioID")]
    pub portfolio_id: Uuid,
    #[serde(rename = "postByID")]
    pub post_by_id: Uuid,
    #[serde(rename = "postByUsername")]
    pub post_by_username: String,
    pub posted: DateTimeUtc,
    #[sea_orm(column_type = "Text")]
    pub text: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::portfolio::Entity",
        from = "Column::PortfolioId",
        to = "super::portfolio::Column::Id"
    )]
    Portfolio,
    #[sea_orm(
        belongs_to = "super::members::Entity",
        from = "Column::PostById",
        to = "super::members::Column::Id"
    )]
    Author,
}

impl Related<super::portfolio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Portfolio.def()
    }
}

impl Related<super::members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Body of `POST /addComment`.
///
/// `post_by_id` and `post_by_username` are accepted for compatibility with
/// older clients; when present they must name the authenticated member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    #[serde(rename = "portfolioID")]
    pub portfolio_id: Uuid,
    #[serde(rename = "postByID", default)]
    pub post_by_id: Option<Uuid>,
    #[serde(rename = "postByUsername", default)]
    pub post_by_username: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[serde(rename = "postDate", default)]
    pub post_date: Option<i64>,
    pub content: String,
}

/// Validated comment input ready for insertion.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub portfolio_id: Uuid,
    pub post_by_id: Uuid,
    pub post_by_username: String,
    pub posted: DateTimeUtc,
    pub text: String,
}
