use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::comments;
use super::members::AuthorInfo;

/// Category value meaning "do not filter by category".
pub const ALL_CATEGORIES: &str = "all";

/// SeaORM entity for the `portfolios` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolios")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub image: String,
    pub category: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub member_id: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::members::Entity",
        from = "Column::MemberId",
        to = "super::members::Column::Id"
    )]
    Member,
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
}

impl Related<super::members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Body of `POST /addPortfolio`.
///
/// `member_id` is optional: the owner is always the authenticated member, and a
/// supplied id only has to agree with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortfolio {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub member_id: Option<Uuid>,
}

/// Validated portfolio input ready for insertion.
#[derive(Debug, Clone)]
pub struct NewPortfolio {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub price: f64,
    pub member_id: Uuid,
}

/// A portfolio joined with its author's public profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioWithAuthor {
    #[serde(flatten)]
    pub portfolio: Model,
    #[serde(rename = "authorInfo")]
    pub author_info: AuthorInfo,
}

/// A portfolio joined with its author and every comment posted on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDetail {
    #[serde(flatten)]
    pub portfolio: Model,
    #[serde(rename = "authorInfo")]
    pub author_info: AuthorInfo,
    pub comments: Vec<comments::Model>,
}

/// Parsed `/filterPortfolios/{min}/{max}/{category}` segments.
///
/// Both price bounds are exclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceFilter {
    pub min_price: f64,
    pub max_price: f64,
    pub category: Option<String>,
}

impl PriceFilter {
    /// Parse the raw path segments. Returns a message naming the bad segment on failure.
    pub fn parse(min_price: &str, max_price: &str, category: &str) -> Result<Self, String> {
        let min_price = parse_bound("minPrice", min_price)?;
        let max_price = parse_bound("maxPrice", max_price)?;
        let category = match category.trim() {
            "" => return Err("category must not be empty".to_string()),
            ALL_CATEGORIES => None,
            other => Some(other.to_string()),
        };

        Ok(Self {
            min_price,
            max_price,
            category,
        })
    }

    /// Category path segment, `all` when unfiltered.
    pub fn category_segment(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORIES)
    }
}

fn parse_bound(name: &str, raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("{name} must be a number, got '{raw}'")),
    }
}
