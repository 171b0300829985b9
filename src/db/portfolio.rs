use sea_orm::*;
use uuid::Uuid;

use crate::models::comments;
use crate::models::members::{self, AuthorInfo};
use crate::models::portfolio::{
    self, NewPortfolio, PortfolioDetail, PortfolioWithAuthor, PriceFilter,
};

/// Insert a new portfolio item. A duplicate title surfaces as a unique-constraint `DbErr`.
pub async fn insert_portfolio(
    db: &DatabaseConnection,
    input: NewPortfolio,
) -> Result<portfolio::Model, DbErr> {
    let new_portfolio = portfolio::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        description: Set(input.description),
        image: Set(input.image),
        category: Set(input.category),
        price: Set(input.price),
        member_id: Set(input.member_id),
        created_at: Set(chrono::Utc::now()),
    };

    new_portfolio.insert(db).await
}

/// Fetch all portfolio items, oldest first.
pub async fn get_all_portfolios(db: &DatabaseConnection) -> Result<Vec<portfolio::Model>, DbErr> {
    portfolio::Entity::find()
        .order_by_asc(portfolio::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch all portfolio items owned by a member.
pub async fn get_portfolios_by_member(
    db: &DatabaseConnection,
    member_id: Uuid,
) -> Result<Vec<portfolio::Model>, DbErr> {
    portfolio::Entity::find()
        .filter(portfolio::Column::MemberId.eq(member_id))
        .order_by_asc(portfolio::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch a single portfolio item by ID.
pub async fn get_portfolio_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<portfolio::Model>, DbErr> {
    portfolio::Entity::find_by_id(id).one(db).await
}

/// Fetch every portfolio joined with its author's public fields.
pub async fn get_portfolios_with_authors(
    db: &DatabaseConnection,
) -> Result<Vec<PortfolioWithAuthor>, DbErr> {
    let rows = portfolio::Entity::find()
        .find_also_related(members::Entity)
        .order_by_asc(portfolio::Column::CreatedAt)
        .all(db)
        .await?;

    Ok(with_authors(rows))
}

/// Fetch portfolios priced strictly between the filter bounds, optionally within
/// one category, joined with author info.
pub async fn filter_portfolios(
    db: &DatabaseConnection,
    filter: &PriceFilter,
) -> Result<Vec<PortfolioWithAuthor>, DbErr> {
    let mut condition = Condition::all()
        .add(portfolio::Column::Price.gt(filter.min_price))
        .add(portfolio::Column::Price.lt(filter.max_price));

    if let Some(category) = &filter.category {
        condition = condition.add(portfolio::Column::Category.eq(category.as_str()));
    }

    let rows = portfolio::Entity::find()
        .filter(condition)
        .find_also_related(members::Entity)
        .order_by_asc(portfolio::Column::CreatedAt)
        .all(db)
        .await?;

    Ok(with_authors(rows))
}

/// Fetch one portfolio with its author and all comments on it.
///
/// Returns `None` when the portfolio or its author does not exist.
pub async fn get_portfolio_detail(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<PortfolioDetail>, DbErr> {
    let Some((item, Some(author))) = portfolio::Entity::find_by_id(id)
        .find_also_related(members::Entity)
        .one(db)
        .await?
    else {
        return Ok(None);
    };

    let comments = item
        .find_related(comments::Entity)
        .order_by_asc(comments::Column::Posted)
        .order_by_asc(comments::Column::Id)
        .all(db)
        .await?;

    Ok(Some(PortfolioDetail {
        portfolio: item,
        author_info: AuthorInfo::from(author),
        comments,
    }))
}

/// Drop portfolios without an author row, mirroring an inner join.
fn with_authors(
    rows: Vec<(portfolio::Model, Option<members::Model>)>,
) -> Vec<PortfolioWithAuthor> {
    rows.into_iter()
        .filter_map(|(item, author)| {
            author.map(|author| PortfolioWithAuthor {
                portfolio: item,
                author_info: AuthorInfo::from(author),
            })
        })
        .collect()
}
