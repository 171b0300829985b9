use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::authorization::verify_claimed_identity;
use crate::auth::middleware::AuthenticatedMember;
use crate::db::portfolio as portfolio_db;
use crate::error::{ApiError, ApiResult};
use crate::handlers::{JsonOrForm, into_body};
use crate::models::portfolio::{CreatePortfolio, NewPortfolio, PriceFilter};
use crate::models::required;

/// GET /allPortfolios — list all portfolio items without author info.
pub async fn get_portfolios(db: web::Data<DatabaseConnection>) -> ApiResult<HttpResponse> {
    let items = portfolio_db::get_all_portfolios(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /myPortfolios/{account_id} — portfolio items owned by one member.
///
/// An empty array means the member has not uploaded anything.
pub async fn get_member_portfolios(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let member_id = path.into_inner();
    let items = portfolio_db::get_portfolios_by_member(db.get_ref(), member_id).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /portfoliosAndAuthors — the public feed.
pub async fn get_portfolios_with_authors(
    db: web::Data<DatabaseConnection>,
) -> ApiResult<HttpResponse> {
    let items = portfolio_db::get_portfolios_with_authors(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /portfolioWithAuthor/{id} — one portfolio with author info and comments.
pub async fn get_portfolio_detail(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let detail = portfolio_db::get_portfolio_detail(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Portfolio item {id} not found")))?;

    Ok(HttpResponse::Ok().json(detail))
}

/// GET /filterPortfolios/{min_price}/{max_price}/{category}
///
/// Bounds are exclusive and `all` disables the category filter. No match is an
/// empty array, not an error.
pub async fn filter_portfolios(
    db: web::Data<DatabaseConnection>,
    path: web::Path<(String, String, String)>,
) -> ApiResult<HttpResponse> {
    let (min_price, max_price, category) = path.into_inner();
    let filter =
        PriceFilter::parse(&min_price, &max_price, &category).map_err(ApiError::InvalidInput)?;

    let items = portfolio_db::filter_portfolios(db.get_ref(), &filter).await?;
    tracing::debug!(
        min = filter.min_price,
        max = filter.max_price,
        category = filter.category_segment(),
        matches = items.len(),
        "filtered portfolios"
    );
    Ok(HttpResponse::Ok().json(items))
}

/// POST /addPortfolio — upload an artwork listing (requires authentication).
pub async fn add_portfolio(
    auth_member: AuthenticatedMember,
    db: web::Data<DatabaseConnection>,
    body: JsonOrForm<CreatePortfolio>,
) -> ApiResult<HttpResponse> {
    let input = into_body(body);
    let owner = auth_member.0;

    // Only allow members to upload portfolio items for themselves.
    verify_claimed_identity(&owner, input.member_id, None)?;

    let new_portfolio = validate(input, owner.id)?;

    let item = portfolio_db::insert_portfolio(db.get_ref(), new_portfolio)
        .await
        .map_err(|e| ApiError::from_insert(e, "Title taken already, please try another one"))?;

    tracing::info!(portfolio_id = %item.id, member_id = %owner.id, "portfolio added");
    Ok(HttpResponse::Created().json(item))
}

fn validate(input: CreatePortfolio, member_id: Uuid) -> Result<NewPortfolio, ApiError> {
    let field = |name: &str, value: &str| {
        required(value).ok_or_else(|| ApiError::InvalidInput(format!("{name} is required")))
    };

    if !input.price.is_finite() || input.price < 0.0 {
        return Err(ApiError::InvalidInput(
            "price must be a non-negative number".to_string(),
        ));
    }

    Ok(NewPortfolio {
        title: field("title", &input.title)?,
        description: field("description", &input.description)?,
        image: field("image", &input.image)?,
        category: field("category", &input.category)?,
        price: input.price,
        member_id,
    })
}
