pub mod auth;
pub mod comments;
pub mod members;
pub mod portfolio;

use actix_web::{Either, web};

use crate::error::ApiError;

/// Request body accepted either as JSON or as an urlencoded form.
pub type JsonOrForm<T> = Either<web::Json<T>, web::Form<T>>;

pub fn into_body<T>(payload: JsonOrForm<T>) -> T {
    match payload {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Extractor failures answer with the same JSON error body as handlers.
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::InvalidInput(err.to_string()).into()),
    )
    .app_data(
        web::FormConfig::default()
            .error_handler(|err, _req| ApiError::InvalidInput(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| ApiError::InvalidInput(err.to_string()).into()),
    );

    // ── Account routes ──
    cfg.service(web::resource("/registerMember").route(web::post().to(auth::register_member)));
    cfg.service(web::resource("/loginMember").route(web::post().to(auth::login_member)));
    cfg.service(web::resource("/allMembers").route(web::get().to(members::get_members)));
    cfg.service(
        web::resource("/myAccountInfo/{account_id}")
            .route(web::get().to(members::get_account_info)),
    );

    // ── Portfolio routes ──
    cfg.service(web::resource("/addPortfolio").route(web::post().to(portfolio::add_portfolio)));
    cfg.service(web::resource("/allPortfolios").route(web::get().to(portfolio::get_portfolios)));
    cfg.service(
        web::resource("/myPortfolios/{account_id}")
            .route(web::get().to(portfolio::get_member_portfolios)),
    );
    cfg.service(
        web::resource("/portfoliosAndAuthors")
            .route(web::get().to(portfolio::get_portfolios_with_authors)),
    );
    cfg.service(
        web::resource("/portfolioWithAuthor/{id}")
            .route(web::get().to(portfolio::get_portfolio_detail)),
    );
    cfg.service(
        web::resource("/filterPortfolios/{min_price}/{max_price}/{category}")
            .route(web::get().to(portfolio::filter_portfolios)),
    );

    // ── Comment routes ──
    cfg.service(web::resource("/addComment").route(web::post().to(comments::add_comment)));
}
