//! Shared fixtures for the HTTP integration tests.
//!
//! Each test gets its own in-memory SQLite database with every migration applied.
#![allow(dead_code, unused_macros)]

use actix_web::test::TestRequest;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::{Value, json};

use artfolio::auth::middleware::JwtSettings;

pub const TEST_SECRET: &str = "test-secret-at-least-256-bits-long-for-hs256-xxxxxxx";
pub const PASSWORD: &str = "s3cret-pass";

/// A fresh database. A single pooled connection keeps the in-memory database alive
/// and shared across queries.
pub async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    artfolio::run_migrations(&db)
        .await
        .expect("Failed to run migrations");
    db
}

pub fn jwt_settings() -> JwtSettings {
    JwtSettings {
        secret: TEST_SECRET.to_string(),
        ttl_hours: 1,
    }
}

pub fn register_request(username: &str) -> TestRequest {
    TestRequest::post().uri("/registerMember").set_json(json!({
        "username": username,
        "email": format!("{username}@example.com"),
        "password": PASSWORD,
        "location": "Auckland",
        "website": format!("https://{username}.example.com"),
    }))
}

pub fn login_request(username: &str, password: &str) -> TestRequest {
    TestRequest::post()
        .uri("/loginMember")
        .set_json(json!({ "username": username, "password": password }))
}

pub fn portfolio_body(title: &str, price: f64, category: &str) -> Value {
    json!({
        "title": title,
        "description": format!("{title} description"),
        "image": format!("https://img.example.com/{title}.png"),
        "category": category,
        "price": price,
    })
}

pub fn add_portfolio_request(token: &str, body: Value) -> TestRequest {
    TestRequest::post()
        .uri("/addPortfolio")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(body)
}

pub fn add_comment_request(token: &str, body: Value) -> TestRequest {
    TestRequest::post()
        .uri("/addComment")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(body)
}

/// Build the application service with the routes, database and token settings.
macro_rules! test_app {
    ($db:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($db.clone()))
                .app_data(actix_web::web::Data::new(common::jwt_settings()))
                .configure(artfolio::handlers::init_routes),
        )
        .await
    };
}

/// Send a request and return the status with the JSON body.
macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        (status, body)
    }};
}

/// Register and log in `username`; evaluates to `(member_id, token)`.
macro_rules! signed_in {
    ($app:expr, $username:expr) => {{
        let (status, _) = send!($app, common::register_request($username));
        assert_eq!(status, actix_web::http::StatusCode::CREATED);
        let (status, body) = send!($app, common::login_request($username, common::PASSWORD));
        assert_eq!(status, actix_web::http::StatusCode::OK);
        let id: uuid::Uuid = body["member"]["_id"]
            .as_str()
            .expect("login response carries the member id")
            .parse()
            .expect("member id is a uuid");
        let token = body["token"].as_str().expect("token").to_string();
        (id, token)
    }};
}
