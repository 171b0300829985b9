//! Drives the client controller against a live server on an ephemeral port,
//! backed by an in-memory SQLite database.
//!
//! Run with: `cargo test --test client_app_test`
mod common;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::json;

use artfolio::client::api::{ApiClient, ClientError};
use artfolio::client::app::{ClientApp, Fragment};
use artfolio::client::render;
use artfolio::client::session::{self, SessionStore};
use artfolio::client::view::{Control, Navigation, Page};
use artfolio::handlers;
use artfolio::models::members::RegisterMember;
use artfolio::models::portfolio::{CreatePortfolio, PriceFilter};

/// Serves the client's `config.json`, pointing at the server that answered.
async fn client_config(req: HttpRequest) -> HttpResponse {
    let addr = req.app_config().local_addr();
    HttpResponse::Ok().json(json!({
        "SERVER_URL": format!("http://{}", addr.ip()),
        "SERVER_PORT": addr.port(),
    }))
}

/// Start the API on 127.0.0.1 with a fresh database; returns its base URL.
async fn start_server() -> (String, ServerHandle) {
    let db = common::test_db().await;
    let jwt_settings = web::Data::new(common::jwt_settings());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(db.clone()))
            .app_data(jwt_settings.clone())
            .configure(handlers::init_routes)
            .route("/config.json", web::get().to(client_config))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind test server");

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    (format!("http://{addr}"), handle)
}

fn registration(username: &str) -> RegisterMember {
    RegisterMember {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: common::PASSWORD.to_string(),
        about: Some("Works in oils".to_string()),
        location: Some("Dunedin".to_string()),
        website: None,
    }
}

fn artwork(title: &str, price: f64) -> CreatePortfolio {
    CreatePortfolio {
        title: title.to_string(),
        description: format!("{title} description"),
        image: format!("https://img.example.com/{title}.png"),
        category: "painting".to_string(),
        price,
        member_id: None,
    }
}

/// Register and log in `username`, starting from the config file.
async fn logged_in_app(base_url: &str, username: &str) -> ClientApp {
    let mut app = ClientApp::start(&format!("{base_url}/config.json"), SessionStore::new())
        .await
        .expect("client should start");
    app.register(&registration(username)).await.unwrap();
    app.login(username, common::PASSWORD).await.unwrap();
    app
}

#[actix_web::test]
async fn test_start_reads_config_and_loads_feed() {
    let (base_url, server) = start_server().await;

    let app = ClientApp::start(&format!("{base_url}/config.json"), SessionStore::new())
        .await
        .expect("client should start");

    assert_eq!(app.view().page(), Page::Landing);
    assert_eq!(app.fragment(Fragment::ArtsDeck), Some(""));
    assert!(app.fragment(Fragment::MemberName).is_none());
    assert!(app.view().is_control_visible(Control::Login));

    server.stop(true).await;
}

#[actix_web::test]
async fn test_register_then_login_fills_session() {
    let (base_url, server) = start_server().await;
    let mut app = ClientApp::new(ApiClient::new(&base_url), SessionStore::new());

    let member = app.register(&registration("ada")).await.unwrap();
    assert_eq!(app.view().page(), Page::Login);
    assert!(app.session().is_empty());

    app.login("ada", common::PASSWORD).await.unwrap();

    let store = app.session();
    assert_eq!(store.member_id(), Some(member.id));
    assert_eq!(store.get(session::USERS_NAME), Some("ada"));
    assert_eq!(store.get(session::USER_EMAIL), Some("ada@example.com"));
    assert!(store.token().is_some());

    assert_eq!(app.view().page(), Page::Landing);
    assert!(app.view().is_control_visible(Control::Logout));
    assert_eq!(app.fragment(Fragment::MemberName), Some("<b>ada</b>"));
    assert!(app.take_scroll_request());
    assert!(!app.take_scroll_request());

    server.stop(true).await;
}

#[actix_web::test]
async fn test_failed_login_leaves_session_empty() {
    let (base_url, server) = start_server().await;
    let mut app = ClientApp::new(ApiClient::new(&base_url), SessionStore::new());
    app.register(&registration("bea")).await.unwrap();

    let err = app.login("bea", "wrong-password").await.unwrap_err();
    assert_eq!(err.code(), Some("unauthorized"));
    assert!(app.session().is_empty());
    assert!(!app.view().is_logged_in());

    let err = app.login("nobody", "pw").await.unwrap_err();
    assert_eq!(err.code(), Some("not_found"));

    server.stop(true).await;
}

#[actix_web::test]
async fn test_my_portfolio_page_loads_cards_and_account() {
    let (base_url, server) = start_server().await;
    let mut app = logged_in_app(&base_url, "cleo").await;

    app.navigate(Navigation::ShowMyPortfolio).await.unwrap();
    assert_eq!(app.view().page(), Page::MemberPortfolio);

    let cards = app.fragment(Fragment::MyProjectCards).unwrap();
    assert!(cards.contains(render::NO_PORTFOLIO_MESSAGE));
    let account = app.fragment(Fragment::MemberAccount).unwrap();
    assert!(account.contains("cleo@example.com"));
    assert!(account.contains("Works in oils"));

    app.navigate(Navigation::ShowUpload).await.unwrap();
    app.upload(&artwork("Estuary", 40.0)).await.unwrap();

    app.navigate(Navigation::ShowMyPortfolio).await.unwrap();
    let cards = app.fragment(Fragment::MyProjectCards).unwrap();
    assert!(cards.contains("Estuary"));
    assert!(!cards.contains(render::NO_PORTFOLIO_MESSAGE));

    server.stop(true).await;
}

#[actix_web::test]
async fn test_upload_refreshes_feed_and_filter_replaces_it() {
    let (base_url, server) = start_server().await;
    let mut app = logged_in_app(&base_url, "dora").await;
    app.take_scroll_request();

    app.navigate(Navigation::ShowUpload).await.unwrap();
    let item = app.upload(&artwork("Ridge", 25.0)).await.unwrap();

    assert_eq!(app.view().page(), Page::Landing);
    assert!(app.take_scroll_request());
    let feed = app.fragment(Fragment::ArtsDeck).unwrap();
    assert!(feed.contains("Ridge"));
    assert!(feed.contains(&item.id.to_string()));
    assert!(feed.contains("<b>dora, Dunedin</b>"));

    let matches = app
        .apply_filter(&PriceFilter::parse("10", "50", "painting").unwrap())
        .await
        .unwrap();
    assert_eq!(matches, 1);
    assert!(app.fragment(Fragment::ArtsDeck).unwrap().contains("Ridge"));

    let matches = app
        .apply_filter(&PriceFilter::parse("25", "50", "all").unwrap())
        .await
        .unwrap();
    assert_eq!(matches, 0);
    let feed = app.fragment(Fragment::ArtsDeck).unwrap();
    assert!(feed.contains(render::NO_MATCH_MESSAGE));
    assert!(!feed.contains("Ridge"));

    server.stop(true).await;
}

#[actix_web::test]
async fn test_comments_accumulate_in_thread() {
    let (base_url, server) = start_server().await;
    let mut app = logged_in_app(&base_url, "edna").await;
    let item = app.upload(&artwork("Glacier", 60.0)).await.unwrap();

    app.navigate(Navigation::ViewPortfolio(item.id)).await.unwrap();
    assert_eq!(app.view().page(), Page::ViewMore);
    assert_eq!(app.session().current_portfolio(), Some(item.id));
    assert!(app.fragment(Fragment::ViewMoreArtInfo).unwrap().contains("Glacier"));
    assert!(
        app.fragment(Fragment::ViewMoreComments)
            .unwrap()
            .contains(render::NO_COMMENTS_MESSAGE)
    );

    let tricky = format!("{}? odd", render::NO_COMMENTS_MESSAGE);
    for text in ["first real question", tricky.as_str(), "third"] {
        app.post_comment(text).await.unwrap();
    }

    let thread = app.fragment(Fragment::ViewMoreComments).unwrap();
    assert!(thread.contains("first real question"));
    assert!(thread.contains(&tricky));
    assert!(thread.contains("third"));
    assert_eq!(thread.matches(">You</strong>").count(), 3);

    // A fresh load of the detail shows the same thread.
    app.navigate(Navigation::BackToLanding).await.unwrap();
    assert!(app.session().current_portfolio().is_none());
    app.navigate(Navigation::ViewPortfolio(item.id)).await.unwrap();
    let reloaded = app.fragment(Fragment::ViewMoreComments).unwrap();
    assert_eq!(reloaded.matches(">You</strong>").count(), 3);
    assert!(reloaded.contains("first real question"));

    server.stop(true).await;
}

#[actix_web::test]
async fn test_logout_clears_session_and_reloads_feed() {
    let (base_url, server) = start_server().await;
    let mut app = logged_in_app(&base_url, "fay").await;
    let item = app.upload(&artwork("Canyon", 15.0)).await.unwrap();
    app.navigate(Navigation::ViewPortfolio(item.id)).await.unwrap();

    app.logout().await.unwrap();

    assert!(app.session().is_empty());
    assert!(!app.view().is_logged_in());
    assert_eq!(app.view().page(), Page::Landing);
    assert!(app.view().is_control_visible(Control::SignUp));
    assert!(app.fragment(Fragment::MemberName).is_none());
    assert!(app.fragment(Fragment::ViewMoreComments).is_none());
    assert!(app.fragment(Fragment::ArtsDeck).unwrap().contains("Canyon"));

    app.navigate(Navigation::ShowMyPortfolio).await.unwrap();
    assert_eq!(app.view().page(), Page::Login);

    server.stop(true).await;
}

#[actix_web::test]
async fn test_writes_require_login() {
    let (base_url, server) = start_server().await;
    let mut app = ClientApp::new(ApiClient::new(&base_url), SessionStore::new());

    let err = app.upload(&artwork("Orphan", 5.0)).await.unwrap_err();
    assert!(matches!(err, ClientError::NotLoggedIn));

    let err = app.post_comment("hello").await.unwrap_err();
    assert!(matches!(err, ClientError::NotLoggedIn));

    server.stop(true).await;
}

#[actix_web::test]
async fn test_comment_needs_an_open_portfolio() {
    let (base_url, server) = start_server().await;
    let mut app = logged_in_app(&base_url, "gus").await;

    let err = app.post_comment("hello").await.unwrap_err();
    assert!(matches!(err, ClientError::NoCurrentPortfolio));

    server.stop(true).await;
}
