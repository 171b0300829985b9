use actix_cors::Cors;
use actix_files::Files;
use actix_web::dev::Service;
use actix_web::{App, HttpServer, web};
use artfolio::auth::middleware::JwtSettings;
use artfolio::config::AppConfig;
use artfolio::{create_pool, handlers, run_migrations};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let db = create_pool(&config.database_url)
        .await
        .map_err(std::io::Error::other)?;
    tracing::info!("Connected to database");

    if config.run_migrations {
        run_migrations(&db).await.map_err(std::io::Error::other)?;
        tracing::info!("Migrations applied");
    }

    let db_data = web::Data::new(db);
    let jwt_settings = web::Data::new(JwtSettings {
        secret: config.jwt_secret.clone(),
        ttl_hours: config.token_ttl_hours,
    });
    let static_dir = config.static_dir.clone();

    let bind_addr = config.bind_addr();
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        let mut app = App::new()
            .wrap(cors)
            .wrap_fn(|req, srv| {
                tracing::info!("{} request for {}", req.method(), req.uri());
                srv.call(req)
            })
            .app_data(db_data.clone())
            .app_data(jwt_settings.clone())
            .configure(handlers::init_routes);

        // The browser client (and its config.json) is served last so API paths win.
        if let Some(dir) = &static_dir {
            app = app.service(Files::new("/", dir).index_file("index.html"));
        }

        app
    })
    .bind(&bind_addr)?
    .run()
    .await
}
