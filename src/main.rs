use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;

use taskhive::auth::{AuthMiddleware, TokenService};
use taskhive::config::Config;
use taskhive::routes;
use taskhive::store::{TaskStore, UserStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::load().expect("Failed to load configuration");

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    let user_store = web::Data::new(UserStore::new(pool.clone()));
    let task_store = web::Data::new(TaskStore::new(pool.clone()));
    let token_service = web::Data::new(TokenService::new(
        config.jwt.secret.clone(),
        config.jwt.expires_in,
    ));

    let host = config.server.host.clone();
    let port = config.server.port;
    log::info!("Starting server at {}", config.server_url());

    HttpServer::new(move || {
        App::new()
            .app_data(user_store.clone())
            .app_data(task_store.clone())
            .app_data(token_service.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(
                web::scope("")
                    .wrap(AuthMiddleware)
                    .configure(routes::config),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
