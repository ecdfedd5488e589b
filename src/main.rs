mod api;
mod config;
mod database;
mod middleware;
mod models;
mod seeds;
mod services;
mod utils;
mod views;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::Config;
use database::MemoryDb;
use services::{BcryptHasher, PlaceholderPassword, UsersScreenService};
use views::ScreenRenderer;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    log::info!("🚀 Starting Users Admin...");

    let db = MemoryDb::new();
    let password = Arc::new(PlaceholderPassword::new(
        config.demo_password.clone(),
        Arc::new(BcryptHasher::new(config.bcrypt_cost)),
    ));

    // 🌱 Seed demo users
    if config.seed_demo_users {
        if let Err(e) = seeds::users_seed::seed_demo_users(&db, &password).await {
            log::error!("❌ Failed to seed demo users: {}", e);
        }
    }

    let service = web::Data::new(UsersScreenService::new(Arc::new(db), password));
    let renderer = ScreenRenderer::new(config.search_debounce_ms)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let renderer = web::Data::new(renderer);

    let bind_address = config.bind_address();
    log::info!("🌐 Server starting on {}", bind_address);
    log::info!("👥 Users screen at: http://{}/users", bind_address);
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", bind_address);

    let cors_origins = config.cors_origins.clone();

    HttpServer::new(move || {
        let cors = cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(service.clone())
            .app_data(renderer.clone())
            .wrap(cors)
            .wrap(middleware::SecurityHeaders)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Users screen
            .configure(api::configure_users)
    })
    .bind(bind_address)?
    .run()
    .await
}
