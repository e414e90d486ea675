mod api;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let mongodb_uri = env::var("MONGODB_URI").expect("MONGODB_URI must be set");

    log::info!("🚀 Starting Portfolio Service...");

    // Initialize MongoDB connection (shared by all workers)
    let db = database::MongoDB::new(&mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db.clone());

    log::info!("✅ MongoDB connected successfully");
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    HttpServer::new(move || {
        // Open CORS, same posture as the public status/portfolio frontend expects
        let cors = Cors::permissive();

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi),
            )
            // Status route (unauthenticated)
            .route("/", web::get().to(api::health::server_status))
            .service(
                web::scope("/api/v1")
                    // Auth
                    .route("/register", web::post().to(api::auth::register))
                    .route("/login", web::post().to(api::auth::login))
                    // Projects
                    .route("/projects", web::post().to(api::projects::create_project))
                    .route("/projects", web::get().to(api::projects::get_projects))
                    .route("/projects/{id}", web::get().to(api::projects::get_project))
                    // Skills
                    .route("/skills", web::post().to(api::skills::create_skill))
                    .route("/skills", web::get().to(api::skills::get_skills)),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await?;

    // Server has stopped accepting requests; drain the Mongo pool.
    log::info!("👋 Shutting down, closing MongoDB connections");
    db.shutdown().await;

    Ok(())
}
