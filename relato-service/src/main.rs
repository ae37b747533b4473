use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use sqlx::postgres::PgPoolOptions;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use relato_service::openapi::ApiDoc;
use relato_service::security::jwt;
use relato_service::services::IbgeClient;
use relato_service::{metrics, routes, Config};

async fn health_check(pool: web::Data<sqlx::PgPool>) -> HttpResponse {
    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "relato-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "relato-service"
        })),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {e}");
            eprintln!("ERROR: Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting relato-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    jwt::inicializar_segredo(&config.auth.jwt_secret).map_err(|err| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to initialize JWT secret: {err}"),
        )
    })?;

    // Initialize database connection pool
    let db_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::Other,
                format!("Failed to create database pool: {e}"),
            )
        })?;

    tracing::info!("Database connection pool initialized");

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Migration failed: {e}")))?;

    // IBGE localities gateway client
    let ibge = IbgeClient::new(&config.ibge).map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to build IBGE client: {e}"),
        )
    })?;

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let config_http = config.clone();

    HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in config_http.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        let openapi_doc = ApiDoc::openapi();

        App::new()
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(web::Data::new(ibge.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/openapi.json", openapi_doc.clone()),
            )
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/metrics", web::get().to(metrics::serve_metrics))
            .route("/health", web::get().to(health_check))
            .configure(routes::configurar)
    })
    .bind(&bind_address)?
    .run()
    .await
}
