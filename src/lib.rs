use std::time::Duration;

use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod documents;
pub mod state;

pub use crate::config::ServerConfig;
pub use crate::state::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::documents::handlers::generate_document,
        crate::documents::handlers::generate_package,
        crate::documents::handlers::view_document,
        crate::documents::handlers::list_kinds
    ),
    components(
        schemas(
            documents::models::GenerateRequest,
            documents::models::PackageRequest,
            documents::models::PackageResponse,
            documents::models::PackageDocument,
            documents::models::ViewLink,
            documents::models::ViewLinkResponse,
            documents::models::FileContent,
            documents::models::FileMetadata,
            documents::models::KindInfo,
            documents::package::PackageFailure,
            documents::kind::DocumentKind,
            ErrorResponse,
        )
    ),
    tags(
        (name = "PDF Service", description = "Citizenship case document generation and view links.")
    ),
    servers(
        (url = "http://127.0.0.1:8080", description = "Local server")
    )
)]
pub struct ApiDoc;

pub async fn run() -> std::io::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    log::info!("Reading PDF templates from {}", config.template_dir.display());
    let bind = (config.host.clone(), config.port);
    let sweep_every = Duration::from_secs(config.cache_sweep_secs);

    let state = AppState::new(config);
    documents::cache::spawn_sweeper(state.cache.clone(), sweep_every);
    let app_state = web::Data::new(state);

    let prometheus = PrometheusMetricsBuilder::new("citizenship_docs_server")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to create Prometheus metrics middleware: {e}")))?;

    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:5173")
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:8080")
            .allowed_origin("http://127.0.0.1:8080")
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .expose_headers(vec![header::CONTENT_DISPOSITION])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .wrap(cors)
            .app_data(app_state.clone())
            .service(web::scope("/api").configure(documents::handlers::config))
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()))
    })
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind(bind)?
    .run()
    .await
}
