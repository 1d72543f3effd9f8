use axum::{Router, http::header, routing::get};
use groupease::{
    InMemoryDirectory, InMemoryGroupStore, InMemoryLogging,
    api::{
        handlers::{AppState, api_routes},
        openapi::ApiDoc,
    },
    auth::jwt::JwtService,
    config::CONFIG,
    core::services::GroupPolicy,
    infrastructure::seed::Seed,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&CONFIG.log_level)))
        .init();
    info!("Starting with {:?}", *CONFIG);

    let directory = InMemoryDirectory::new();
    if let Some(path) = &CONFIG.seed_file {
        Seed::from_file(path).await?.apply(&directory).await?;
    }

    let state = AppState {
        policy: Arc::new(GroupPolicy::new(directory, InMemoryGroupStore::new(), InMemoryLogging::new())),
        jwt: Arc::new(JwtService::new(CONFIG.jwt_secret.clone())),
    };

    let app = Router::new()
        .route("/", get(|| async { "OK" }))
        .nest("/api", api_routes(state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(CONFIG.request_timeout_secs)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([http::Method::GET, http::Method::POST, http::Method::PUT])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
