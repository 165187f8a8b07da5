//! Products API - JSON:API REST server

use std::net::SocketAddr;
use std::time::Duration;

use domain_products::{
    InMemoryProductRepository, PgProductRepository, ProductRepository, ProductService,
};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod api;
mod config;
mod openapi;
mod telemetry;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    telemetry::install_color_eyre();

    let config = Config::from_env()?;
    telemetry::init_tracing(&config.environment);

    match config.database_url.clone() {
        Some(url) => {
            info!("Connecting to PostgreSQL");
            let db = sea_orm::Database::connect(&url).await?;
            info!("Successfully connected to PostgreSQL");
            let service = ProductService::new(PgProductRepository::new(db));
            serve(service, &config).await
        }
        None => {
            info!("DATABASE_URL not set, using the in-memory repository");
            let service = ProductService::new(InMemoryProductRepository::new());
            serve(service, &config).await
        }
    }
}

async fn serve<R: ProductRepository + 'static>(
    service: ProductService<R>,
    config: &Config,
) -> eyre::Result<()> {
    let app = api::routes(service)
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Products API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Products API shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
