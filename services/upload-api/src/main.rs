//! Sheetflow Upload Service
//!
//! HTTP front end for the tabular normalization pipeline: multipart file
//! uploads are converted into canonical header/rows tables, plus a small
//! arithmetic endpoint used by the same frontend.

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use sheetflow_utils::{init_logging, AppConfig, CorsConfig};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

mod handlers;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().unwrap_or_else(|_| {
        eprintln!("Failed to load configuration, using defaults");
        AppConfig::default()
    });

    init_logging(&config.logging)?;
    info!("Starting Sheetflow Upload Service");

    let app = create_app(&config);

    let host = config
        .server
        .host
        .parse()
        .with_context(|| format!("invalid server host: {}", config.server.host))?;
    let addr = SocketAddr::new(host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Upload service listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn create_app(config: &AppConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/upload", post(handlers::upload_file))
        .route("/calculate", post(handlers::calculate))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.cors))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.timeout_seconds,
                )))
                .layer(DefaultBodyLimit::max(config.server.max_request_size)),
        )
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server should keep serving, not
            // silently begin graceful shutdown.
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
