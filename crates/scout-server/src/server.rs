use axum::{
    routing::get,
    Router, Extension,
};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use anyhow::Result;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::handlers::{filters, health, interpret, interpret_query, AppState, SharedState};

/// Listener and interpretation settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub default_location: Option<String>,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/interpret", get(interpret_query).post(interpret))
        .route("/api/v1/filters", get(filters))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

pub async fn start(config: ServerConfig) -> Result<()> {
    let state = Arc::new(AppState {
        default_location: config.default_location,
    });
    let app = router(state);

    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!("Scout server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
