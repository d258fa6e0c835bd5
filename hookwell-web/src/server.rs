use crate::handlers;
use crate::templates;
use axum::{
    Router as AxumRouter,
    routing::{get, post},
};
use hookwell_core::config::VerifyConfig;
use hookwell_store::HistoryStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tera::Tera;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared state for all handlers.
///
/// The store is constructed once by the composition root and injected
/// here; handlers never reach for a global.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<HistoryStore>,
    pub verify: VerifyConfig,
    pub templates: Arc<Tera>,
}

impl AppState {
    pub fn new(store: Arc<HistoryStore>, verify: VerifyConfig) -> tera::Result<Self> {
        Ok(Self {
            store,
            verify,
            templates: Arc::new(templates::build()?),
        })
    }
}

/// Build the axum router with all routes.
pub fn build_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        // Ingest
        .route("/webhook", post(handlers::ingest::receive_webhook))
        // Browsable UI
        .route("/", get(handlers::ui::index))
        .route("/webhooks/{id}", get(handlers::ui::detail))
        // JSON API
        .route("/api/webhooks", get(handlers::api::list_entries))
        .route("/api/webhooks/{id}", get(handlers::api::get_entry))
        .route("/api/webhooks/{id}/verify", post(handlers::verify::verify_entry))
        // Health
        .route("/health", get(handlers::health::health_check))
        // Static
        .route("/favicon.ico", get(handlers::assets::favicon))
        .route("/static/{*path}", get(handlers::assets::static_asset))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until ctrl-c.
pub async fn start(addr: &str, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state);

    info!(addr = %addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received, stopping");
}
