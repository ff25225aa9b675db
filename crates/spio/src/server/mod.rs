mod auth;
mod cli;
mod error;
mod handlers;

pub use cli::App;

use crate::config::Config;
use crate::model::OllamaClient;
use crate::prelude::{eprintln, *};
use crate::state::AppState;
use crate::sync::SyncQueue;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use spio_core::auth::mask_secret;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub const SERVICE_NAME: &str = "SPIO OS Backend API";

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = Arc::new(Config::from_args(&global.config)?);

    log::info!("Starting {SERVICE_NAME}...");
    log::info!("AI Model: {}", config.ai_model);
    log::info!("Vault Path: {}", config.vault_dir.display());
    log::info!("API Key: {}", mask_secret(&config.api_key));

    if global.verbose {
        eprintln!("Model endpoint: {}", config.ai_api_url);
        eprintln!("Project root: {}", config.project_root.display());
        eprintln!("Sync command: {}", config.sync_command);
        eprintln!("Allowed origins: {}", app.allowed_origins.join(", "));
        eprintln!();
    }

    let model = Arc::new(OllamaClient::new(&config)?);
    let (queue, worker) = SyncQueue::spawn(config.clone());
    let state = Arc::new(AppState::new(config, model, queue.clone()));

    let app_router = router(state).layer(cors_layer(&app.allowed_origins)?);

    let addr = format!("{}:{}", app.host, app.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Listening on http://{addr}");

    axum::serve(listener, app_router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    // Let syncs already queued for freshly written files finish.
    queue.close();
    worker.join().await;

    Ok(())
}

/// All routes, without middleware.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/v1/generate", post(handlers::generate))
        .route("/v1/chat", post(handlers::chat))
        .route("/v1/sync", post(handlers::sync))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin.trim())
                .map_err(|e| eyre!("Invalid allowed origin '{}': {}", origin, e))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Shutting down"),
        Err(e) => {
            log::error!("Cannot listen for shutdown signal: {e}");
            std::future::pending::<()>().await
        }
    }
}
