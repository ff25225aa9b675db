use super::auth::Authorized;
use super::error::ApiError;
use super::SERVICE_NAME;
use crate::error::Error;
use crate::pipeline;
use crate::state::AppState;
use crate::sync::run_sync;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use spio_core::codegen::{ChatRequest, ChatResult, GenerationRequest, GenerationResult};
use spio_core::sync::SyncReport;
use std::sync::Arc;

pub async fn root() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "ai_model": state.config.ai_model,
        "ai_api_url": state.config.ai_api_url,
        "vault_path": state.config.vault_path,
    }))
}

/// `POST /v1/generate`. Pipeline failures come back as `success: false`.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    _: Authorized,
    Json(request): Json<GenerationRequest>,
) -> Json<GenerationResult> {
    log::info!("Generating code for: {}", request.prompt);

    // Spawned so a client hanging up does not abort a half-finished write.
    let outcome = tokio::spawn(async move {
        pipeline::generate(&state, &request.prompt, request.language).await
    })
    .await
    .unwrap_or_else(|e| Err(Error::Task(e.to_string())));
    if let Err(e) = &outcome {
        log::error!("Generation error: {e}");
    }

    Json(pipeline::generation_result(outcome))
}

/// `POST /v1/chat`.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    _: Authorized,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResult> {
    let result = tokio::spawn(async move { pipeline::chat(&state, &request.message).await })
        .await
        .unwrap_or_else(|e| Err(Error::Task(e.to_string())))
        .unwrap_or_else(|e| {
            log::error!("Chat error: {e}");
            ChatResult::failed(e)
        });

    Json(result)
}

/// `POST /v1/sync`. Waits for the command; invocation failures are 500s.
pub async fn sync(
    State(state): State<Arc<AppState>>,
    _: Authorized,
) -> Result<Json<SyncReport>, ApiError> {
    run_sync(&state.config).await.map(Json).map_err(|e| {
        log::error!("Manual sync failed: {e}");
        ApiError::Internal(e.to_string())
    })
}
