//! Bot lifecycle handlers for the REST API.

use std::time::Instant;

use axum::Json;
use axum::extract::{Path, State};

use botforge_types::bot::{BotCreated, BotDetails, CreateBotRequest};

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/bots - List the names of all bot workspaces.
pub async fn list_bots(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<String>>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let bots = state.bot_service.list().await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(bots, request_id, elapsed)))
}

/// POST /api/v1/bots - Create a new bot workspace.
pub async fn create_bot(
    State(state): State<AppState>,
    Json(body): Json<CreateBotRequest>,
) -> Result<Json<ApiResponse<BotCreated>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let created = state.bot_service.create(&body).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(created, request_id, elapsed)))
}

/// GET /api/v1/bots/:name - Composite view: manifest, plugins, config.
pub async fn inspect_bot(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<BotDetails>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let details = state.inspector.inspect(&name).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(details, request_id, elapsed)))
}

/// DELETE /api/v1/bots/:name - Delete a bot workspace permanently.
pub async fn delete_bot(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    state.bot_service.delete(&name).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    let payload = serde_json::json!({ "name": name, "deleted": true });
    Ok(Json(ApiResponse::success(payload, request_id, elapsed)))
}
