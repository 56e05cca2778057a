//! Plugin installation handler for the REST API.

use std::time::Instant;

use axum::Json;
use axum::extract::{Path, State};

use botforge_types::plugin::InstalledPlugin;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/bots/:name/plugins/:plugin - Resolve and install a plugin.
pub async fn install_plugin(
    State(state): State<AppState>,
    Path((name, plugin)): Path<(String, String)>,
) -> Result<Json<ApiResponse<InstalledPlugin>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let installed = state.plugin_service.install(&name, &plugin).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(installed, request_id, elapsed)))
}
