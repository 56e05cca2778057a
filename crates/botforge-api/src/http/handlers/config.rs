//! Config update handler for the REST API.

use std::time::Instant;

use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Map, Value};

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// PATCH /api/v1/bots/:name/config - Shallow-merge the request body into
/// the stored config and return the merged document.
pub async fn update_config(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(patch): Json<Value>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let patch: Map<String, Value> = match patch {
        Value::Object(map) => map,
        _ => {
            return Err(AppError::Validation(
                "config patch must be a JSON object".to_string(),
            ));
        }
    };

    let merged = state.config_store.update(&name, patch).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(
        Value::Object(merged),
        request_id,
        elapsed,
    )))
}
