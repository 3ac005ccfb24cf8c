use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde_json::Value;

use medkit_pipeline::InvocationSuccess;
use medkit_tools::{ToolDetail, ToolSummary, all_tools, get_tool};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_tools() -> Json<Vec<ToolSummary>> {
    Json(all_tools().iter().map(|t| t.summary()).collect())
}

pub async fn get_tool_detail(Path(id): Path<String>) -> Result<Json<ToolDetail>, ApiError> {
    let tool = get_tool(&id).ok_or_else(|| ApiError::NotFound(format!("tool not found: {id}")))?;
    Ok(Json(tool.detail()))
}

/// Run one tool on the request body.
pub async fn invoke_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<InvocationSuccess>, ApiError> {
    let Json(input) = body?;
    let success = state.facade.invoke(&id, &input).await?;
    Ok(Json(success))
}
