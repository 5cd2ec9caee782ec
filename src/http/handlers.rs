use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use crate::protocol::CallToolResult;
use crate::shared::{AppError, AppState};
use crate::tools::{ToolDescriptor, ToolError};

/// Router exposing the tool registry over HTTP
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/tools", get(list_tools))
        .route("/tools/:name", post(call_tool))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTTP handler for listing tools
///
/// GET /tools
/// Returns tool descriptors with their input schemas
#[instrument(name = "list_tools", skip(state))]
pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolDescriptor>> {
    let tools = state.registry.list();
    info!(tool_count = tools.len(), "Tools listed");
    Json(tools)
}

/// HTTP handler for invoking a tool
///
/// POST /tools/{name}
/// Body is the tool's arguments object. Argument failures come back as an
/// `isError` text result, like over the stdio protocol.
#[instrument(name = "call_tool_http", skip(state, arguments))]
pub async fn call_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(arguments): Json<Value>,
) -> Result<Json<CallToolResult>, AppError> {
    match state.registry.call(&name, arguments).await {
        Ok(text) => Ok(Json(CallToolResult::text(text))),
        Err(ToolError::UnknownTool(name)) => {
            Err(AppError::NotFound(format!("Unknown tool: {}", name)))
        }
        Err(ToolError::Internal(_)) => Err(AppError::Internal),
        Err(e) => Ok(Json(CallToolResult::error(e.to_reply_text()))),
    }
}
