use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use super::messages::{
    error_codes, CallToolResult, InitializeResult, JsonRpcRequest, JsonRpcResponse, Method,
    ServerInfo, ToolCallParams, ToolListResult,
};
use super::socket::MessageHandler;
use crate::tools::ToolRegistry;

/// Answers JSON-RPC requests against the tool registry
pub struct RpcHandler {
    registry: Arc<ToolRegistry>,
    server_info: ServerInfo,
}

impl RpcHandler {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            server_info: ServerInfo::default(),
        }
    }

    /// Handles one parsed request; `None` for notifications.
    #[instrument(skip(self, request), fields(method = %request.method))]
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id.clone() else {
            debug!("Received notification");
            return None;
        };

        let response = match Method::from_str(&request.method) {
            Ok(Method::Initialize) => {
                info!(client_params = %request.params, "Client initializing");
                to_result(id, &InitializeResult::new(self.server_info.clone()))
            }
            Ok(Method::Ping) => JsonRpcResponse::success(id, serde_json::json!({})),
            Ok(Method::ToolsList) => {
                let tools = self.registry.list();
                debug!(tool_count = tools.len(), "Listing tools");
                to_result(id, &ToolListResult { tools })
            }
            Ok(Method::ToolsCall) => self.call_tool(id, request.params).await,
            Err(_) => {
                warn!(method = %request.method, "Unknown method");
                JsonRpcResponse::error(
                    id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("Method not found: {}", request.method),
                )
            }
        };

        Some(response)
    }

    async fn call_tool(&self, id: Value, params: Value) -> JsonRpcResponse {
        let params: ToolCallParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                warn!(error = %e, "Invalid tools/call params");
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("Invalid params: {}", e),
                );
            }
        };

        let result = match self.registry.call(&params.name, params.arguments).await {
            Ok(text) => CallToolResult::text(text),
            Err(e) => CallToolResult::error(e.to_reply_text()),
        };

        to_result(id, &result)
    }
}

fn to_result<T: Serialize>(id: Value, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => {
            error!(error = %e, "Failed to serialize result");
            JsonRpcResponse::error(id, error_codes::INVALID_REQUEST, "Unserializable result")
        }
    }
}

#[async_trait]
impl MessageHandler for RpcHandler {
    async fn handle_message(&self, message: String) -> Option<String> {
        let response = match serde_json::from_str::<Value>(&message) {
            Err(e) => {
                warn!(error = %e, "Failed to parse message");
                Some(JsonRpcResponse::error(
                    Value::Null,
                    error_codes::PARSE_ERROR,
                    format!("Parse error: {}", e),
                ))
            }
            Ok(value) => {
                let id = value.get("id").cloned().unwrap_or(Value::Null);
                match serde_json::from_value::<JsonRpcRequest>(value) {
                    Ok(request) => self.handle_request(request).await,
                    Err(e) => {
                        warn!(error = %e, "Malformed request");
                        Some(JsonRpcResponse::error(
                            id,
                            error_codes::INVALID_REQUEST,
                            format!("Invalid request: {}", e),
                        ))
                    }
                }
            }
        }?;

        match serde_json::to_string(&response) {
            Ok(text) => Some(text),
            Err(e) => {
                error!(error = %e, "Failed to serialize response");
                None
            }
        }
    }
}
