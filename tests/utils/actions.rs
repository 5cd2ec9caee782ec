use serde_json::{json, Value};

use gamehelper::protocol::JsonRpcRequest;

use super::setup::TestSetup;

// ============================================================================
// Request Builders
// ============================================================================

pub fn initialize(id: u64) -> JsonRpcRequest {
    JsonRpcRequest::new(
        id,
        "initialize",
        json!({
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {"name": "test-client", "version": "0.0.1"}
        }),
    )
}

pub fn initialized() -> JsonRpcRequest {
    JsonRpcRequest::notification("notifications/initialized")
}

pub fn ping(id: u64) -> JsonRpcRequest {
    JsonRpcRequest::new(id, "ping", Value::Null)
}

pub fn list_tools(id: u64) -> JsonRpcRequest {
    JsonRpcRequest::new(id, "tools/list", Value::Null)
}

pub fn call_tool(id: u64, name: &str, arguments: Value) -> JsonRpcRequest {
    JsonRpcRequest::new(
        id,
        "tools/call",
        json!({ "name": name, "arguments": arguments }),
    )
}

// ============================================================================
// Convenience Action Methods
// ============================================================================

impl TestSetup {
    /// Call a tool over the protocol and return the `result` object
    pub async fn call(&self, name: &str, arguments: Value) -> Value {
        let reply = self
            .request(call_tool(1, name, arguments))
            .await
            .expect("tools/call should be answered");
        assert!(
            reply.get("error").is_none(),
            "tools/call returned a protocol error: {}",
            reply
        );
        reply["result"].clone()
    }
}
