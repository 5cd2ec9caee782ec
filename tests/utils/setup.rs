use serde_json::Value;
use std::sync::Arc;

use gamehelper::{
    protocol::{JsonRpcRequest, MessageHandler},
    Connection, RpcHandler, ToolRegistry,
};

use super::mocks::{MockTransport, MockTransportProbe};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub registry: Arc<ToolRegistry>,
    pub rpc_handler: Arc<RpcHandler>,
}

pub struct TestSetupBuilder {
    registry: Option<ToolRegistry>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self { registry: None }
    }

    #[allow(dead_code)]
    pub fn with_registry(mut self, registry: ToolRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn build(self) -> TestSetup {
        let registry = Arc::new(
            self.registry
                .unwrap_or_else(|| ToolRegistry::standard().expect("standard rules compile")),
        );
        let rpc_handler = Arc::new(RpcHandler::new(registry.clone()));

        TestSetup {
            registry,
            rpc_handler,
        }
    }
}

impl TestSetup {
    /// Sends one request straight to the handler and parses the reply
    pub async fn request(&self, request: JsonRpcRequest) -> Option<Value> {
        let message = serde_json::to_string(&request).unwrap();
        self.rpc_handler
            .handle_message(message)
            .await
            .map(|reply| serde_json::from_str(&reply).unwrap())
    }

    /// Runs a whole session over a scripted transport
    pub async fn run_session(&self, requests: Vec<JsonRpcRequest>) -> MockTransportProbe {
        let frames = requests
            .iter()
            .map(|request| serde_json::to_string(request).unwrap())
            .collect();
        self.run_raw_session(frames).await
    }

    pub async fn run_raw_session(&self, frames: Vec<String>) -> MockTransportProbe {
        let (transport, probe) = MockTransport::new(frames);
        Connection::new(Box::new(transport), self.rpc_handler.clone())
            .run()
            .await
            .expect("session should end cleanly");
        probe
    }
}
