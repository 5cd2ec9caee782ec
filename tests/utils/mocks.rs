use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

use gamehelper::protocol::{SocketError, Transport};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Transport fed from a scripted list of inbound frames
pub struct MockTransport {
    inbound: VecDeque<String>,
    sent_messages: Arc<RwLock<Vec<String>>>,
    closed: Arc<RwLock<bool>>,
}

/// Handle kept by the test to inspect what the server sent
#[derive(Clone)]
pub struct MockTransportProbe {
    sent_messages: Arc<RwLock<Vec<String>>>,
    closed: Arc<RwLock<bool>>,
}

impl MockTransport {
    pub fn new(inbound: Vec<String>) -> (Self, MockTransportProbe) {
        let sent_messages = Arc::new(RwLock::new(Vec::new()));
        let closed = Arc::new(RwLock::new(false));
        let transport = Self {
            inbound: inbound.into(),
            sent_messages: sent_messages.clone(),
            closed: closed.clone(),
        };
        let probe = MockTransportProbe {
            sent_messages,
            closed,
        };
        (transport, probe)
    }
}

impl MockTransportProbe {
    pub async fn sent_messages(&self) -> Vec<String> {
        self.sent_messages.read().await.clone()
    }

    pub async fn is_closed(&self) -> bool {
        *self.closed.read().await
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send_message(&mut self, message: String) -> Result<(), SocketError> {
        self.sent_messages.write().await.push(message);
        Ok(())
    }

    async fn receive_message(&mut self) -> Result<Option<String>, SocketError> {
        Ok(self.inbound.pop_front())
    }

    async fn close(&mut self) -> Result<(), SocketError> {
        *self.closed.write().await = true;
        Ok(())
    }
}
