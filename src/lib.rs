// Library crate for the game helper tool server
// This file exposes the public API for integration tests

pub mod analysis;
pub mod combat;
pub mod config;
pub mod http;
pub mod protocol;
pub mod shared;
pub mod tools;

// Re-export commonly used types for easier access in tests
pub use config::{ServerConfig, TransportKind};
pub use protocol::{Connection, MessageHandler, RpcHandler, StdioTransport, Transport};
pub use shared::{AppError, AppState};
pub use tools::{ToolError, ToolName, ToolRegistry};
