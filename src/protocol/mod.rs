// Public API
pub use handler::RpcHandler;
pub use messages::{
    error_codes, CallToolResult, Content, ContentType, JsonRpcRequest, JsonRpcResponse, Method,
    ServerInfo, ToolCallParams,
};
pub use socket::{
    Connection, LineTransport, MessageHandler, SocketError, StdioTransport, Transport,
};

// Internal modules
mod handler;
mod messages;
mod socket;
