// Public API - what other modules can use
pub use errors::ToolError;
pub use handlers::{parse_arguments, ToolHandler};
pub use registry::ToolRegistry;
pub use types::{ToolDescriptor, ToolName, Validate};

// Internal modules
mod errors;
pub mod handlers;
mod registry;
pub mod schema;
pub mod types;
