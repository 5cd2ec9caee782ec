// Public API - what other modules can use
pub use handlers::{call_tool, list_tools, router};

// Internal modules
mod handlers;
