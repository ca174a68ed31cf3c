//! Model Context Protocol (MCP) server support
//!
//! This module provides the tool catalog, the dispatcher and the MCP server
//! handler that exposes the Monday.com tools.

// Module declarations
pub mod server;
pub mod shared_utils;
pub mod tool_registry;
pub mod tools;


// Re-export commonly used items from submodules
pub use server::McpServer;
pub use tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
