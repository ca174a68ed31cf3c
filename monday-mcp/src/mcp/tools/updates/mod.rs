//! Update (comment) tools for MCP operations
//!
//! Updates are the comment thread attached to an item. Bodies are HTML as stored
//! by Monday.com and are passed through untouched.

pub mod create;
pub mod list;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all update-related tools with the registry
pub fn register_update_tools(registry: &mut ToolRegistry) {
    registry.register(create::CreateUpdateTool::new());
    registry.register(list::GetItemUpdatesTool::new());
}
