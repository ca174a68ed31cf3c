//! Monday.com tools exposed over MCP
//!
//! Tools are grouped by the part of the Monday.com hierarchy they act on. Each
//! tool lives in its own submodule with a `description.md` beside it, defines its
//! typed request, and renders the service's answer as a single text block.
//!
//! - **boards**: list boards, read a board's groups and columns
//! - **items**: create, read, list, update, move, archive and delete items
//! - **updates**: post and read the comments on an item

pub mod boards;
pub mod items;
pub mod updates;

use crate::mcp::tool_registry::ToolRegistry;

/// Register every Monday.com tool with the registry
pub fn register_all_tools(registry: &mut ToolRegistry) {
    items::register_item_tools(registry);
    boards::register_board_tools(registry);
    updates::register_update_tools(registry);
}
