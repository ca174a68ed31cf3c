//! Item tools for MCP operations
//!
//! This module provides all item-related tools using the tool registry pattern.
//! Each tool is in its own submodule with dedicated implementation and description.
//!
//! Items sit in groups on a board and may carry sub-items. Mutations answer with
//! a one-line confirmation; reads return the service's envelope as JSON so the
//! caller sees every column value.

pub mod archive;
pub mod create;
pub mod delete;
pub mod get;
pub mod list_in_groups;
pub mod list_subitems;
pub mod move_to_group;
pub mod update;
pub mod update_name;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all item-related tools with the registry
pub fn register_item_tools(registry: &mut ToolRegistry) {
    registry.register(create::CreateItemTool::new());
    registry.register(list_in_groups::ListItemsInGroupsTool::new());
    registry.register(list_subitems::ListSubitemsInItemsTool::new());
    registry.register(update::UpdateItemTool::new());
    registry.register(get::GetItemByIdTool::new());
    registry.register(move_to_group::MoveItemToGroupTool::new());
    registry.register(delete::DeleteItemTool::new());
    registry.register(archive::ArchiveItemTool::new());
    registry.register(update_name::UpdateItemNameTool::new());
}
