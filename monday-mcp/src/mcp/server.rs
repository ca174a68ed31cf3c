//! MCP server implementation exposing the Monday.com tools

use crate::config::MondayConfig;
use crate::monday::{MondayApi, MondayClient};
use crate::Result;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

use super::shared_utils::McpErrorHandler;
use super::tool_registry::{ToolContext, ToolRegistry};

const INSTRUCTIONS: &str = "Tools for working with Monday.com boards. Use list-boards to find a board, get-board-groups and get-board-columns to learn its layout, then the item and update tools to read and change its items. Identifiers are Monday.com IDs as strings.";

/// MCP server for the Monday.com tools
#[derive(Clone)]
pub struct McpServer {
    tool_registry: &'static ToolRegistry,
    /// Tool context containing shared state for tool execution
    pub tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a new MCP server talking to the Monday.com API.
    ///
    /// # Arguments
    ///
    /// * `config` - Connection settings, usually from [`MondayConfig::from_env`]
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn new(config: MondayConfig) -> Result<Self> {
        config.validate()?;
        let config = Arc::new(config);
        let client = Arc::new(MondayClient::new(Arc::clone(&config)));
        Ok(Self::with_client(client, config))
    }

    /// Create a server around an existing client, e.g. a mock in tests
    pub fn with_client(client: Arc<dyn MondayApi>, config: Arc<MondayConfig>) -> Self {
        Self {
            tool_registry: ToolRegistry::catalog(),
            tool_context: Arc::new(ToolContext::new(client, config)),
        }
    }

    /// The catalog served by this server
    pub fn tool_registry(&self) -> &ToolRegistry {
        self.tool_registry
    }

    /// Dispatch a tool call without going through the protocol layer
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> Result<CallToolResult> {
        self.tool_registry
            .call_tool(name, arguments, &self.tool_context)
            .await
    }

    fn capabilities() -> ServerCapabilities {
        ServerCapabilities {
            prompts: None,
            tools: Some(ToolsCapability {
                list_changed: Some(false),
            }),
            resources: None,
            logging: None,
            completions: None,
            experimental: None,
        }
    }

    fn implementation() -> Implementation {
        Implementation {
            name: "monday-mcp".into(),
            version: crate::VERSION.into(),
        }
    }
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );

        Ok(InitializeResult {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            instructions: Some(INSTRUCTIONS.into()),
            server_info: Self::implementation(),
        })
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.dispatch(&request.name, request.arguments.unwrap_or_default())
            .await
            .map_err(|e| McpErrorHandler::handle_error(e, &format!("call_tool {}", request.name)))
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Self::implementation(),
            instructions: Some(INSTRUCTIONS.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MondayMcpError;
    use crate::monday::mock::MockMondayClient;
    use crate::test_utils::{arguments, expect_text, test_config};
    use serde_json::json;

    fn server(client: &MockMondayClient) -> McpServer {
        McpServer::with_client(Arc::new(client.clone()), Arc::new(test_config()))
    }

    #[test]
    fn test_server_info_advertises_tools() {
        let info = server(&MockMondayClient::new()).get_info();
        assert_eq!(info.server_info.name, "monday-mcp");
        assert_eq!(info.server_info.version, crate::VERSION);
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = MondayConfig::new("key", "not a url");
        assert!(McpServer::new(config).is_err());
    }

    #[test]
    fn test_serves_whole_catalog() {
        let server = server(&MockMondayClient::new());
        assert_eq!(server.tool_registry().list_tools().len(), 14);
    }

    #[tokio::test]
    async fn test_dispatch_routes_to_tool() {
        let client = MockMondayClient::new();
        let result = server(&client)
            .dispatch("archive-item", arguments(json!({"itemId": "3"})))
            .await
            .unwrap();

        assert_eq!(expect_text(&result, false), "Archived item 3.");
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool() {
        let err = server(&MockMondayClient::new())
            .dispatch("drop-board", serde_json::Map::new())
            .await
            .unwrap_err();
        assert!(matches!(err, MondayMcpError::UnknownTool(_)));
    }
}
