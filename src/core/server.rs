//! MCP Server implementation and lifecycle management.
//!
//! The main server handler implements the MCP protocol by serving the tool
//! router built in `domains/tools/router.rs`. The router owns the shared
//! dependencies: the upstream API client and the base-URL state holder,
//! which is created here from configuration and injected into both the
//! client and the `set_base_url` tool.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};

use crate::domains::tools::{ApiClient, build_tool_router};

use super::config::Config;
use super::state::UpstreamState;

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Runtime-mutable upstream base URL, shared with the tool routes.
    state: Arc<UpstreamState>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let state = Arc::new(UpstreamState::new(config.upstream.base_url.clone()));
        let client = ApiClient::new(state.clone());

        Self {
            tool_router: build_tool_router::<Self>(client),
            config,
            state,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the upstream state holder.
    pub fn state(&self) -> &Arc<UpstreamState> {
        &self.state
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Exposes the RevROI retailer discount API as tools: discounted gift cards \
                 and cashback offers by retailer, plus utilities to list known servers and \
                 change the upstream base URL."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_exposes_all_tools() {
        let server = McpServer::new(Config::default());
        let tools = server.tool_router.list_all();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names.len(), 4);
        assert!(names.contains(&"get_servers"));
        assert!(names.contains(&"set_base_url"));
        assert!(names.contains(&"get_gift-cards_by_retailer"));
        assert!(names.contains(&"get_cashback_by_retailer"));
    }

    #[tokio::test]
    async fn test_server_seeds_state_from_config() {
        let mut config = Config::default();
        config.upstream.base_url = "http://localhost:3000".to_string();
        let server = McpServer::new(config);
        assert_eq!(server.state().base_url().await, "http://localhost:3000");
    }
}
