//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Each tool definition knows how to create its own route; this module wires
//! them together with their dependencies (the API client and the base-URL
//! state holder).

use rmcp::handler::server::tool::ToolRouter;

use super::client::ApiClient;
use super::definitions::{CashbackTool, GetServersTool, GiftCardsTool, SetBaseUrlTool};
use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: ApiClient) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let mut registry = ToolRegistry::new();
    registry.register(GetServersTool::create_route());
    registry.register(SetBaseUrlTool::create_route(client.state().clone()));
    registry.register(GiftCardsTool::create_route(client.clone()));
    registry.register(CashbackTool::create_route(client));
    registry.into_router()
}
