//! Known-servers tool definition.
//!
//! Purely informational: returns the server records advertised by the
//! upstream API description. No network call, independent of the currently
//! configured base URL.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::super::error::ToolError;
use super::common::json_result;

/// A known upstream server record.
#[derive(Debug, Clone, Serialize)]
pub struct ServerRecord {
    pub url: &'static str,
    pub description: &'static str,
}

/// Server records from the upstream API description.
pub const KNOWN_SERVERS: [ServerRecord; 2] = [
    ServerRecord {
        url: "https://revroi.oaroulette.com",
        description: "Production server",
    },
    ServerRecord {
        url: "http://localhost:3000",
        description: "Development server",
    },
];

/// Parameters for the get_servers tool. Takes none.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetServersParams {}

/// Known-servers tool.
pub struct GetServersTool;

impl GetServersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_servers";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get available servers from the Swagger spec";

    /// Execute the tool logic.
    pub fn execute() -> Result<CallToolResult, ToolError> {
        info!("Listing known upstream servers");
        json_result(&KNOWN_SERVERS)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetServersParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |_ctx: ToolCallContext<'_, S>| {
            async move { Ok(Self::execute()?) }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::Value;

    #[test]
    fn test_returns_both_server_records() {
        let result = GetServersTool::execute().unwrap();
        let RawContent::Text(text) = &result.content[0].raw else {
            panic!("expected text content");
        };

        let records: Value = serde_json::from_str(&text.text).unwrap();
        let records = records.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["url"], "https://revroi.oaroulette.com");
        assert_eq!(records[0]["description"], "Production server");
        assert_eq!(records[1]["url"], "http://localhost:3000");
        assert_eq!(records[1]["description"], "Development server");
    }
}
