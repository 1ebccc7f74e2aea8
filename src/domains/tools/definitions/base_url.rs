//! Base-URL override tool definition.
//!
//! Overwrites the process-wide upstream base URL. The change takes effect on
//! the next API call and is not persisted across restarts.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::core::state::UpstreamState;

use super::super::error::ToolError;
use super::common::{ValidationIssue, json_result, require_string, validation_error_result};

/// Parameters for the set_base_url tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SetBaseUrlParams {
    /// The new base URL.
    #[schemars(description = "The new base URL")]
    pub url: String,
}

impl SetBaseUrlParams {
    /// Validate raw tool arguments into typed parameters.
    pub fn from_args(args: &JsonObject) -> Result<Self, Vec<ValidationIssue>> {
        match require_string(args, "url") {
            Ok(url) => Ok(Self { url }),
            Err(issue) => Err(vec![issue]),
        }
    }
}

/// Base-URL override tool.
pub struct SetBaseUrlTool;

impl SetBaseUrlTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "set_base_url";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Set the base URL for API requests";

    /// Execute the tool logic.
    pub async fn execute(
        params: SetBaseUrlParams,
        state: &UpstreamState,
    ) -> Result<CallToolResult, ToolError> {
        state.set_base_url(params.url.clone()).await;
        info!("Upstream base URL changed to {}", params.url);
        json_result(&json!({ "success": true, "newBaseUrl": params.url }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SetBaseUrlParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(state: Arc<UpstreamState>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let state = state.clone();
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                match SetBaseUrlParams::from_args(&args) {
                    Ok(params) => Ok(Self::execute(params, &state).await?),
                    Err(issues) => Ok(validation_error_result(&issues)?),
                }
            }
            .boxed()
        })
    }
}
