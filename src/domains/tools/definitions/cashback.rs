//! Cashback lookup tool definition.
//!
//! Queries the upstream API for cashback offers, travel rewards, and credit
//! card points for a retailer. The payload is returned verbatim.

use futures::FutureExt;
use reqwest::Method;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;

use super::super::client::ApiClient;
use super::super::endpoint::parameterize_endpoint;
use super::super::error::ToolError;
use super::common::{ValidationIssue, require_string, validation_error_result};

/// Parameters for the cashback lookup tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CashbackParams {
    /// Retailer to look up.
    #[schemars(description = "Retailer identifier (e.g., kohls, target, walmart)")]
    pub retailer: String,
}

impl CashbackParams {
    /// Validate raw tool arguments into typed parameters.
    pub fn from_args(args: &JsonObject) -> Result<Self, Vec<ValidationIssue>> {
        match require_string(args, "retailer") {
            Ok(retailer) => Ok(Self { retailer }),
            Err(issue) => Err(vec![issue]),
        }
    }
}

/// Cashback lookup tool.
pub struct CashbackTool;

impl CashbackTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_cashback_by_retailer";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Retrieves cashback offers, travel rewards, and credit card points for the specified retailer.\nResults include standard cashback percentages, airline/hotel points, and credit card rewards.\n";

    /// Upstream action selecting the cashback listing.
    const ACTION: &'static str = "cashback";

    /// Execute the tool logic.
    pub async fn execute(
        params: CashbackParams,
        client: &ApiClient,
    ) -> Result<CallToolResult, ToolError> {
        info!("Cashback lookup for retailer: {}", params.retailer);

        let mut query = Map::new();
        query.insert("action".to_string(), Value::String(Self::ACTION.to_string()));
        query.insert("hostname".to_string(), Value::String(params.retailer));

        let endpoint = parameterize_endpoint("/", &query)?;
        client.call(&endpoint, Method::GET, None, None).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CashbackParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(client: ApiClient) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let client = client.clone();
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                match CashbackParams::from_args(&args) {
                    Ok(params) => Ok(Self::execute(params, &client).await?),
                    Err(issues) => Ok(validation_error_result(&issues)?),
                }
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::UpstreamState;
    use crate::domains::tools::client::tests::{envelope_text, spawn_upstream};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_execute_queries_cashback_endpoint() {
        let body = r#"{"cashback":[{"rate":"2%","source":"Rakuten"}]}"#;
        let (base, request_line) = spawn_upstream(body).await;
        let client = ApiClient::new(Arc::new(UpstreamState::new(base)));

        let params = CashbackParams {
            retailer: "kohls".to_string(),
        };
        let result = CashbackTool::execute(params, &client).await.unwrap();

        let line = request_line.await.unwrap();
        assert!(line.starts_with("GET /?action=cashback&hostname=kohls "));

        let actual: Value = serde_json::from_str(&envelope_text(&result)).unwrap();
        let expected: Value = serde_json::from_str(body).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_from_args_rejects_numeric_retailer() {
        // Wrong type must surface as a validation payload, not a thrown error.
        let args = serde_json::json!({ "retailer": 123 });
        let issues = CashbackParams::from_args(args.as_object().unwrap()).unwrap_err();
        assert_eq!(issues[0].field, "retailer");

        let result = validation_error_result(&issues).unwrap();
        let rmcp::model::RawContent::Text(text) = &result.content[0].raw else {
            panic!("expected text content");
        };
        let payload: Value = serde_json::from_str(&text.text).unwrap();
        assert_eq!(payload["error"], "Validation error");
        assert_eq!(payload["details"][0]["field"], "retailer");
    }
}
