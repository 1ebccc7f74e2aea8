//! Gift-card lookup tool definition.
//!
//! Queries the upstream API for discounted gift cards available for a
//! retailer. The upstream sorts results by discount rate descending; the
//! payload is returned verbatim, neither re-verified nor re-sorted here.

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

/// Parameters for the gift-card lookup tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GiftCardsParams {
    /// Retailer to look up.
    #[schemars(description = "Retailer identifier (e.g., kohls, target, walmart)")]
    pub retailer: String,
}

impl GiftCardsParams {
    /// Validate raw tool arguments into typed parameters.
    pub fn from_args(args: &JsonObject) -> Result<Self, Vec<ValidationIssue>> {
        match require_string(args, "retailer") {
            Ok(retailer) => Ok(Self { retailer }),
            Err(issue) => Err(vec![issue]),
        }
    }
}

/// Gift-card lookup tool.
pub struct GiftCardsTool;

impl GiftCardsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_gift-cards_by_retailer";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Retrieves available discounted gift card options for the specified retailer.\nResults are sorted by discount rate with the highest discounts first.\n";

    /// Upstream action selecting the gift-card listing.
    const ACTION: &'static str = "gift_cards";

    /// Execute the tool logic.
    pub async fn execute(
        params: GiftCardsParams,
        client: &ApiClient,
    ) -> Result<CallToolResult, ToolError> {
        info!("Gift-card lookup for retailer: {}", params.retailer);

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
            input_schema: cached_schema_for_type::<GiftCardsParams>(),
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
                match GiftCardsParams::from_args(&args) {
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
    async fn test_execute_queries_gift_cards_endpoint() {
        let body = r#"[{"card_value":50,"discount":8.2}]"#;
        let (base, request_line) = spawn_upstream(body).await;
        let client = ApiClient::new(Arc::new(UpstreamState::new(base)));

        let params = GiftCardsParams {
            retailer: "target".to_string(),
        };
        let result = GiftCardsTool::execute(params, &client).await.unwrap();

        let line = request_line.await.unwrap();
        assert!(line.starts_with("GET /?action=gift_cards&hostname=target "));

        let actual: Value = serde_json::from_str(&envelope_text(&result)).unwrap();
        let expected: Value = serde_json::from_str(body).unwrap();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_execute_percent_encodes_retailer() {
        let (base, request_line) = spawn_upstream("[]").await;
        let client = ApiClient::new(Arc::new(UpstreamState::new(base)));

        let params = GiftCardsParams {
            retailer: "a b&c".to_string(),
        };
        GiftCardsTool::execute(params, &client).await.unwrap();

        let line = request_line.await.unwrap();
        assert!(line.starts_with("GET /?action=gift_cards&hostname=a%20b%26c "));
    }

    #[test]
    fn test_from_args_rejects_numeric_retailer() {
        let args = serde_json::json!({ "retailer": 123 });
        let issues = GiftCardsParams::from_args(args.as_object().unwrap()).unwrap_err();
        assert_eq!(issues[0].field, "retailer");
    }
}
