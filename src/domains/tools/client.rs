//! Upstream API client.
//!
//! Issues a single HTTP request against the currently configured base URL
//! and wraps the upstream JSON body in the MCP text-content envelope. The
//! upstream shape is passed through verbatim, no schema validation here.

use std::sync::Arc;

use reqwest::{Client, Method, header::CONTENT_TYPE};
use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::debug;

use crate::core::state::UpstreamState;

use super::error::ToolError;

/// Client for the RevROI upstream API.
///
/// Cheap to clone; the underlying connection pool and the base-URL state are
/// shared between clones.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    state: Arc<UpstreamState>,
}

impl ApiClient {
    /// Create a new client reading its base URL from the given state holder.
    pub fn new(state: Arc<UpstreamState>) -> Self {
        Self {
            http: Client::new(),
            state,
        }
    }

    /// The base-URL state holder backing this client.
    pub fn state(&self) -> &Arc<UpstreamState> {
        &self.state
    }

    /// Perform one upstream request and return the JSON body as an envelope.
    ///
    /// The base URL is snapshotted once at call time, so a concurrent
    /// `set_base_url` never redirects an in-flight request. Network failures,
    /// non-JSON bodies and non-2xx statuses all surface as [`ToolError`] and
    /// are left for the transport layer to report.
    pub async fn call(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
        content_type: Option<&str>,
    ) -> Result<CallToolResult, ToolError> {
        let base_url = self.state.base_url().await;
        let url = format!("{base_url}{endpoint}");
        debug!("Upstream request: {} {}", method, url);

        let mut request = self.http.request(method, &url);
        if let Some(ct) = content_type {
            request = request.header(CONTENT_TYPE, ct);
        }
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let data: Value = request.send().await?.json().await?;
        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string(&data)?,
        )]))
    }
}
