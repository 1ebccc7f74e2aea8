//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur during tool operations.
///
/// None of these are caught by the tool handlers themselves; they propagate
/// to the transport layer as protocol-level failures. Parameter validation
/// problems are not errors in this sense, they are returned to the caller as
/// a structured payload inside a normal tool result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A path placeholder had no corresponding parameter value.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// The upstream HTTP request failed (network error or non-JSON body).
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// JSON serialization error while building the response envelope.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        McpError::internal_error(err.to_string(), None)
    }
}
