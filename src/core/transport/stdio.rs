//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP. The process opens exactly one
//! connection and keeps it open for its lifetime; the rmcp service layer
//! dispatches inbound tool calls to the server handler.

use rmcp::ServiceExt;
use tracing::info;

use crate::core::McpServer;

use super::{TransportError, TransportResult};

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the client disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
