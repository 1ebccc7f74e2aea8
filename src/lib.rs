//! RevROI MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing the RevROI retailer
//! discount API as tools: discounted gift cards and cashback offers looked
//! up by retailer, plus utilities to inspect the known upstream servers and
//! retarget the upstream base URL at runtime.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, runtime state, the main server
//!   handler, and the stdio transport
//! - **domains::tools**: endpoint templating, the upstream API client, and
//!   the per-tool definitions with their registry/router
//!
//! # Example
//!
//! ```rust,no_run
//! use revroi_mcp_server::{Config, McpServer, core::StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
