//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, runtime state, server lifecycle
//! management, and the transport layer.

pub mod config;
pub mod error;
pub mod server;
pub mod state;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use state::UpstreamState;
pub use transport::StdioTransport;
