//! Transport layer for the MCP server.
//!
//! A single transport is supported: standard input/output, the default MCP
//! mode. The transport handles the connection lifecycle and delegates
//! message processing to the server handler.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
