//! Tools domain module.
//!
//! Everything needed to expose the upstream RevROI API as MCP tools:
//!
//! - `endpoint.rs` - path templating and query-string construction
//! - `client.rs` - the upstream HTTP client
//! - `definitions/` - individual tool implementations (one file per tool)
//! - `registry.rs` - duplicate-safe tool registration
//! - `router.rs` - rmcp ToolRouter builder
//! - `error.rs` - tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define a params struct, `from_args()`, `execute()`, and `create_route()`
//! 3. Export it in `definitions/mod.rs`
//! 4. Register the route in `router.rs`

pub mod client;
pub mod definitions;
pub mod endpoint;
mod error;
mod registry;
pub mod router;

pub use client::ApiClient;
pub use endpoint::parameterize_endpoint;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
