//! Domain modules organized by bounded context.
//!
//! Currently a single domain: the MCP tools wrapping the RevROI API.

pub mod tools;
