//! Tool Registry - central registration for all tools.
//!
//! Registration failures are isolated per tool: a duplicate name is logged
//! and skipped so one bad tool never prevents the others from registering or
//! aborts startup. The first registration under a name wins.

use std::collections::HashSet;

use rmcp::handler::server::tool::{ToolRoute, ToolRouter};
use tracing::warn;

/// Duplicate-safe collection of tool routes.
pub struct ToolRegistry<S> {
    routes: Vec<ToolRoute<S>>,
    names: HashSet<String>,
}

impl<S> ToolRegistry<S>
where
    S: Send + Sync + 'static,
{
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            names: HashSet::new(),
        }
    }

    /// Register a tool route.
    ///
    /// On failure (currently only a duplicate name) the route is dropped and
    /// a warning is logged with the tool's name and the cause.
    pub fn register(&mut self, route: ToolRoute<S>) {
        let name = route.attr.name.to_string();
        if !self.names.insert(name.clone()) {
            warn!(
                "Failed to register tool {}: a tool with this name is already registered",
                name
            );
            return;
        }
        self.routes.push(route);
    }

    /// Names of all registered tools, in registration order.
    pub fn tool_names(&self) -> Vec<String> {
        self.routes.iter().map(|r| r.attr.name.to_string()).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Consume the registry into an rmcp router.
    pub fn into_router(self) -> ToolRouter<S> {
        self.routes
            .into_iter()
            .fold(ToolRouter::new(), |router, route| router.with_route(route))
    }
}

impl<S> Default for ToolRegistry<S>
where
    S: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
