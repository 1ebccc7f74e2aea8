//! Runtime-mutable upstream state.
//!
//! The base URL is the only piece of mutable process state. It is owned by
//! the server entry point and injected into the API client and the
//! `set_base_url` tool, so the single-writer assumption is visible at the
//! type level instead of hiding behind a global.

use tokio::sync::RwLock;

/// Holder for the upstream base URL.
///
/// Every API call takes a single atomic snapshot of the URL, so an in-flight
/// call is never redirected by a concurrent `set_base_url`.
#[derive(Debug)]
pub struct UpstreamState {
    base_url: RwLock<String>,
}

impl UpstreamState {
    /// Create a new state holder with the given initial base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: RwLock::new(base_url.into()),
        }
    }

    /// Snapshot of the current base URL.
    pub async fn base_url(&self) -> String {
        self.base_url.read().await.clone()
    }

    /// Overwrite the base URL. Not persisted; resets to the configured
    /// default on process restart.
    pub async fn set_base_url(&self, url: impl Into<String>) {
        *self.base_url.write().await = url.into();
    }
}
