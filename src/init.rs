//! Shared initialization logic for both transports.

use anyhow::Result;
use std::sync::Arc;

use crate::mcp::registry::{tmdb_registry, ToolRegistry};
use crate::provider::{MovieProvider, TmdbClient, TmdbConfig};

/// Application context: the provider handle and the tool registry.
///
/// Built once at startup and shared by every session.
pub struct AppContext {
    pub provider: Arc<dyn MovieProvider>,
    pub registry: Arc<ToolRegistry>,
}

impl AppContext {
    /// Build the production context backed by the TMDB HTTP API.
    pub fn new(config: TmdbConfig) -> Result<Self> {
        tracing::info!("Using TMDB API at {}", config.base_url);
        let client = TmdbClient::new(config)?;
        Self::with_provider(Arc::new(client))
    }

    /// Build a context around any provider (stubs in tests).
    pub fn with_provider(provider: Arc<dyn MovieProvider>) -> Result<Self> {
        let registry = tmdb_registry()?;
        tracing::info!("Registered {} tools", registry.len());
        Ok(Self {
            provider,
            registry: Arc::new(registry),
        })
    }
}
