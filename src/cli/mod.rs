//! CLI interface for the TMDB MCP gateway.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::provider::tmdb::DEFAULT_BASE_URL;
use crate::provider::TmdbConfig;

/// TMDB MCP gateway - movie and people lookups for LLM agents
#[derive(Parser)]
#[command(name = "tmdb-mcp", version, about, long_about = None)]
pub struct Cli {
    /// TMDB API key
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Transport mode
    #[arg(long, env = "MCP_MODE", value_enum, default_value_t = Mode::Stdio)]
    pub mode: Mode,

    /// HTTP port (only used in http mode)
    #[arg(long, env = "HTTP_PORT", default_value_t = 8080)]
    pub port: u16,

    /// HTTP bind address (only used in http mode)
    #[arg(long, env = "HTTP_BIND", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,

    /// TMDB API root
    #[arg(long, env = "TMDB_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout for TMDB calls, in seconds
    #[arg(long, env = "TMDB_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

/// How the MCP server talks to its client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Local process pipe (stdin/stdout)
    Stdio,
    /// Network listener (streamable HTTP)
    Http,
}

impl Cli {
    /// Provider settings. Fails when no usable API key was supplied.
    pub fn tmdb_config(&self) -> anyhow::Result<TmdbConfig> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| anyhow::anyhow!("TMDB_API_KEY environment variable is required"))?;

        Ok(TmdbConfig::new(api_key)
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs)))
    }

    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
