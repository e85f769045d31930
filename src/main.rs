//! tmdb-mcp - MCP gateway for The Movie Database
//!
//! Usage:
//!   TMDB_API_KEY=... tmdb-mcp                       Serve MCP on stdio
//!   TMDB_API_KEY=... tmdb-mcp --mode http --port 8080   Serve MCP over HTTP at /mcp
//!   tmdb-mcp --help                                 Show all options

use anyhow::Result;
use clap::Parser;

use tmdb_mcp::cli::{Cli, Mode};
use tmdb_mcp::init::AppContext;
use tmdb_mcp::mcp::server::{run_http_server, run_stdio_server};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Tracing to stderr (safe for MCP stdio transport)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tmdb_mcp=info".parse()?),
        )
        .init();

    let ctx = AppContext::new(cli.tmdb_config()?)?;

    match cli.mode {
        Mode::Stdio => {
            tracing::info!("Starting in stdio mode (local)");
            run_stdio_server(ctx).await?;
        }
        Mode::Http => {
            let addr = cli.http_addr();
            tracing::info!("Starting in HTTP mode (remote) on {}", addr);
            run_http_server(ctx, addr).await?;
        }
    }

    Ok(())
}
