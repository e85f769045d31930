use std::net::SocketAddr;
use std::sync::Arc;

use rmcp::{
    model::*,
    service::RequestContext,
    transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
    },
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::GatewayError;
use crate::init::AppContext;
use crate::mcp::error::ToolError;
use crate::mcp::registry::{ToolRegistry, ToolSpec};
use crate::provider::MovieProvider;

/// Path the streamable HTTP transport is mounted on.
pub const HTTP_MCP_PATH: &str = "/mcp";

/// MCP server exposing the TMDB tool registry.
///
/// Holds no mutable state: the registry is read-only and the provider handle
/// is shared by every in-flight call.
#[derive(Clone)]
pub struct TmdbServer {
    provider: Arc<dyn MovieProvider>,
    registry: Arc<ToolRegistry>,
}

impl TmdbServer {
    pub fn new(provider: Arc<dyn MovieProvider>, registry: Arc<ToolRegistry>) -> Self {
        Self { provider, registry }
    }

    /// Create server from shared AppContext.
    pub fn from_context(ctx: &AppContext) -> Self {
        Self::new(ctx.provider.clone(), ctx.registry.clone())
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Dispatch one tool call.
    ///
    /// Unknown tools are protocol errors. Invalid input and provider failures
    /// come back as an `is_error` tool result carrying a [`ToolError`] payload.
    #[instrument(name = "mcp.call_tool", skip(self, name, arguments), fields(tool = %name))]
    pub async fn call_tool_by_name(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let args = arguments.map(Value::Object).unwrap_or(Value::Null);
        match self
            .registry
            .dispatch(name, self.provider.as_ref(), args)
            .await
        {
            Ok(output) => {
                debug!(results = result_count(&output), "tool call succeeded");
                Ok(CallToolResult::structured(output))
            }
            Err(err @ GatewayError::UnknownTool(_)) => {
                warn!(error = %err, "unknown tool");
                Err(err.into())
            }
            Err(err) => {
                warn!(error = %err, "tool call failed");
                Ok(ToolError::from(&err).into_call_result())
            }
        }
    }
}

/// Items in a tool payload: the `results` length for list envelopes, one for
/// the single-record envelopes.
fn result_count(output: &Value) -> usize {
    output
        .get("results")
        .and_then(Value::as_array)
        .map_or(1, Vec::len)
}

impl ServerHandler for TmdbServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "tmdb-api".to_string(),
                title: Some("TMDB Movie Database".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"# TMDB Movie Database

Read-only access to The Movie Database (TMDB).

## Movies
- search_movies: Find a movie by title; returns its ID
- get_movie_details: Runtime, budget, revenue, genres, tagline (needs a movie ID)
- get_trending: Today's or this week's trending movies
- get_recommendations: Movies similar to one the user liked (needs a movie ID)
- discover_movies: Filter by genre, year, minimum rating, sort order

## People
- search_person: Find an actor/director by name; returns their ID
- get_person_details: Biography and filmography (needs a person ID)

## Key Patterns
- IDs come from a prior search: search_movies → get_movie_details / get_recommendations
- search_person → get_person_details
- Lists return at most 20 entries
"#
            .to_string()),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(
            self.registry.specs().map(ToolSpec::to_mcp_tool).collect(),
        ))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.call_tool_by_name(&request.name, request.arguments)
            .await
    }
}

/// Serve MCP over stdin/stdout until the peer disconnects or Ctrl-C.
pub async fn run_stdio_server(ctx: AppContext) -> anyhow::Result<()> {
    let server = TmdbServer::from_context(&ctx);

    tracing::info!("Starting TMDB MCP server v{}", env!("CARGO_PKG_VERSION"));

    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let service = server.serve(transport).await?;
    tracing::info!(
        "MCP server listening on stdio ({} tools)",
        ctx.registry.len()
    );

    tokio::select! {
        result = service.waiting() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }
    tracing::info!("MCP server shutting down");
    Ok(())
}

/// Serve MCP over streamable HTTP at [`HTTP_MCP_PATH`] until Ctrl-C.
pub async fn run_http_server(ctx: AppContext, addr: SocketAddr) -> anyhow::Result<()> {
    let server = TmdbServer::from_context(&ctx);

    tracing::info!("Starting TMDB MCP server v{}", env!("CARGO_PKG_VERSION"));

    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );
    let router = axum::Router::new().nest_service(HTTP_MCP_PATH, service);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "MCP server listening on http://{}{} ({} tools)",
        listener.local_addr()?,
        HTTP_MCP_PATH,
        ctx.registry.len()
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutdown signal received");
        })
        .await?;

    tracing::info!("MCP server shutting down");
    Ok(())
}
