//! Tool registry: the static name → {schemas, handler} table the transport
//! dispatches against.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{JsonObject, Tool as McpTool, ToolAnnotations};
use serde_json::Value;

use crate::error::GatewayError;
use crate::mcp::tools::{
    schema_object, DiscoverMovies, GetMovieDetails, GetPersonDetails, GetRecommendations,
    GetTrending, SearchMovies, SearchPerson, Tool, ToolHandler, TypedHandler,
};
use crate::provider::MovieProvider;

/// One registered tool. Immutable after registration.
#[derive(Clone)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub input_schema: Arc<JsonObject>,
    pub output_schema: Arc<JsonObject>,
    pub handler: Arc<dyn ToolHandler>,
}

impl ToolSpec {
    /// Listing entry published to MCP clients. Every tool only reads remote data.
    pub fn to_mcp_tool(&self) -> McpTool {
        let mut tool = McpTool::new(
            self.name.clone(),
            self.description.clone(),
            self.input_schema.clone(),
        )
        .annotate(
            ToolAnnotations::new()
                .read_only(true)
                .destructive(false)
                .idempotent(true)
                .open_world(true),
        );
        tool.output_schema = Some(self.output_schema.clone());
        tool
    }
}

impl std::fmt::Debug for ToolSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolSpec")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Registry of callable tools, kept in registration order.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolSpec>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under `name`. Fails if the name is already taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Arc<JsonObject>,
        output_schema: Arc<JsonObject>,
        handler: Arc<dyn ToolHandler>,
    ) -> Result<(), GatewayError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(GatewayError::DuplicateTool(name));
        }
        self.index.insert(name.clone(), self.tools.len());
        self.tools.push(ToolSpec {
            name,
            description: description.into(),
            input_schema,
            output_schema,
            handler,
        });
        Ok(())
    }

    /// Register a typed tool, deriving both schemas from its input/output types.
    pub fn register_tool<T: Tool>(&mut self, tool: T) -> Result<(), GatewayError> {
        self.register(
            T::NAME,
            T::DESCRIPTION,
            schema_object::<T::Input>(),
            schema_object::<T::Output>(),
            TypedHandler::new(tool),
        )
    }

    pub fn spec(&self, name: &str) -> Result<&ToolSpec, GatewayError> {
        self.index
            .get(name)
            .map(|&i| &self.tools[i])
            .ok_or_else(|| GatewayError::UnknownTool(name.to_string()))
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<dyn ToolHandler>, GatewayError> {
        self.spec(name).map(|spec| spec.handler.clone())
    }

    /// Resolve `name` and run it against `provider`.
    pub async fn dispatch(
        &self,
        name: &str,
        provider: &dyn MovieProvider,
        args: Value,
    ) -> Result<Value, GatewayError> {
        let handler = self.resolve(name)?;
        handler.call(provider, args).await
    }

    pub fn specs(&self) -> impl Iterator<Item = &ToolSpec> {
        self.tools.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// The seven TMDB tools, registered once at startup.
pub fn tmdb_registry() -> Result<ToolRegistry, GatewayError> {
    let mut registry = ToolRegistry::new();
    registry.register_tool(SearchMovies)?;
    registry.register_tool(GetMovieDetails)?;
    registry.register_tool(GetTrending)?;
    registry.register_tool(SearchPerson)?;
    registry.register_tool(GetPersonDetails)?;
    registry.register_tool(GetRecommendations)?;
    registry.register_tool(DiscoverMovies)?;
    Ok(registry)
}
