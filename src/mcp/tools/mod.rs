//! Tool handlers. Each tool validates/defaults its input, asks the provider
//! for data, normalizes the result and returns a canonical output.

pub mod movies;
pub mod people;

use std::sync::Arc;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::GatewayError;
use crate::provider::MovieProvider;

pub use movies::{DiscoverMovies, GetMovieDetails, GetRecommendations, GetTrending, SearchMovies};
pub use people::{GetPersonDetails, SearchPerson};

/// A statically typed tool.
#[async_trait]
pub trait Tool: Send + Sync + 'static {
    type Input: DeserializeOwned + JsonSchema + Send;
    type Output: Serialize + JsonSchema + Send;

    const NAME: &'static str;
    /// Shown to the calling agent for tool selection.
    const DESCRIPTION: &'static str;

    async fn run(
        &self,
        provider: &dyn MovieProvider,
        input: Self::Input,
    ) -> Result<Self::Output, GatewayError>;
}

/// Type-erased handler stored in the registry.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Validate raw arguments, run the tool and encode its output.
    ///
    /// Malformed arguments fail with [`GatewayError::InvalidInput`] before the
    /// provider is touched.
    async fn call(&self, provider: &dyn MovieProvider, args: Value)
        -> Result<Value, GatewayError>;
}

/// Adapts a [`Tool`] to [`ToolHandler`].
pub struct TypedHandler<T> {
    tool: T,
}

impl<T: Tool> TypedHandler<T> {
    pub fn new(tool: T) -> Arc<Self> {
        Arc::new(Self { tool })
    }
}

#[async_trait]
impl<T: Tool> ToolHandler for TypedHandler<T> {
    async fn call(
        &self,
        provider: &dyn MovieProvider,
        args: Value,
    ) -> Result<Value, GatewayError> {
        let args = match args {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };
        let input: T::Input = serde_json::from_value(args)
            .map_err(|e| GatewayError::invalid_input(T::NAME, e.to_string()))?;
        let output = self.tool.run(provider, input).await?;
        serde_json::to_value(&output).map_err(|source| GatewayError::Encode {
            tool: T::NAME,
            source,
        })
    }
}

/// JSON schema for `S` as a JSON object, the form MCP tool listings carry.
pub fn schema_object<S: JsonSchema>() -> Arc<serde_json::Map<String, Value>> {
    match serde_json::to_value(schemars::schema_for!(S)) {
        Ok(Value::Object(map)) => Arc::new(map),
        _ => {
            let mut map = serde_json::Map::new();
            map.insert("type".into(), Value::String("object".into()));
            Arc::new(map)
        }
    }
}
