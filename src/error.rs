use thiserror::Error;

use crate::provider::ProviderError;

/// Custom error type for gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Tool input failed shape/type validation. Never reaches the provider.
    #[error("Invalid input for {tool}: {reason}")]
    InvalidInput { tool: String, reason: String },

    /// Dispatch to a name that is not in the registry.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Startup-time registration conflict.
    #[error("Tool '{0}' already registered")]
    DuplicateTool(String),

    /// The provider call failed. `context` names the operation.
    #[error("{context}: {source}")]
    Upstream {
        context: &'static str,
        #[source]
        source: ProviderError,
    },

    /// A tool's output could not be encoded as JSON.
    #[error("Failed to encode {tool} output: {source}")]
    Encode {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl GatewayError {
    pub fn invalid_input(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        GatewayError::InvalidInput {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Returns a closure that wraps a provider failure with operation context.
    ///
    /// ```ignore
    /// provider.search_movies(&query, &filters).await.map_err(GatewayError::upstream("failed to search movies"))?;
    /// ```
    pub fn upstream(context: &'static str) -> impl FnOnce(ProviderError) -> Self {
        move |source| GatewayError::Upstream { context, source }
    }

    /// True when the upstream provider reported that the requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GatewayError::Upstream {
                source: ProviderError::NotFound { .. },
                ..
            }
        )
    }
}
