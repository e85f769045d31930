use crate::error::GatewayError;
use rmcp::model::{CallToolResult, Content, ErrorCode, ErrorData, IntoContents};
use serde::Serialize;
use std::borrow::Cow;

/// Structured error response for MCP tool calls.
/// Provides error_code + suggestion so the calling agent can correct itself.
#[derive(Debug, Serialize)]
pub struct ToolError {
    pub error_code: String,
    pub message: String,
    pub suggestion: String,
}

impl ToolError {
    /// Wrap as a failed tool result (`is_error = true`).
    pub fn into_call_result(self) -> CallToolResult {
        CallToolResult::error(self.into_contents())
    }
}

impl IntoContents for ToolError {
    fn into_contents(self) -> Vec<Content> {
        let json = serde_json::to_string(&self).unwrap_or_else(|_| self.message.clone());
        vec![Content::text(json)]
    }
}

impl From<&GatewayError> for ToolError {
    fn from(err: &GatewayError) -> Self {
        let message = err.to_string();
        match err {
            GatewayError::InvalidInput { .. } => ToolError {
                error_code: "INVALID_INPUT".into(),
                message,
                suggestion: "Check parameter names and types against the tool's input schema."
                    .into(),
            },
            GatewayError::Upstream { .. } if err.is_not_found() => ToolError {
                error_code: "NOT_FOUND".into(),
                message,
                suggestion: "The ID does not exist on TMDB. Use search_movies or search_person to find a valid ID.".into(),
            },
            GatewayError::Upstream { .. } => ToolError {
                error_code: "UPSTREAM_ERROR".into(),
                message,
                suggestion: "TMDB request failed. Retry later or adjust the request.".into(),
            },
            GatewayError::UnknownTool(_) => ToolError {
                error_code: "UNKNOWN_TOOL".into(),
                message,
                suggestion: "List tools to see the available tool names.".into(),
            },
            GatewayError::DuplicateTool(_) | GatewayError::Encode { .. } => ToolError {
                error_code: "INTERNAL_ERROR".into(),
                message,
                suggestion: "This is a server fault; retrying will not help.".into(),
            },
        }
    }
}

impl From<GatewayError> for ErrorData {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::UnknownTool(name) => ErrorData {
                code: ErrorCode::INVALID_PARAMS,
                message: Cow::Owned(format!("Unknown tool: {}", name)),
                data: Some(serde_json::json!({
                    "tool": name,
                    "suggestion": "List tools to see the available tool names"
                })),
            },
            GatewayError::InvalidInput { tool, reason } => ErrorData {
                code: ErrorCode::INVALID_PARAMS,
                message: Cow::Owned(format!("Invalid input for {}: {}", tool, reason)),
                data: Some(serde_json::json!({ "tool": tool })),
            },
            other => ErrorData {
                code: ErrorCode::INTERNAL_ERROR,
                message: Cow::Owned(other.to_string()),
                data: None,
            },
        }
    }
}
