//! Markdown-to-HTML conversion tool definition.
//!
//! A thin proxy over the OpenRouter chat-completions API.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::config::Config;

use super::super::common::{error_result, structured_result};
use super::common::{OPENROUTER_ENDPOINT, chat_completion, strip_code_fence};

const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

const SYSTEM_PROMPT: &str = "You are a Markdown to HTML converter. Convert the user's Markdown \
     into clean, semantic HTML5 body markup. Preserve the document structure, use semantic \
     elements where they fit, and return only the HTML with no explanations and no code fences.";

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the Markdown conversion tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MarkdownHtmlParams {
    /// The Markdown source to convert.
    #[schemars(description = "Markdown source text")]
    pub markdown: String,

    /// Model override (default: openai/gpt-4o-mini).
    #[serde(default)]
    #[schemars(description = "Optional OpenRouter model id (default: openai/gpt-4o-mini)")]
    pub model: Option<String>,
}

// ============================================================================
// Structured Output
// ============================================================================

/// Conversion result.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct MarkdownHtmlResult {
    pub model: String,
    pub html: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Markdown-to-HTML tool - OpenRouter proxy.
pub struct MarkdownHtmlTool;

impl MarkdownHtmlTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "ai_markdown_html";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Convert Markdown to clean semantic HTML via the OpenRouter API. Requires WEBTOOLS_OPENROUTER_API_KEY to be configured.";

    /// Execute the tool logic. Performs a blocking HTTP request; run it on a
    /// dedicated thread.
    #[instrument(skip_all, fields(bytes = params.markdown.len()))]
    pub fn execute(params: &MarkdownHtmlParams, config: &Config) -> CallToolResult {
        let Some(api_key) = config.credentials.openrouter_api_key.as_deref() else {
            return error_result(
                "OpenRouter API key not configured (set WEBTOOLS_OPENROUTER_API_KEY)",
            );
        };

        if params.markdown.trim().is_empty() {
            return error_result("markdown must not be empty");
        }

        let model = params.model.as_deref().unwrap_or(DEFAULT_MODEL);
        info!("Converting {} bytes of Markdown via {}", params.markdown.len(), model);

        let html = match chat_completion(
            OPENROUTER_ENDPOINT,
            api_key,
            model,
            SYSTEM_PROMPT,
            &params.markdown,
        ) {
            Ok(content) => strip_code_fence(&content).to_string(),
            Err(e) => return error_result(&format!("Markdown conversion failed: {}", e)),
        };

        let summary = format!("Converted {} bytes of Markdown via {}", params.markdown.len(), model);
        structured_result(
            summary,
            MarkdownHtmlResult {
                model: model.to_string(),
                html,
            },
        )
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let params: MarkdownHtmlParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid parameters: {}", e))?;

        // reqwest::blocking creates its own runtime; a separate OS thread keeps
        // it off the server's executor.
        let handle = std::thread::spawn(move || Self::execute(&params, &config));
        let result = handle
            .join()
            .map_err(|_| "Thread panicked during Markdown conversion".to_string())?;

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<MarkdownHtmlParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: MarkdownHtmlParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                // Dedicated thread: reqwest::blocking must not run on the
                // async executor.
                let handle = std::thread::spawn(move || Self::execute(&params, &config));
                handle
                    .join()
                    .map_err(|_| McpError::internal_error("Thread panicked".to_string(), None))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
