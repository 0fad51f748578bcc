//! AI palette generation tool definition.
//!
//! A thin proxy over the Groq chat-completions API; the model's reply is
//! mined for hex codes and validated through the color model.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::core::config::Config;

use super::super::color::{model, named};
use super::super::common::{error_result, structured_result};
use super::common::{GROQ_ENDPOINT, chat_completion};

const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

const MIN_COUNT: usize = 2;
const MAX_COUNT: usize = 10;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the AI palette tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AiPaletteParams {
    /// Theme the palette should evoke.
    #[schemars(description = "Theme or mood description, e.g. 'autumn forest at dusk'")]
    pub description: String,

    /// Number of colors (2-10, default: 5).
    #[serde(default = "default_count")]
    #[schemars(description = "Number of colors, 2-10 (default: 5)")]
    pub count: usize,

    /// Model override (default: llama-3.3-70b-versatile).
    #[serde(default)]
    #[schemars(description = "Optional Groq model id (default: llama-3.3-70b-versatile)")]
    pub model: Option<String>,
}

fn default_count() -> usize {
    5
}

// ============================================================================
// Structured Output
// ============================================================================

/// One generated palette color.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct AiPaletteColor {
    pub hex: String,
    /// The CSS keyword, when the color matches one exactly.
    pub keyword: Option<String>,
}

/// The generated palette.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct AiPaletteResult {
    pub description: String,
    pub model: String,
    pub colors: Vec<AiPaletteColor>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// AI palette tool - Groq proxy.
pub struct AiPaletteTool;

impl AiPaletteTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "ai_palette";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate a themed color palette from a text description via the Groq API. Requires WEBTOOLS_GROQ_API_KEY to be configured.";

    /// Execute the tool logic. Performs a blocking HTTP request; run it on a
    /// dedicated thread.
    #[instrument(skip_all, fields(count = params.count))]
    pub fn execute(params: &AiPaletteParams, config: &Config) -> CallToolResult {
        let Some(api_key) = config.credentials.groq_api_key.as_deref() else {
            return error_result("Groq API key not configured (set WEBTOOLS_GROQ_API_KEY)");
        };

        if params.description.trim().is_empty() {
            return error_result("description must not be empty");
        }
        if !(MIN_COUNT..=MAX_COUNT).contains(&params.count) {
            return error_result(&format!(
                "count must be between {} and {}",
                MIN_COUNT, MAX_COUNT
            ));
        }

        let model_id = params.model.as_deref().unwrap_or(DEFAULT_MODEL);
        let system = format!(
            "You are a color palette designer. Reply with exactly {} six-digit hex color codes, \
             one per line, each starting with '#'. No names, no commentary.",
            params.count
        );

        let reply = match chat_completion(
            GROQ_ENDPOINT,
            api_key,
            model_id,
            &system,
            params.description.trim(),
        ) {
            Ok(content) => content,
            Err(e) => return error_result(&format!("Palette generation failed: {}", e)),
        };

        let colors = extract_hex_colors(&reply, params.count);
        if colors.len() < MIN_COUNT {
            warn!("Model reply contained {} usable colors", colors.len());
            return error_result("The model did not return enough valid hex colors");
        }

        info!("Generated {} colors via {}", colors.len(), model_id);

        let result = AiPaletteResult {
            description: params.description.trim().to_string(),
            model: model_id.to_string(),
            colors,
        };

        let summary = format!(
            "{} colors for '{}'",
            result.colors.len(),
            result.description
        );
        structured_result(summary, result)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let params: AiPaletteParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid parameters: {}", e))?;

        // reqwest::blocking creates its own runtime; a separate OS thread keeps
        // it off the server's executor.
        let handle = std::thread::spawn(move || Self::execute(&params, &config));
        let result = handle
            .join()
            .map_err(|_| "Thread panicked during palette generation".to_string())?;

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
            input_schema: cached_schema_for_type::<AiPaletteParams>(),
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
                let params: AiPaletteParams =
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
// Reply parsing
// ============================================================================

/// Pull up to `limit` distinct six-digit hex codes out of the model's reply,
/// validated through the color parser.
fn extract_hex_colors(reply: &str, limit: usize) -> Vec<AiPaletteColor> {
    let mut colors = Vec::new();
    let mut seen = Vec::new();

    let chars: Vec<char> = reply.chars().collect();
    let mut i = 0;
    while i < chars.len() && colors.len() < limit {
        if chars[i] == '#' {
            let candidate: String = chars[i + 1..].iter().take(6).collect();
            if candidate.len() == 6 && candidate.chars().all(|c| c.is_ascii_hexdigit()) {
                if let Ok(parsed) = model::parse(&candidate) {
                    let hex = parsed.rgb.to_hex();
                    if !seen.contains(&hex) {
                        seen.push(hex.clone());
                        colors.push(AiPaletteColor {
                            keyword: named::name_of(parsed.rgb).map(str::to_string),
                            hex,
                        });
                    }
                }
                i += 7;
                continue;
            }
        }
        i += 1;
    }

    colors
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::super::common::test_support::{content_text, is_error};
    use super::*;

    fn params(description: &str) -> AiPaletteParams {
        AiPaletteParams {
            description: description.to_string(),
            count: default_count(),
            model: None,
        }
    }

    fn config_without_key() -> Config {
        let mut config = Config::default();
        config.credentials.groq_api_key = None;
        config
    }

    #[test]
    fn test_missing_api_key_is_reported() {
        let result = AiPaletteTool::execute(&params("sunset"), &config_without_key());
        assert!(is_error(&result));
        assert!(content_text(&result, 0).contains("WEBTOOLS_GROQ_API_KEY"));
    }

    #[test]
    fn test_count_bounds() {
        let mut config = Config::default();
        config.credentials.groq_api_key = Some("test-key".to_string());

        let mut p = params("sunset");
        p.count = 1;
        assert!(is_error(&AiPaletteTool::execute(&p, &config)));
        p.count = 11;
        assert!(is_error(&AiPaletteTool::execute(&p, &config)));
    }

    #[test]
    fn test_extract_hex_colors() {
        let reply = "Here you go:\n#FF8800\n#123abc\nand #ff8800 again, plus #zzz.";
        let colors = extract_hex_colors(reply, 5);
        let hexes: Vec<_> = colors.iter().map(|c| c.hex.as_str()).collect();
        // Duplicates collapse, junk is skipped.
        assert_eq!(hexes, vec!["#ff8800", "#123abc"]);
    }

    #[test]
    fn test_extract_respects_limit() {
        let reply = "#111111 #222222 #333333 #444444";
        assert_eq!(extract_hex_colors(reply, 2).len(), 2);
    }

    #[test]
    fn test_extract_reports_keywords() {
        let colors = extract_hex_colors("#ff6347", 1);
        assert_eq!(colors[0].keyword.as_deref(), Some("tomato"));
    }

    // Integration test (requires network and a real key, run with: cargo test -- --ignored)
    #[ignore]
    #[test]
    fn test_generate_palette() {
        let config = Config::from_env();
        let result = AiPaletteTool::execute(&params("deep ocean at night"), &config);
        assert!(!is_error(&result));
    }
}
