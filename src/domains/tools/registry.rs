//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::core::config::Config;

use super::definitions::{
    AiPaletteTool, Base64Tool, ColorContrastTool, ColorConvertTool, ColorMixTool,
    ColorPaletteTool, CssBoxShadowTool, CssFilterTool, CssGradientTool, CssPatternTool,
    HtmlEntitiesTool, MarkdownHtmlTool, UrlCodecTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            AiPaletteTool::NAME,
            Base64Tool::NAME,
            ColorContrastTool::NAME,
            ColorConvertTool::NAME,
            ColorMixTool::NAME,
            ColorPaletteTool::NAME,
            CssBoxShadowTool::NAME,
            CssFilterTool::NAME,
            CssGradientTool::NAME,
            CssPatternTool::NAME,
            HtmlEntitiesTool::NAME,
            MarkdownHtmlTool::NAME,
            UrlCodecTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            AiPaletteTool::to_tool(),
            Base64Tool::to_tool(),
            ColorContrastTool::to_tool(),
            ColorConvertTool::to_tool(),
            ColorMixTool::to_tool(),
            ColorPaletteTool::to_tool(),
            CssBoxShadowTool::to_tool(),
            CssFilterTool::to_tool(),
            CssGradientTool::to_tool(),
            CssPatternTool::to_tool(),
            HtmlEntitiesTool::to_tool(),
            MarkdownHtmlTool::to_tool(),
            UrlCodecTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            AiPaletteTool::NAME => AiPaletteTool::http_handler(arguments, self.config.clone()),
            Base64Tool::NAME => Base64Tool::http_handler(arguments),
            ColorContrastTool::NAME => ColorContrastTool::http_handler(arguments),
            ColorConvertTool::NAME => ColorConvertTool::http_handler(arguments),
            ColorMixTool::NAME => ColorMixTool::http_handler(arguments),
            ColorPaletteTool::NAME => ColorPaletteTool::http_handler(arguments),
            CssBoxShadowTool::NAME => CssBoxShadowTool::http_handler(arguments),
            CssFilterTool::NAME => CssFilterTool::http_handler(arguments),
            CssGradientTool::NAME => CssGradientTool::http_handler(arguments),
            CssPatternTool::NAME => CssPatternTool::http_handler(arguments),
            HtmlEntitiesTool::NAME => HtmlEntitiesTool::http_handler(arguments),
            MarkdownHtmlTool::NAME => {
                MarkdownHtmlTool::http_handler(arguments, self.config.clone())
            }
            UrlCodecTool::NAME => UrlCodecTool::http_handler(arguments),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(format!("Unknown tool: {}", name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_config());
        let names = registry.tool_names();
        assert_eq!(names.len(), 13);
        assert!(names.contains(&"ai_markdown_html"));
        assert!(names.contains(&"ai_palette"));
        assert!(names.contains(&"color_contrast"));
        assert!(names.contains(&"color_convert"));
        assert!(names.contains(&"color_mix"));
        assert!(names.contains(&"color_palette"));
        assert!(names.contains(&"css_box_shadow"));
        assert!(names.contains(&"css_filter"));
        assert!(names.contains(&"css_gradient"));
        assert!(names.contains(&"css_pattern"));
        assert!(names.contains(&"text_base64"));
        assert!(names.contains(&"text_html_entities"));
        assert!(names.contains(&"text_url"));
    }

    #[test]
    fn test_metadata_matches_names() {
        let registry = ToolRegistry::new(test_config());
        let names = registry.tool_names();
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), names.len());
        for tool in tools {
            assert!(names.contains(&tool.name.as_ref()));
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_convert() {
        let registry = ToolRegistry::new(test_config());
        let result = registry.call_tool("color_convert", serde_json::json!({ "color": "teal" }));
        assert!(result.is_ok());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_config());
        let result = registry.call_tool("unknown", serde_json::json!({}));
        assert!(result.is_err());
    }
}
