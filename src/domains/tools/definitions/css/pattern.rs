//! CSS background-pattern generator tool definition.
//!
//! Emits the gradient recipes behind common two-color background patterns.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::super::common::{error_result, structured_result};
use super::common::{format_number, normalize_color, px};

const MIN_SIZE: f64 = 4.0;
const MAX_SIZE: f64 = 200.0;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the pattern generator.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CssPatternParams {
    /// Pattern kind.
    #[schemars(description = "Pattern: 'stripes', 'dots', 'grid', 'checkerboard', or 'zigzag'")]
    pub pattern: String,

    /// Base (background) color.
    #[schemars(description = "Background color in any supported notation")]
    pub background: String,

    /// Accent (pattern) color.
    #[schemars(description = "Pattern color in any supported notation")]
    pub accent: String,

    /// Tile size in pixels (4-200, default: 20).
    #[serde(default = "default_size")]
    #[schemars(description = "Tile size in pixels, 4-200 (default: 20)")]
    pub size: f64,

    /// Stripe angle in degrees (stripes only, default: 45).
    #[serde(default = "default_angle")]
    #[schemars(description = "Stripe angle in degrees (stripes only, default: 45)")]
    pub angle: f64,
}

fn default_size() -> f64 {
    20.0
}

fn default_angle() -> f64 {
    45.0
}

// ============================================================================
// Structured Output
// ============================================================================

/// The generated pattern as individual properties plus the combined block.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct PatternReport {
    pub pattern: String,
    pub background_color: String,
    pub background_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_position: Option<String>,
    /// All properties joined into a ready-to-paste CSS block.
    pub css: String,
}

impl PatternReport {
    fn new(
        pattern: &str,
        background_color: String,
        background_image: String,
        background_size: Option<String>,
        background_position: Option<String>,
    ) -> Self {
        let mut lines = vec![
            format!("background-color: {};", background_color),
            format!("background-image: {};", background_image),
        ];
        if let Some(size) = &background_size {
            lines.push(format!("background-size: {};", size));
        }
        if let Some(position) = &background_position {
            lines.push(format!("background-position: {};", position));
        }

        Self {
            pattern: pattern.to_string(),
            background_color,
            background_image,
            background_size,
            background_position,
            css: lines.join("\n"),
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Pattern generator tool - two-color CSS background patterns.
pub struct CssPatternTool;

impl CssPatternTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "css_pattern";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate the CSS for a two-color background pattern: stripes, dots, grid, checkerboard, or zigzag. Returns the individual background properties and a combined block.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(pattern = %params.pattern))]
    pub fn execute(params: &CssPatternParams) -> CallToolResult {
        let background = match normalize_color(&params.background) {
            Ok(c) => c,
            Err(e) => return error_result(&format!("background: {}", e)),
        };
        let accent = match normalize_color(&params.accent) {
            Ok(c) => c,
            Err(e) => return error_result(&format!("accent: {}", e)),
        };

        if !(MIN_SIZE..=MAX_SIZE).contains(&params.size) {
            return error_result(&format!(
                "size must be between {} and {} pixels",
                MIN_SIZE, MAX_SIZE
            ));
        }

        let size = params.size;
        let report = match params.pattern.as_str() {
            "stripes" => PatternReport::new(
                &params.pattern,
                background.clone(),
                format!(
                    "repeating-linear-gradient({}deg, {bg} 0, {bg} {}, {fg} {}, {fg} {})",
                    format_number(params.angle),
                    px(size),
                    px(size),
                    px(size * 2.0),
                    bg = background,
                    fg = accent,
                ),
                None,
                None,
            ),
            "dots" => PatternReport::new(
                &params.pattern,
                background,
                format!(
                    "radial-gradient({} {}, transparent {})",
                    accent,
                    px(size / 5.0),
                    px(size / 5.0)
                ),
                Some(format!("{} {}", px(size), px(size))),
                None,
            ),
            "grid" => PatternReport::new(
                &params.pattern,
                background,
                format!(
                    "linear-gradient({fg} 1px, transparent 1px), linear-gradient(90deg, {fg} 1px, transparent 1px)",
                    fg = accent,
                ),
                Some(format!("{} {}", px(size), px(size))),
                None,
            ),
            "checkerboard" => PatternReport::new(
                &params.pattern,
                background.clone(),
                format!(
                    "conic-gradient({fg} 25%, {bg} 25% 50%, {fg} 50% 75%, {bg} 75%)",
                    bg = background,
                    fg = accent,
                ),
                Some(format!("{} {}", px(size * 2.0), px(size * 2.0))),
                None,
            ),
            "zigzag" => PatternReport::new(
                &params.pattern,
                background,
                format!(
                    "linear-gradient(135deg, {fg} 25%, transparent 25%), linear-gradient(225deg, {fg} 25%, transparent 25%), linear-gradient(45deg, {fg} 25%, transparent 25%), linear-gradient(315deg, {fg} 25%, transparent 25%)",
                    fg = accent,
                ),
                Some(format!("{} {}", px(size), px(size))),
                Some(format!(
                    "{half} 0, {half} 0, 0 0, 0 0",
                    half = px(size / 2.0)
                )),
            ),
            other => {
                return error_result(&format!(
                    "Unknown pattern: {}. Use 'stripes', 'dots', 'grid', 'checkerboard', or 'zigzag'",
                    other
                ));
            }
        };

        info!("Generated {} pattern", params.pattern);

        let summary = format!("{} pattern, {} tile", report.pattern, px(size));
        structured_result(summary, report)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: CssPatternParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid parameters: {}", e))?;

        let result = Self::execute(&params);

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
            input_schema: cached_schema_for_type::<CssPatternParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: CssPatternParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::super::common::test_support::{content_text, is_error};
    use super::*;

    fn params(pattern: &str) -> CssPatternParams {
        CssPatternParams {
            pattern: pattern.to_string(),
            background: "white".to_string(),
            accent: "#1e90ff".to_string(),
            size: default_size(),
            angle: default_angle(),
        }
    }

    fn report_of(result: &CallToolResult) -> serde_json::Value {
        serde_json::from_str(content_text(result, 1)).unwrap()
    }

    #[test]
    fn test_stripes() {
        let result = CssPatternTool::execute(&params("stripes"));
        assert!(!is_error(&result));

        let report = report_of(&result);
        assert_eq!(
            report["background_image"],
            "repeating-linear-gradient(45deg, #ffffff 0, #ffffff 20px, #1e90ff 20px, #1e90ff 40px)"
        );
        assert!(report["background_size"].is_null());
    }

    #[test]
    fn test_dots_scale_with_size() {
        let mut p = params("dots");
        p.size = 30.0;
        let report = report_of(&CssPatternTool::execute(&p));
        assert_eq!(
            report["background_image"],
            "radial-gradient(#1e90ff 6px, transparent 6px)"
        );
        assert_eq!(report["background_size"], "30px 30px");
    }

    #[test]
    fn test_checkerboard_tile_is_double_size() {
        let report = report_of(&CssPatternTool::execute(&params("checkerboard")));
        assert_eq!(report["background_size"], "40px 40px");
        assert!(
            report["background_image"]
                .as_str()
                .unwrap()
                .starts_with("conic-gradient")
        );
    }

    #[test]
    fn test_zigzag_has_position_offsets() {
        let report = report_of(&CssPatternTool::execute(&params("zigzag")));
        assert_eq!(report["background_position"], "10px 0, 10px 0, 0 0, 0 0");
    }

    #[test]
    fn test_combined_block_lists_all_properties() {
        let report = report_of(&CssPatternTool::execute(&params("grid")));
        let css = report["css"].as_str().unwrap();
        assert!(css.contains("background-color: #ffffff;"));
        assert!(css.contains("background-size: 20px 20px;"));
    }

    #[test]
    fn test_unknown_pattern_rejected() {
        let result = CssPatternTool::execute(&params("houndstooth"));
        assert!(is_error(&result));
    }

    #[test]
    fn test_size_bounds() {
        let mut p = params("dots");
        p.size = 2.0;
        assert!(is_error(&CssPatternTool::execute(&p)));
        p.size = 500.0;
        assert!(is_error(&CssPatternTool::execute(&p)));
    }

    #[test]
    fn test_bad_color_names_the_field() {
        let mut p = params("dots");
        p.accent = "nope".to_string();
        let result = CssPatternTool::execute(&p);
        assert!(is_error(&result));
        assert!(content_text(&result, 0).starts_with("accent:"));
    }
}
