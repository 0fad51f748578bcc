//! Color conversion tool definition.
//!
//! Converts any supported color notation into all the others.

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
use super::model::{self, Cmyk, Hsl, Hsv, ParsedColor, Rgb, round1};
use super::named;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the color conversion tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ColorConvertParams {
    /// The color to convert.
    #[schemars(
        description = "Color in any supported notation: hex (#1e90ff), CSS keyword (dodgerblue), rgb()/rgba(), or hsl()/hsla()"
    )]
    pub color: String,
}

// ============================================================================
// Structured Output
// ============================================================================

/// All representations of a single color.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ColorReport {
    pub input: String,
    pub hex: String,
    /// The CSS keyword, when the color matches one exactly.
    pub keyword: Option<String>,
    pub alpha: f64,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub hsv: Hsv,
    pub cmyk: Cmyk,
    pub css_rgb: String,
    pub css_hsl: String,
}

impl ColorReport {
    /// Build the full report for a parsed color.
    pub fn build(input: &str, parsed: ParsedColor) -> Self {
        let ParsedColor { rgb, alpha } = parsed;
        let hsl = rgb.to_hsl();
        let hsv = rgb.to_hsv();
        let cmyk = rgb.to_cmyk();

        Self {
            input: input.to_string(),
            hex: rgb.to_hex_with_alpha(alpha),
            keyword: named::name_of(rgb).map(str::to_string),
            alpha: model::format_alpha(alpha),
            rgb,
            hsl: Hsl {
                h: round1(hsl.h),
                s: round1(hsl.s),
                l: round1(hsl.l),
            },
            hsv: Hsv {
                h: round1(hsv.h),
                s: round1(hsv.s),
                v: round1(hsv.v),
            },
            cmyk: Cmyk {
                c: round1(cmyk.c),
                m: round1(cmyk.m),
                y: round1(cmyk.y),
                k: round1(cmyk.k),
            },
            css_rgb: rgb.to_css(alpha),
            css_hsl: hsl.to_css(alpha),
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Color conversion tool - hex, RGB, HSL, HSV and CMYK in one call.
pub struct ColorConvertTool;

impl ColorConvertTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "color_convert";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Convert a color between notations. Accepts hex, CSS keywords, rgb()/rgba() and hsl()/hsla(); returns hex, RGB, HSL, HSV, CMYK components and ready-to-paste CSS strings.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(color = %params.color))]
    pub fn execute(params: &ColorConvertParams) -> CallToolResult {
        let parsed = match model::parse(&params.color) {
            Ok(p) => p,
            Err(e) => return error_result(&e.to_string()),
        };

        let report = ColorReport::build(&params.color, parsed);
        info!("Converted '{}' to {}", params.color, report.hex);

        let summary = format!("{} = {}", params.color.trim(), report.hex);
        structured_result(summary, report)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: ColorConvertParams =
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
            input_schema: cached_schema_for_type::<ColorConvertParams>(),
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
                let params: ColorConvertParams =
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

    fn run(color: &str) -> CallToolResult {
        ColorConvertTool::execute(&ColorConvertParams {
            color: color.to_string(),
        })
    }

    #[test]
    fn test_convert_keyword() {
        let result = run("dodgerblue");
        assert!(!is_error(&result));
        assert_eq!(content_text(&result, 0), "dodgerblue = #1e90ff");

        let json: serde_json::Value = serde_json::from_str(content_text(&result, 1)).unwrap();
        assert_eq!(json["hex"], "#1e90ff");
        assert_eq!(json["keyword"], "dodgerblue");
        assert_eq!(json["rgb"]["r"], 30);
        assert_eq!(json["css_rgb"], "rgb(30, 144, 255)");
    }

    #[test]
    fn test_convert_hex_reports_components() {
        let result = run("#ff0000");
        let json: serde_json::Value = serde_json::from_str(content_text(&result, 1)).unwrap();
        assert_eq!(json["hsl"]["h"], 0.0);
        assert_eq!(json["hsl"]["s"], 100.0);
        assert_eq!(json["hsl"]["l"], 50.0);
        assert_eq!(json["cmyk"]["m"], 100.0);
        assert_eq!(json["keyword"], "red");
    }

    #[test]
    fn test_convert_rgba_keeps_alpha() {
        let result = run("rgba(30, 144, 255, 0.5)");
        let json: serde_json::Value = serde_json::from_str(content_text(&result, 1)).unwrap();
        assert_eq!(json["alpha"], 0.5);
        assert_eq!(json["hex"], "#1e90ff80");
        assert_eq!(json["css_rgb"], "rgba(30, 144, 255, 0.5)");
    }

    #[test]
    fn test_convert_rejects_garbage() {
        let result = run("definitely-not-a-color");
        assert!(is_error(&result));
        assert!(content_text(&result, 0).contains("Unrecognized color"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler() {
        let args = serde_json::json!({ "color": "#00ff00" });
        let result = ColorConvertTool::http_handler(args).unwrap();
        assert_eq!(result["isError"], false);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_missing_param() {
        let result = ColorConvertTool::http_handler(serde_json::json!({}));
        assert!(result.is_err());
    }
}
