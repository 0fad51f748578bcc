//! WCAG contrast checker tool definition.

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
use super::model;

// WCAG 2.x thresholds
const AA_NORMAL: f64 = 4.5;
const AA_LARGE: f64 = 3.0;
const AAA_NORMAL: f64 = 7.0;
const AAA_LARGE: f64 = 4.5;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the contrast checker tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ColorContrastParams {
    /// Foreground (text) color.
    #[schemars(description = "Foreground color in any supported notation")]
    pub foreground: String,

    /// Background color.
    #[schemars(description = "Background color in any supported notation")]
    pub background: String,
}

// ============================================================================
// Structured Output
// ============================================================================

/// Contrast ratio plus WCAG pass/fail flags.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ContrastReport {
    pub foreground: String,
    pub background: String,
    /// Contrast ratio rounded to two decimals, in [1, 21].
    pub ratio: f64,
    pub aa_normal_text: bool,
    pub aa_large_text: bool,
    pub aaa_normal_text: bool,
    pub aaa_large_text: bool,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Contrast checker tool - WCAG ratio and conformance levels.
pub struct ColorContrastTool;

impl ColorContrastTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "color_contrast";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Compute the WCAG contrast ratio between a foreground and a background color and report AA/AAA conformance for normal and large text.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(fg = %params.foreground, bg = %params.background))]
    pub fn execute(params: &ColorContrastParams) -> CallToolResult {
        let foreground = match model::parse(&params.foreground) {
            Ok(p) => p.rgb,
            Err(e) => return error_result(&format!("foreground: {}", e)),
        };
        let background = match model::parse(&params.background) {
            Ok(p) => p.rgb,
            Err(e) => return error_result(&format!("background: {}", e)),
        };

        let exact = model::contrast_ratio(foreground, background);
        let ratio = (exact * 100.0).round() / 100.0;
        info!("Contrast ratio: {:.2}", exact);

        let report = ContrastReport {
            foreground: foreground.to_hex(),
            background: background.to_hex(),
            ratio,
            aa_normal_text: exact >= AA_NORMAL,
            aa_large_text: exact >= AA_LARGE,
            aaa_normal_text: exact >= AAA_NORMAL,
            aaa_large_text: exact >= AAA_LARGE,
        };

        let summary = format!(
            "{} on {} = {:.2}:1",
            report.foreground, report.background, ratio
        );
        structured_result(summary, report)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: ColorContrastParams =
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
            input_schema: cached_schema_for_type::<ColorContrastParams>(),
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
                let params: ColorContrastParams =
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

    fn run(fg: &str, bg: &str) -> CallToolResult {
        ColorContrastTool::execute(&ColorContrastParams {
            foreground: fg.to_string(),
            background: bg.to_string(),
        })
    }

    #[test]
    fn test_black_on_white_is_maximal() {
        let result = run("black", "white");
        assert!(!is_error(&result));

        let json: serde_json::Value = serde_json::from_str(content_text(&result, 1)).unwrap();
        assert_eq!(json["ratio"], 21.0);
        assert_eq!(json["aaa_normal_text"], true);
    }

    #[test]
    fn test_identical_colors_fail_everything() {
        let result = run("#777777", "#777777");
        let json: serde_json::Value = serde_json::from_str(content_text(&result, 1)).unwrap();
        assert_eq!(json["ratio"], 1.0);
        assert_eq!(json["aa_large_text"], false);
    }

    #[test]
    fn test_aa_boundary_behavior() {
        // White on #767676 is just above 4.5:1; white on #777777 just below.
        let pass = run("white", "#767676");
        let json: serde_json::Value = serde_json::from_str(content_text(&pass, 1)).unwrap();
        assert_eq!(json["aa_normal_text"], true);

        let fail = run("white", "#777777");
        let json: serde_json::Value = serde_json::from_str(content_text(&fail, 1)).unwrap();
        assert_eq!(json["aa_normal_text"], false);
        assert_eq!(json["aa_large_text"], true);
    }

    #[test]
    fn test_invalid_color_names_the_side() {
        let result = run("nope", "white");
        assert!(is_error(&result));
        assert!(content_text(&result, 0).starts_with("foreground:"));
    }
}
