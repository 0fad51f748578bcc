//! CSS filter generator tool definition.
//!
//! Builds a `filter` value from the nine standard filter functions, omitting
//! the ones left at their identity value.

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
use super::common::format_number;

// Brightness/contrast/saturate may exceed 100%; this is the sanity ceiling.
const MAX_AMPLIFY: f64 = 1000.0;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the filter generator. Every field defaults to the
/// function's identity value, so callers only set what they use.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CssFilterParams {
    /// Gaussian blur in pixels (identity: 0).
    #[serde(default)]
    #[schemars(description = "blur() radius in pixels, >= 0 (identity: 0)")]
    pub blur: f64,

    /// Brightness percentage (identity: 100).
    #[serde(default = "identity_percent")]
    #[schemars(description = "brightness() in percent, 0-1000 (identity: 100)")]
    pub brightness: f64,

    /// Contrast percentage (identity: 100).
    #[serde(default = "identity_percent")]
    #[schemars(description = "contrast() in percent, 0-1000 (identity: 100)")]
    pub contrast: f64,

    /// Grayscale percentage (identity: 0).
    #[serde(default)]
    #[schemars(description = "grayscale() in percent, 0-100 (identity: 0)")]
    pub grayscale: f64,

    /// Hue rotation in degrees (identity: 0).
    #[serde(default)]
    #[schemars(description = "hue-rotate() in degrees (identity: 0)")]
    pub hue_rotate: f64,

    /// Invert percentage (identity: 0).
    #[serde(default)]
    #[schemars(description = "invert() in percent, 0-100 (identity: 0)")]
    pub invert: f64,

    /// Opacity percentage (identity: 100).
    #[serde(default = "identity_percent")]
    #[schemars(description = "opacity() in percent, 0-100 (identity: 100)")]
    pub opacity: f64,

    /// Saturation percentage (identity: 100).
    #[serde(default = "identity_percent")]
    #[schemars(description = "saturate() in percent, 0-1000 (identity: 100)")]
    pub saturate: f64,

    /// Sepia percentage (identity: 0).
    #[serde(default)]
    #[schemars(description = "sepia() in percent, 0-100 (identity: 0)")]
    pub sepia: f64,
}

fn identity_percent() -> f64 {
    100.0
}

// ============================================================================
// Structured Output
// ============================================================================

/// The generated filter.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct FilterReport {
    /// Number of active (non-identity) filter functions.
    pub active_functions: usize,
    /// The `filter` value; `none` when everything is at identity.
    pub css: String,
    /// Full declaration, ready to paste.
    pub declaration: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Filter generator tool - the CSS filter shorthand.
pub struct CssFilterTool;

impl CssFilterTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "css_filter";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Build a CSS filter value from blur, brightness, contrast, grayscale, hue-rotate, invert, opacity, saturate and sepia. Functions left at their identity value are omitted.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(params: &CssFilterParams) -> CallToolResult {
        if params.blur < 0.0 {
            return error_result("blur must be >= 0");
        }
        for (name, value) in [
            ("grayscale", params.grayscale),
            ("invert", params.invert),
            ("opacity", params.opacity),
            ("sepia", params.sepia),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return error_result(&format!("{} must be between 0 and 100", name));
            }
        }
        for (name, value) in [
            ("brightness", params.brightness),
            ("contrast", params.contrast),
            ("saturate", params.saturate),
        ] {
            if !(0.0..=MAX_AMPLIFY).contains(&value) {
                return error_result(&format!(
                    "{} must be between 0 and {}",
                    name, MAX_AMPLIFY
                ));
            }
        }

        // Assembled in the CSS specification's function order.
        let mut functions = Vec::new();
        if params.blur > 0.0 {
            functions.push(format!("blur({}px)", format_number(params.blur)));
        }
        if params.brightness != 100.0 {
            functions.push(format!("brightness({}%)", format_number(params.brightness)));
        }
        if params.contrast != 100.0 {
            functions.push(format!("contrast({}%)", format_number(params.contrast)));
        }
        if params.grayscale > 0.0 {
            functions.push(format!("grayscale({}%)", format_number(params.grayscale)));
        }
        if params.hue_rotate != 0.0 {
            functions.push(format!("hue-rotate({}deg)", format_number(params.hue_rotate)));
        }
        if params.invert > 0.0 {
            functions.push(format!("invert({}%)", format_number(params.invert)));
        }
        if params.opacity != 100.0 {
            functions.push(format!("opacity({}%)", format_number(params.opacity)));
        }
        if params.saturate != 100.0 {
            functions.push(format!("saturate({}%)", format_number(params.saturate)));
        }
        if params.sepia > 0.0 {
            functions.push(format!("sepia({}%)", format_number(params.sepia)));
        }

        let active = functions.len();
        let css = if functions.is_empty() {
            "none".to_string()
        } else {
            functions.join(" ")
        };

        info!("Generated filter with {} active function(s)", active);

        let report = FilterReport {
            active_functions: active,
            declaration: format!("filter: {};", css),
            css,
        };

        structured_result(report.declaration.clone(), report)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: CssFilterParams =
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
            input_schema: cached_schema_for_type::<CssFilterParams>(),
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
                let params: CssFilterParams =
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

    fn identity() -> CssFilterParams {
        serde_json::from_str("{}").unwrap()
    }

    fn css_of(result: &CallToolResult) -> String {
        let json: serde_json::Value = serde_json::from_str(content_text(result, 1)).unwrap();
        json["css"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_all_identity_is_none() {
        let result = CssFilterTool::execute(&identity());
        assert!(!is_error(&result));
        assert_eq!(css_of(&result), "none");
    }

    #[test]
    fn test_single_function() {
        let mut params = identity();
        params.blur = 4.0;
        assert_eq!(css_of(&CssFilterTool::execute(&params)), "blur(4px)");
    }

    #[test]
    fn test_functions_in_spec_order() {
        let mut params = identity();
        params.sepia = 30.0;
        params.blur = 2.0;
        params.brightness = 120.0;
        assert_eq!(
            css_of(&CssFilterTool::execute(&params)),
            "blur(2px) brightness(120%) sepia(30%)"
        );
    }

    #[test]
    fn test_hue_rotate_accepts_negative() {
        let mut params = identity();
        params.hue_rotate = -90.0;
        assert_eq!(css_of(&CssFilterTool::execute(&params)), "hue-rotate(-90deg)");
    }

    #[test]
    fn test_bounded_percent_rejected() {
        let mut params = identity();
        params.grayscale = 150.0;
        assert!(is_error(&CssFilterTool::execute(&params)));

        let mut params = identity();
        params.opacity = -5.0;
        assert!(is_error(&CssFilterTool::execute(&params)));
    }

    #[test]
    fn test_amplifiers_can_exceed_100() {
        let mut params = identity();
        params.saturate = 250.0;
        assert_eq!(css_of(&CssFilterTool::execute(&params)), "saturate(250%)");
    }

    #[test]
    fn test_defaults_from_empty_json() {
        let params = identity();
        assert_eq!(params.brightness, 100.0);
        assert_eq!(params.blur, 0.0);
    }
}
