//! Color mixing tool definition.
//!
//! Blends two colors channel-wise, optionally returning the whole
//! interpolation ramp.

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
use super::model::{self, Rgb};

const MIN_STEPS: usize = 2;
const MAX_STEPS: usize = 32;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the color mixing tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ColorMixParams {
    /// First color.
    #[schemars(description = "First color in any supported notation")]
    pub color_a: String,

    /// Second color.
    #[schemars(description = "Second color in any supported notation")]
    pub color_b: String,

    /// Blend weight as the percentage of the second color (default: 50).
    #[serde(default = "default_weight")]
    #[schemars(description = "Percentage of the second color in the blend, 0-100 (default: 50)")]
    pub weight: f64,

    /// Number of ramp steps to return, including both endpoints (2-32).
    #[serde(default)]
    #[schemars(description = "Optional: return a full ramp with this many steps (2-32)")]
    pub steps: Option<usize>,
}

fn default_weight() -> f64 {
    50.0
}

// ============================================================================
// Structured Output
// ============================================================================

/// Mix result, optionally with the interpolation ramp.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct MixReport {
    pub color_a: String,
    pub color_b: String,
    pub weight: f64,
    pub mixed: String,
    pub rgb: Rgb,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ramp: Option<Vec<String>>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Color mixing tool - channel-wise blend of two colors.
pub struct ColorMixTool;

impl ColorMixTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "color_mix";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Mix two colors by a weight percentage. Optionally returns the full interpolation ramp between them (2-32 steps).";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(a = %params.color_a, b = %params.color_b))]
    pub fn execute(params: &ColorMixParams) -> CallToolResult {
        let a = match model::parse(&params.color_a) {
            Ok(p) => p.rgb,
            Err(e) => return error_result(&format!("color_a: {}", e)),
        };
        let b = match model::parse(&params.color_b) {
            Ok(p) => p.rgb,
            Err(e) => return error_result(&format!("color_b: {}", e)),
        };

        if !(0.0..=100.0).contains(&params.weight) {
            return error_result("weight must be between 0 and 100");
        }

        let ramp = match params.steps {
            Some(steps) if !(MIN_STEPS..=MAX_STEPS).contains(&steps) => {
                return error_result(&format!(
                    "steps must be between {} and {}",
                    MIN_STEPS, MAX_STEPS
                ));
            }
            Some(steps) => Some(
                (0..steps)
                    .map(|i| model::mix(a, b, i as f64 / (steps - 1) as f64).to_hex())
                    .collect(),
            ),
            None => None,
        };

        let mixed = model::mix(a, b, params.weight / 100.0);
        info!("Mixed {} + {} -> {}", a.to_hex(), b.to_hex(), mixed.to_hex());

        let report = MixReport {
            color_a: a.to_hex(),
            color_b: b.to_hex(),
            weight: params.weight,
            mixed: mixed.to_hex(),
            rgb: mixed,
            ramp,
        };

        let summary = format!(
            "{} + {} ({}% of the latter) = {}",
            report.color_a, report.color_b, params.weight, report.mixed
        );
        structured_result(summary, report)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: ColorMixParams =
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
            input_schema: cached_schema_for_type::<ColorMixParams>(),
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
                let params: ColorMixParams =
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

    fn params(a: &str, b: &str) -> ColorMixParams {
        ColorMixParams {
            color_a: a.to_string(),
            color_b: b.to_string(),
            weight: default_weight(),
            steps: None,
        }
    }

    #[test]
    fn test_even_mix_of_black_and_white() {
        let result = ColorMixTool::execute(&params("black", "white"));
        assert!(!is_error(&result));

        let json: serde_json::Value = serde_json::from_str(content_text(&result, 1)).unwrap();
        assert_eq!(json["mixed"], "#808080");
    }

    #[test]
    fn test_weight_zero_returns_first_color() {
        let mut p = params("#ff0000", "#0000ff");
        p.weight = 0.0;
        let result = ColorMixTool::execute(&p);
        let json: serde_json::Value = serde_json::from_str(content_text(&result, 1)).unwrap();
        assert_eq!(json["mixed"], "#ff0000");
    }

    #[test]
    fn test_ramp_endpoints() {
        let mut p = params("#000000", "#ffffff");
        p.steps = Some(3);
        let result = ColorMixTool::execute(&p);
        let json: serde_json::Value = serde_json::from_str(content_text(&result, 1)).unwrap();
        let ramp: Vec<String> = serde_json::from_value(json["ramp"].clone()).unwrap();
        assert_eq!(ramp, vec!["#000000", "#808080", "#ffffff"]);
    }

    #[test]
    fn test_invalid_steps_rejected() {
        let mut p = params("#000000", "#ffffff");
        p.steps = Some(1);
        assert!(is_error(&ColorMixTool::execute(&p)));

        p.steps = Some(33);
        assert!(is_error(&ColorMixTool::execute(&p)));
    }

    #[test]
    fn test_invalid_weight_rejected() {
        let mut p = params("#000000", "#ffffff");
        p.weight = 120.0;
        assert!(is_error(&ColorMixTool::execute(&p)));
    }

    #[test]
    fn test_default_weight_from_json() {
        let p: ColorMixParams =
            serde_json::from_str(r#"{"color_a": "red", "color_b": "blue"}"#).unwrap();
        assert_eq!(p.weight, 50.0);
        assert!(p.steps.is_none());
    }
}
