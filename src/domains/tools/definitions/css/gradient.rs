//! CSS gradient generator tool definition.

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
use super::common::{format_number, normalize_color};

const POSITIONS: &[&str] = &[
    "center",
    "top",
    "bottom",
    "left",
    "right",
    "top left",
    "top right",
    "bottom left",
    "bottom right",
];

// ============================================================================
// Tool Parameters
// ============================================================================

/// A single gradient color stop.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GradientStop {
    /// Stop color.
    #[schemars(description = "Stop color in any supported notation")]
    pub color: String,

    /// Stop position in percent (0-100). Omit to let the browser space it.
    #[schemars(description = "Optional stop position in percent (0-100)")]
    pub position: Option<f64>,
}

/// Parameters for the gradient generator.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CssGradientParams {
    /// Gradient kind.
    #[schemars(description = "Gradient kind: 'linear', 'radial', or 'conic'")]
    pub kind: String,

    /// Angle in degrees (linear direction / conic from-angle; default: 90).
    #[serde(default = "default_angle")]
    #[schemars(description = "Angle in degrees for linear and conic gradients (default: 90)")]
    pub angle: f64,

    /// Radial shape (default: circle).
    #[serde(default = "default_shape")]
    #[schemars(description = "Radial shape: 'circle' or 'ellipse' (default: circle)")]
    pub shape: String,

    /// Center position keyword (default: center).
    #[serde(default = "default_position")]
    #[schemars(
        description = "Position for radial/conic gradients: center, top, bottom, left, right, or a corner like 'top left' (default: center)"
    )]
    pub position: String,

    /// Emit the repeating- variant.
    #[serde(default)]
    #[schemars(description = "Emit repeating-linear-gradient / repeating-radial-gradient / repeating-conic-gradient")]
    pub repeating: bool,

    /// The color stops, at least two.
    #[schemars(description = "Color stops in order (at least 2)")]
    pub stops: Vec<GradientStop>,
}

fn default_angle() -> f64 {
    90.0
}

fn default_shape() -> String {
    "circle".to_string()
}

fn default_position() -> String {
    "center".to_string()
}

// ============================================================================
// Structured Output
// ============================================================================

/// The generated gradient.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GradientReport {
    pub kind: String,
    /// The `background-image` value.
    pub css: String,
    /// Full declaration, ready to paste.
    pub declaration: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Gradient generator tool - linear, radial and conic CSS gradients.
pub struct CssGradientTool;

impl CssGradientTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "css_gradient";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate a CSS linear, radial, or conic gradient from an ordered list of color stops. Supports angle, radial shape, position keywords and the repeating- variants.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(kind = %params.kind))]
    pub fn execute(params: &CssGradientParams) -> CallToolResult {
        if params.stops.len() < 2 {
            return error_result("A gradient needs at least 2 color stops");
        }

        let mut stops = Vec::with_capacity(params.stops.len());
        for stop in &params.stops {
            let color = match normalize_color(&stop.color) {
                Ok(c) => c,
                Err(e) => return error_result(&e.to_string()),
            };

            match stop.position {
                Some(pos) if !(0.0..=100.0).contains(&pos) => {
                    return error_result("Stop positions must be between 0 and 100");
                }
                Some(pos) => stops.push(format!("{} {}%", color, format_number(pos))),
                None => stops.push(color),
            }
        }
        let stop_list = stops.join(", ");

        if !POSITIONS.contains(&params.position.as_str()) {
            return error_result(&format!(
                "Unknown position: {}. Use one of: {}",
                params.position,
                POSITIONS.join(", ")
            ));
        }

        let prefix = if params.repeating { "repeating-" } else { "" };
        let css = match params.kind.as_str() {
            "linear" => format!(
                "{}linear-gradient({}deg, {})",
                prefix,
                format_number(params.angle),
                stop_list
            ),
            "radial" => {
                if params.shape != "circle" && params.shape != "ellipse" {
                    return error_result("Radial shape must be 'circle' or 'ellipse'");
                }
                format!(
                    "{}radial-gradient({} at {}, {})",
                    prefix, params.shape, params.position, stop_list
                )
            }
            "conic" => format!(
                "{}conic-gradient(from {}deg at {}, {})",
                prefix,
                format_number(params.angle),
                params.position,
                stop_list
            ),
            other => {
                return error_result(&format!(
                    "Unknown gradient kind: {}. Use 'linear', 'radial', or 'conic'",
                    other
                ));
            }
        };

        info!("Generated {} gradient with {} stops", params.kind, stops.len());

        let report = GradientReport {
            kind: params.kind.clone(),
            declaration: format!("background-image: {};", css),
            css,
        };

        structured_result(report.declaration.clone(), report)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: CssGradientParams =
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
            input_schema: cached_schema_for_type::<CssGradientParams>(),
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
                let params: CssGradientParams =
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

    fn stop(color: &str, position: Option<f64>) -> GradientStop {
        GradientStop {
            color: color.to_string(),
            position,
        }
    }

    fn base_params(kind: &str, stops: Vec<GradientStop>) -> CssGradientParams {
        CssGradientParams {
            kind: kind.to_string(),
            angle: default_angle(),
            shape: default_shape(),
            position: default_position(),
            repeating: false,
            stops,
        }
    }

    fn css_of(result: &CallToolResult) -> String {
        let json: serde_json::Value = serde_json::from_str(content_text(result, 1)).unwrap();
        json["css"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_linear_gradient_with_positions() {
        let params = base_params(
            "linear",
            vec![stop("red", Some(0.0)), stop("#0000ff", Some(100.0))],
        );
        let result = CssGradientTool::execute(&params);
        assert!(!is_error(&result));
        assert_eq!(
            css_of(&result),
            "linear-gradient(90deg, #ff0000 0%, #0000ff 100%)"
        );
    }

    #[test]
    fn test_radial_gradient_shape_and_position() {
        let mut params = base_params("radial", vec![stop("white", None), stop("black", None)]);
        params.shape = "ellipse".to_string();
        params.position = "top left".to_string();
        let result = CssGradientTool::execute(&params);
        assert_eq!(
            css_of(&result),
            "radial-gradient(ellipse at top left, #ffffff, #000000)"
        );
    }

    #[test]
    fn test_repeating_conic() {
        let mut params = base_params("conic", vec![stop("gold", Some(0.0)), stop("tomato", Some(25.0))]);
        params.repeating = true;
        params.angle = 45.0;
        let result = CssGradientTool::execute(&params);
        assert_eq!(
            css_of(&result),
            "repeating-conic-gradient(from 45deg at center, #ffd700 0%, #ff6347 25%)"
        );
    }

    #[test]
    fn test_translucent_stop_keeps_rgba() {
        let params = base_params(
            "linear",
            vec![stop("rgba(0, 0, 0, 0.4)", None), stop("white", None)],
        );
        let result = CssGradientTool::execute(&params);
        assert!(css_of(&result).contains("rgba(0, 0, 0, 0.4)"));
    }

    #[test]
    fn test_too_few_stops_rejected() {
        let params = base_params("linear", vec![stop("red", None)]);
        assert!(is_error(&CssGradientTool::execute(&params)));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let params = base_params("spiral", vec![stop("red", None), stop("blue", None)]);
        let result = CssGradientTool::execute(&params);
        assert!(is_error(&result));
        assert!(content_text(&result, 0).contains("Unknown gradient kind"));
    }

    #[test]
    fn test_bad_position_rejected() {
        let mut params = base_params("radial", vec![stop("red", None), stop("blue", None)]);
        params.position = "upper middle".to_string();
        assert!(is_error(&CssGradientTool::execute(&params)));
    }
}
