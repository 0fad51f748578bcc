//! CSS box-shadow generator tool definition.
//!
//! Assembles multi-layer `box-shadow` declarations.

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
use super::common::{normalize_color, px};

const MAX_LAYERS: usize = 8;

// ============================================================================
// Tool Parameters
// ============================================================================

/// A single shadow layer.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ShadowLayer {
    /// Horizontal offset in pixels.
    #[schemars(description = "Horizontal offset in pixels (negative moves left)")]
    pub offset_x: f64,

    /// Vertical offset in pixels.
    #[schemars(description = "Vertical offset in pixels (negative moves up)")]
    pub offset_y: f64,

    /// Blur radius in pixels, must be >= 0.
    #[serde(default)]
    #[schemars(description = "Blur radius in pixels, >= 0 (default: 0)")]
    pub blur_radius: f64,

    /// Spread radius in pixels.
    #[serde(default)]
    #[schemars(description = "Spread radius in pixels (default: 0)")]
    pub spread_radius: f64,

    /// Shadow color.
    #[schemars(description = "Shadow color in any supported notation")]
    pub color: String,

    /// Draw the shadow inside the box.
    #[serde(default)]
    #[schemars(description = "Inset shadow (default: false)")]
    pub inset: bool,
}

/// Parameters for the box-shadow generator.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CssBoxShadowParams {
    /// Shadow layers, outermost first (1-8).
    #[schemars(description = "Shadow layers in paint order (1-8)")]
    pub layers: Vec<ShadowLayer>,
}

// ============================================================================
// Structured Output
// ============================================================================

/// The generated shadow.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct BoxShadowReport {
    pub layer_count: usize,
    /// The `box-shadow` value.
    pub css: String,
    /// Full declaration, ready to paste.
    pub declaration: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Box-shadow generator tool - layered CSS shadows.
pub struct CssBoxShadowTool;

impl CssBoxShadowTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "css_box_shadow";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Assemble a CSS box-shadow from up to 8 layers (offsets, blur, spread, color, inset), joined in paint order.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(layers = params.layers.len()))]
    pub fn execute(params: &CssBoxShadowParams) -> CallToolResult {
        if params.layers.is_empty() {
            return error_result("box-shadow needs at least one layer");
        }
        if params.layers.len() > MAX_LAYERS {
            return error_result(&format!("box-shadow supports at most {} layers", MAX_LAYERS));
        }

        let mut rendered = Vec::with_capacity(params.layers.len());
        for layer in &params.layers {
            if layer.blur_radius < 0.0 {
                return error_result("blur_radius must be >= 0");
            }

            let color = match normalize_color(&layer.color) {
                Ok(c) => c,
                Err(e) => return error_result(&e.to_string()),
            };

            let mut parts = Vec::with_capacity(6);
            if layer.inset {
                parts.push("inset".to_string());
            }
            parts.push(px(layer.offset_x));
            parts.push(px(layer.offset_y));
            parts.push(px(layer.blur_radius));
            if layer.spread_radius != 0.0 {
                parts.push(px(layer.spread_radius));
            }
            parts.push(color);

            rendered.push(parts.join(" "));
        }

        let css = rendered.join(", ");
        info!("Generated box-shadow with {} layer(s)", rendered.len());

        let report = BoxShadowReport {
            layer_count: params.layers.len(),
            declaration: format!("box-shadow: {};", css),
            css,
        };

        structured_result(report.declaration.clone(), report)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: CssBoxShadowParams =
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
            input_schema: cached_schema_for_type::<CssBoxShadowParams>(),
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
                let params: CssBoxShadowParams =
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
