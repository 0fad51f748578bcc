//! Color-wheel palette tool definition.
//!
//! Builds harmony palettes (complementary, triadic, ...) and lightness ramps
//! from a base color.

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
use super::model::{self, Hsl, round1};

const MIN_SIZE: usize = 3;
const MAX_SIZE: usize = 12;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the palette tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ColorPaletteParams {
    /// Base color the palette is derived from.
    #[schemars(description = "Base color in any supported notation")]
    pub color: String,

    /// Palette scheme.
    #[schemars(
        description = "Scheme: 'complementary', 'analogous', 'triadic', 'tetradic', 'split_complementary', 'monochromatic', 'shades', or 'tints'"
    )]
    pub scheme: String,

    /// Number of colors for the ramp schemes (3-12, default: 5).
    /// Ignored by the fixed-size harmony schemes.
    #[serde(default = "default_size")]
    #[schemars(
        description = "Palette size for monochromatic/shades/tints, 3-12 (default: 5); ignored by the harmony schemes"
    )]
    pub size: usize,
}

fn default_size() -> usize {
    5
}

// ============================================================================
// Structured Output
// ============================================================================

/// One palette entry: hex plus its HSL components.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct PaletteEntry {
    pub hex: String,
    pub hsl: Hsl,
}

/// A generated palette.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct PaletteReport {
    pub base: String,
    pub scheme: String,
    pub colors: Vec<PaletteEntry>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Palette tool - color-wheel harmonies and lightness ramps.
pub struct ColorPaletteTool;

impl ColorPaletteTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "color_palette";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate a palette from a base color. Harmony schemes (complementary, analogous, triadic, tetradic, split_complementary) rotate the hue; monochromatic, shades and tints vary lightness.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(color = %params.color, scheme = %params.scheme))]
    pub fn execute(params: &ColorPaletteParams) -> CallToolResult {
        let base = match model::parse(&params.color) {
            Ok(p) => p.rgb,
            Err(e) => return error_result(&e.to_string()),
        };

        if !(MIN_SIZE..=MAX_SIZE).contains(&params.size) {
            return error_result(&format!(
                "size must be between {} and {}",
                MIN_SIZE, MAX_SIZE
            ));
        }

        let hsl = base.to_hsl();
        let colors = match params.scheme.as_str() {
            "complementary" => rotations(hsl, &[0.0, 180.0]),
            "analogous" => rotations(hsl, &[-30.0, 0.0, 30.0]),
            "triadic" => rotations(hsl, &[0.0, 120.0, 240.0]),
            "tetradic" => rotations(hsl, &[0.0, 90.0, 180.0, 270.0]),
            "split_complementary" => rotations(hsl, &[0.0, 150.0, 210.0]),
            "monochromatic" => lightness_ramp(hsl, params.size, 15.0, 85.0),
            "shades" => lightness_ramp(hsl, params.size, hsl.l, 8.0),
            "tints" => lightness_ramp(hsl, params.size, hsl.l, 95.0),
            other => {
                return error_result(&format!(
                    "Unknown scheme: {}. Use 'complementary', 'analogous', 'triadic', 'tetradic', 'split_complementary', 'monochromatic', 'shades', or 'tints'",
                    other
                ));
            }
        };

        info!("Generated {} {} colors", colors.len(), params.scheme);

        let report = PaletteReport {
            base: base.to_hex(),
            scheme: params.scheme.clone(),
            colors,
        };

        let summary = format!(
            "{} palette of {} from {}",
            report.scheme,
            report.colors.len(),
            report.base
        );
        structured_result(summary, report)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: ColorPaletteParams =
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
            input_schema: cached_schema_for_type::<ColorPaletteParams>(),
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
                let params: ColorPaletteParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Palette construction
// ============================================================================

fn entry(hsl: Hsl) -> PaletteEntry {
    PaletteEntry {
        hex: hsl.to_rgb().to_hex(),
        hsl: Hsl {
            h: round1(hsl.h),
            s: round1(hsl.s),
            l: round1(hsl.l),
        },
    }
}

/// Hue rotations of the base color, in the given order.
fn rotations(base: Hsl, degrees: &[f64]) -> Vec<PaletteEntry> {
    degrees.iter().map(|d| entry(base.rotate(*d))).collect()
}

/// Evenly spaced lightness values from `from` to `to`, hue and saturation kept.
fn lightness_ramp(base: Hsl, size: usize, from: f64, to: f64) -> Vec<PaletteEntry> {
    (0..size)
        .map(|i| {
            let t = i as f64 / (size - 1) as f64;
            entry(base.with_lightness(from + (to - from) * t))
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::super::common::test_support::{content_text, is_error};
    use super::*;

    fn run(color: &str, scheme: &str, size: usize) -> CallToolResult {
        ColorPaletteTool::execute(&ColorPaletteParams {
            color: color.to_string(),
            scheme: scheme.to_string(),
            size,
        })
    }

    fn colors(result: &CallToolResult) -> Vec<serde_json::Value> {
        let json: serde_json::Value = serde_json::from_str(content_text(result, 1)).unwrap();
        json["colors"].as_array().unwrap().clone()
    }

    #[test]
    fn test_complementary_of_red_is_cyan() {
        let result = run("#ff0000", "complementary", 5);
        assert!(!is_error(&result));

        let colors = colors(&result);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0]["hex"], "#ff0000");
        assert_eq!(colors[1]["hex"], "#00ffff");
        assert_eq!(colors[1]["hsl"]["h"], 180.0);
    }

    #[test]
    fn test_triadic_spacing() {
        let result = run("hsl(30, 80%, 50%)", "triadic", 5);
        let colors = colors(&result);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[1]["hsl"]["h"], 150.0);
        assert_eq!(colors[2]["hsl"]["h"], 270.0);
    }

    #[test]
    fn test_monochromatic_respects_size() {
        let result = run("steelblue", "monochromatic", 7);
        let colors = colors(&result);
        assert_eq!(colors.len(), 7);
        // Lightness climbs from the dark end to the light end.
        assert_eq!(colors[0]["hsl"]["l"], 15.0);
        assert_eq!(colors[6]["hsl"]["l"], 85.0);
    }

    #[test]
    fn test_shades_get_darker() {
        let result = run("#1e90ff", "shades", 4);
        let colors = colors(&result);
        let first = colors[0]["hsl"]["l"].as_f64().unwrap();
        let last = colors[3]["hsl"]["l"].as_f64().unwrap();
        assert!(last < first);
        assert_eq!(last, 8.0);
    }

    #[test]
    fn test_unknown_scheme_rejected() {
        let result = run("#1e90ff", "vaporwave", 5);
        assert!(is_error(&result));
        assert!(content_text(&result, 0).contains("Unknown scheme"));
    }

    #[test]
    fn test_size_out_of_range_rejected() {
        assert!(is_error(&run("#1e90ff", "monochromatic", 2)));
        assert!(is_error(&run("#1e90ff", "monochromatic", 13)));
    }
}
