//! Base64 codec tool definition.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{error_result, success_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the Base64 codec.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Base64Params {
    /// Direction of the conversion.
    #[schemars(description = "'encode' or 'decode'")]
    pub mode: String,

    /// The text to transform.
    #[schemars(description = "Text to encode, or Base64 to decode")]
    pub text: String,

    /// Use the URL-safe alphabet (`-` and `_` instead of `+` and `/`).
    #[serde(default)]
    #[schemars(description = "Use the URL-safe alphabet (default: false)")]
    pub url_safe: bool,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Base64 codec tool.
pub struct Base64Tool;

impl Base64Tool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "text_base64";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Encode text to Base64 or decode Base64 back to text, with the standard or URL-safe alphabet.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(mode = %params.mode, url_safe = params.url_safe))]
    pub fn execute(params: &Base64Params) -> CallToolResult {
        let output = match params.mode.as_str() {
            "encode" => {
                if params.url_safe {
                    URL_SAFE.encode(params.text.as_bytes())
                } else {
                    STANDARD.encode(params.text.as_bytes())
                }
            }
            "decode" => {
                let decoded = if params.url_safe {
                    URL_SAFE.decode(params.text.trim())
                } else {
                    STANDARD.decode(params.text.trim())
                };
                let bytes = match decoded {
                    Ok(b) => b,
                    Err(e) => return error_result(&format!("Invalid Base64: {}", e)),
                };
                match String::from_utf8(bytes) {
                    Ok(s) => s,
                    Err(_) => return error_result("Decoded data is not valid UTF-8"),
                }
            }
            other => {
                return error_result(&format!("Unknown mode: {}. Use 'encode' or 'decode'", other));
            }
        };

        info!("{}d {} bytes", params.mode, params.text.len());
        success_result(output)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: Base64Params =
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
            input_schema: cached_schema_for_type::<Base64Params>(),
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
                let params: Base64Params =
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

    fn run(mode: &str, text: &str, url_safe: bool) -> CallToolResult {
        Base64Tool::execute(&Base64Params {
            mode: mode.to_string(),
            text: text.to_string(),
            url_safe,
        })
    }

    #[test]
    fn test_encode_standard() {
        let result = run("encode", "hello world", false);
        assert!(!is_error(&result));
        assert_eq!(content_text(&result, 0), "aGVsbG8gd29ybGQ=");
    }

    #[test]
    fn test_decode_standard() {
        let result = run("decode", "aGVsbG8gd29ybGQ=", false);
        assert_eq!(content_text(&result, 0), "hello world");
    }

    #[test]
    fn test_url_safe_alphabet() {
        // 0xfb 0xff encodes to "+/8=" standard, "-_8=" url-safe; use text that
        // hits the high alphabet positions.
        let encoded = content_text(&run("encode", "\u{00fb}\u{00ff}", true), 0).to_string();
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));

        let decoded = run("decode", &encoded, true);
        assert_eq!(content_text(&decoded, 0), "\u{00fb}\u{00ff}");
    }

    #[test]
    fn test_round_trip_unicode() {
        let input = "caf\u{00e9} \u{2603}";
        let encoded = content_text(&run("encode", input, false), 0).to_string();
        let decoded = run("decode", &encoded, false);
        assert_eq!(content_text(&decoded, 0), input);
    }

    #[test]
    fn test_decode_invalid_input() {
        let result = run("decode", "not base64!!!", false);
        assert!(is_error(&result));
        assert!(content_text(&result, 0).contains("Invalid Base64"));
    }

    #[test]
    fn test_decode_trims_whitespace() {
        let result = run("decode", "  aGk=\n", false);
        assert_eq!(content_text(&result, 0), "hi");
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(is_error(&run("compress", "x", false)));
    }
}
