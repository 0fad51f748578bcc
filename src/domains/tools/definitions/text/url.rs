//! URL percent-encoding codec tool definition.

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

/// Parameters for the URL codec.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UrlCodecParams {
    /// Direction of the conversion.
    #[schemars(description = "'encode' or 'decode'")]
    pub mode: String,

    /// The text to transform.
    #[schemars(description = "Text to percent-encode, or an encoded string to decode")]
    pub text: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// URL codec tool - component-style percent encoding.
pub struct UrlCodecTool;

impl UrlCodecTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "text_url";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Percent-encode text for use in a URL component, or decode a percent-encoded string back to plain text.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(mode = %params.mode))]
    pub fn execute(params: &UrlCodecParams) -> CallToolResult {
        let output = match params.mode.as_str() {
            "encode" => urlencoding::encode(&params.text).into_owned(),
            "decode" => match urlencoding::decode(&params.text) {
                Ok(decoded) => decoded.into_owned(),
                Err(e) => return error_result(&format!("Invalid percent-encoding: {}", e)),
            },
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
        let params: UrlCodecParams =
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
            input_schema: cached_schema_for_type::<UrlCodecParams>(),
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
                let params: UrlCodecParams =
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

    fn run(mode: &str, text: &str) -> CallToolResult {
        UrlCodecTool::execute(&UrlCodecParams {
            mode: mode.to_string(),
            text: text.to_string(),
        })
    }

    #[test]
    fn test_encode_reserved_characters() {
        let result = run("encode", "a b&c=d?e");
        assert!(!is_error(&result));
        assert_eq!(content_text(&result, 0), "a%20b%26c%3Dd%3Fe");
    }

    #[test]
    fn test_encode_unicode() {
        let result = run("encode", "caf\u{00e9}");
        assert_eq!(content_text(&result, 0), "caf%C3%A9");
    }

    #[test]
    fn test_decode() {
        let result = run("decode", "caf%C3%A9%20%2B%20cr%C3%A8me");
        assert_eq!(content_text(&result, 0), "caf\u{00e9} + cr\u{00e8}me");
    }

    #[test]
    fn test_round_trip() {
        for s in ["hello world", "a/b?c=d&e=f#g", "\u{65e5}\u{672c}\u{8a9e}", ""] {
            let encoded = content_text(&run("encode", s), 0).to_string();
            let decoded = run("decode", &encoded);
            assert_eq!(content_text(&decoded, 0), s, "round trip failed for {s:?}");
        }
    }

    #[test]
    fn test_decode_invalid_utf8_sequence() {
        let result = run("decode", "%ff%fe");
        assert!(is_error(&result));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(is_error(&run("shorten", "x")));
    }
}
