//! HTML entity codec tool definition.
//!
//! Encoding escapes the markup-significant characters plus a set of common
//! typographic symbols; decoding understands the same named entities and
//! numeric character references. Unknown entities pass through untouched, the
//! way browsers treat them.

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

/// Characters encoded on the way out. `&` must stay first in spirit; the
/// char-by-char walk makes double-encoding impossible.
const ENCODE_MAP: &[(char, &str)] = &[
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
    ('\u{00a0}', "&nbsp;"),
    ('\u{00a9}', "&copy;"),
    ('\u{00ae}', "&reg;"),
    ('\u{2122}', "&trade;"),
    ('\u{2014}', "&mdash;"),
    ('\u{2013}', "&ndash;"),
    ('\u{2026}', "&hellip;"),
    ('\u{00ab}', "&laquo;"),
    ('\u{00bb}', "&raquo;"),
];

/// Named entities understood by the decoder (a superset of the encoder's).
const DECODE_MAP: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{00a0}'),
    ("copy", '\u{00a9}'),
    ("reg", '\u{00ae}'),
    ("trade", '\u{2122}'),
    ("mdash", '\u{2014}'),
    ("ndash", '\u{2013}'),
    ("hellip", '\u{2026}'),
    ("laquo", '\u{00ab}'),
    ("raquo", '\u{00bb}'),
    ("deg", '\u{00b0}'),
    ("middot", '\u{00b7}'),
    ("plusmn", '\u{00b1}'),
    ("times", '\u{00d7}'),
    ("divide", '\u{00f7}'),
    ("euro", '\u{20ac}'),
    ("pound", '\u{00a3}'),
    ("yen", '\u{00a5}'),
    ("cent", '\u{00a2}'),
    ("sect", '\u{00a7}'),
    ("para", '\u{00b6}'),
];

// Longest named entity above is "hellip"; numeric references like
// &#x10ffff; need a little more room.
const MAX_ENTITY_LEN: usize = 8;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the HTML entity codec.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HtmlEntitiesParams {
    /// Direction of the conversion.
    #[schemars(description = "'encode' or 'decode'")]
    pub mode: String,

    /// The text to transform.
    #[schemars(description = "Text to encode or decode")]
    pub text: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// HTML entity codec tool.
pub struct HtmlEntitiesTool;

impl HtmlEntitiesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "text_html_entities";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Encode text for safe embedding in HTML (escaping &, <, >, quotes and common typographic symbols) or decode named and numeric HTML entities back to plain text.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(mode = %params.mode))]
    pub fn execute(params: &HtmlEntitiesParams) -> CallToolResult {
        let output = match params.mode.as_str() {
            "encode" => encode(&params.text),
            "decode" => decode(&params.text),
            other => {
                return error_result(&format!("Unknown mode: {}. Use 'encode' or 'decode'", other));
            }
        };

        info!(
            "{}d {} -> {} chars",
            params.mode,
            params.text.chars().count(),
            output.chars().count()
        );
        success_result(output)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: HtmlEntitiesParams =
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
            input_schema: cached_schema_for_type::<HtmlEntitiesParams>(),
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
                let params: HtmlEntitiesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Codec
// ============================================================================

/// Escape entity characters.
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match ENCODE_MAP.iter().find(|(ch, _)| *ch == c) {
            Some((_, entity)) => out.push_str(entity),
            None => out.push(c),
        }
    }
    out
}

/// Resolve named and numeric entities; anything unrecognized stays verbatim.
pub fn decode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        let resolved = tail[1..]
            .find(';')
            .filter(|end| *end <= MAX_ENTITY_LEN)
            .and_then(|end| decode_entity(&tail[1..1 + end]).map(|c| (c, end + 2)));

        match resolved {
            Some((c, consumed)) => {
                out.push(c);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Decode the body of a single `&...;` reference.
fn decode_entity(body: &str) -> Option<char> {
    if let Some(numeric) = body.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse().ok()?,
        };
        return char::from_u32(code);
    }

    DECODE_MAP
        .iter()
        .find(|(name, _)| *name == body)
        .map(|(_, c)| *c)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::super::common::test_support::{content_text, is_error};
    use super::*;

    fn run(mode: &str, text: &str) -> CallToolResult {
        HtmlEntitiesTool::execute(&HtmlEntitiesParams {
            mode: mode.to_string(),
            text: text.to_string(),
        })
    }

    #[test]
    fn test_encode_markup_characters() {
        let result = run("encode", r#"<a href="x">Q & A</a>"#);
        assert!(!is_error(&result));
        assert_eq!(
            content_text(&result, 0),
            "&lt;a href=&quot;x&quot;&gt;Q &amp; A&lt;/a&gt;"
        );
    }

    #[test]
    fn test_encode_typographic_symbols() {
        assert_eq!(encode("50\u{00b0}? \u{00a9} 2024\u{2026}"), "50\u{00b0}? &copy; 2024&hellip;");
    }

    #[test]
    fn test_decode_named_and_numeric() {
        assert_eq!(decode("&lt;b&gt;"), "<b>");
        assert_eq!(decode("&#65;&#x42;"), "AB");
        assert_eq!(decode("&euro;100"), "\u{20ac}100");
    }

    #[test]
    fn test_decode_leaves_unknown_entities() {
        assert_eq!(decode("&unknown; & &#zzz;"), "&unknown; & &#zzz;");
        assert_eq!(decode("a & b"), "a & b");
    }

    #[test]
    fn test_round_trip() {
        let samples = [
            "plain text",
            r#"<script>alert("1 & 2")</script>"#,
            "caf\u{00e9} \u{2014} r\u{00e9}sum\u{00e9}\u{2026}",
            "",
        ];
        for s in samples {
            assert_eq!(decode(&encode(s)), s, "round trip failed for {s:?}");
        }
    }

    #[test]
    fn test_decode_rejects_surrogate_reference() {
        // U+D800 is not a valid char; the reference stays verbatim.
        assert_eq!(decode("&#55296;"), "&#55296;");
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result = run("transcode", "x");
        assert!(is_error(&result));
    }
}
