//! Helpers shared across tool definitions.
//!
//! Response formatting used by every tool: plain-text results, error
//! results, and the summary + structured-JSON pair.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create a success result carrying a one-line summary followed by
/// pretty-printed JSON data.
pub fn structured_result<T: Serialize>(summary: String, data: T) -> CallToolResult {
    match serde_json::to_string_pretty(&data) {
        Ok(json) => CallToolResult::success(vec![Content::text(summary), Content::text(json)]),
        Err(e) => error_result(&format!("Failed to serialize result: {}", e)),
    }
}

#[cfg(test)]
pub mod test_support {
    use rmcp::model::{CallToolResult, RawContent};

    /// Extract the text of content item `index` from a tool result.
    pub fn content_text(result: &CallToolResult, index: usize) -> &str {
        match &result.content[index].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    /// True when the result is flagged as an error.
    pub fn is_error(result: &CallToolResult) -> bool {
        result.is_error.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{content_text, is_error};
    use super::*;

    #[test]
    fn test_error_result_flags_error() {
        let result = error_result("something failed");
        assert!(is_error(&result));
        assert_eq!(content_text(&result, 0), "something failed");
    }

    #[test]
    fn test_structured_result_has_summary_and_json() {
        let result = structured_result("done".to_string(), serde_json::json!({ "ok": true }));
        assert!(!is_error(&result));
        assert_eq!(content_text(&result, 0), "done");
        assert!(content_text(&result, 1).contains("\"ok\": true"));
    }
}
