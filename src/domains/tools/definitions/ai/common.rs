//! Shared chat-completion plumbing for the AI proxy tools.
//!
//! Both backends (OpenRouter, Groq) speak the OpenAI chat-completions
//! protocol, so a single request helper covers them.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

/// OpenRouter chat-completions endpoint.
pub const OPENROUTER_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Groq chat-completions endpoint.
pub const GROQ_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const ERROR_BODY_LIMIT: usize = 200;

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// POST a single-turn chat completion and return the assistant's text.
///
/// Uses `reqwest::blocking`, which spins up its own runtime - callers must
/// run this on a dedicated thread, never directly on the async executor.
pub fn chat_completion(
    endpoint: &str,
    api_key: &str,
    model: &str,
    system: &str,
    user: &str,
) -> Result<String, String> {
    debug!("Requesting chat completion from {} ({})", endpoint, model);

    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

    let body = serde_json::json!({
        "model": model,
        "messages": [
            { "role": "system", "content": system },
            { "role": "user", "content": user }
        ]
    });

    let response = client
        .post(endpoint)
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .map_err(|e| format!("Request failed: {}", e))?;

    let status = response.status();
    if !status.is_success() {
        let text = response.text().unwrap_or_default();
        return Err(format!("API returned {}: {}", status, truncate(&text)));
    }

    let parsed: ChatResponse = response
        .json()
        .map_err(|e| format!("Unparseable API response: {}", e))?;

    parsed
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or_else(|| "API response contained no choices".to_string())
}

/// Strip a wrapping Markdown code fence, if the model added one anyway.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Skip the info string ("html", "json", ...) on the opening fence.
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim_end(),
        None => body.trim(),
    }
}

fn truncate(text: &str) -> &str {
    match text.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence_with_info_string() {
        let fenced = "```html\n<p>hi</p>\n```";
        assert_eq!(strip_code_fence(fenced), "<p>hi</p>");
    }

    #[test]
    fn test_strip_code_fence_plain_text() {
        assert_eq!(strip_code_fence("  <p>hi</p>  "), "<p>hi</p>");
    }

    #[test]
    fn test_strip_code_fence_unterminated() {
        assert_eq!(strip_code_fence("```html\n<p>hi</p>"), "```html\n<p>hi</p>");
    }

    #[test]
    fn test_truncate_limits_long_bodies() {
        let long = "x".repeat(500);
        assert_eq!(truncate(&long).len(), 200);
        assert_eq!(truncate("short"), "short");
    }
}
