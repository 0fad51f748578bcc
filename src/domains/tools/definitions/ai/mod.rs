//! AI proxy tool family.
//!
//! Thin proxies over OpenAI-compatible chat-completion APIs: OpenRouter for
//! Markdown conversion, Groq for palette generation. Both run their blocking
//! HTTP requests on dedicated threads.

pub mod common;
pub mod markdown_html;
pub mod palette;

pub use markdown_html::MarkdownHtmlTool;
pub use palette::AiPaletteTool;
