//! WebTools MCP Server Library
//!
//! This crate provides an MCP server exposing web-developer utility tools:
//! color-space converters, WCAG contrast checks, palette generators, CSS
//! gradient/shadow/filter/pattern builders, text codecs, and thin proxies to
//! AI chat-completion APIs.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the tool collection (color, css, text and ai families)
//!   - **resources**: readable data (server info, the named-color table, docs)
//!   - **prompts**: prompt templates for consistent interactions
//!
//! # Example
//!
//! ```rust,no_run
//! use webtools_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
