//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Resources domain configuration.
    pub resources: ResourcesConfig,

    /// Prompts domain configuration.
    pub prompts: PromptsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the resources domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcesConfig {
    // Resources are registered in domains/resources/registry.rs
    // Add resource-specific configuration here if needed.
}

/// Configuration for the prompts domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsConfig {
    // Prompts are registered in domains/prompts/registry.rs
    // Add prompt-specific configuration here if needed.
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for external API credentials.
///
/// Both keys are optional: the AI proxy tools report a configuration error
/// when called without the key they need.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// OpenRouter API key, used by the `ai_markdown_html` tool.
    pub openrouter_api_key: Option<String>,

    /// Groq API key, used by the `ai_palette` tool.
    pub groq_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "openrouter_api_key",
                &self.openrouter_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field(
                "groq_api_key",
                &self.groq_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "webtools-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            resources: ResourcesConfig::default(),
            prompts: PromptsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `WEBTOOLS_`.
    /// For example: `WEBTOOLS_SERVER_NAME`, `WEBTOOLS_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("WEBTOOLS_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("WEBTOOLS_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        // AI proxy credentials: both tools degrade to a configuration error
        // when their key is missing.
        if let Ok(api_key) = std::env::var("WEBTOOLS_OPENROUTER_API_KEY") {
            config.credentials.openrouter_api_key = Some(api_key);
            info!("OpenRouter API key loaded from environment");
        } else {
            warn!("WEBTOOLS_OPENROUTER_API_KEY not set - the ai_markdown_html tool is unavailable");
        }

        if let Ok(api_key) = std::env::var("WEBTOOLS_GROQ_API_KEY") {
            config.credentials.groq_api_key = Some(api_key);
            info!("Groq API key loaded from environment");
        } else {
            warn!("WEBTOOLS_GROQ_API_KEY not set - the ai_palette tool is unavailable");
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("WEBTOOLS_GROQ_API_KEY", "test_key_12345");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.groq_api_key.as_deref(),
            Some("test_key_12345")
        );
        unsafe {
            std::env::remove_var("WEBTOOLS_GROQ_API_KEY");
        }
    }

    #[test]
    fn test_credentials_default_to_none() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("WEBTOOLS_OPENROUTER_API_KEY");
            std::env::remove_var("WEBTOOLS_GROQ_API_KEY");
        }
        let config = Config::from_env();
        assert!(config.credentials.openrouter_api_key.is_none());
        assert!(config.credentials.groq_api_key.is_none());
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            openrouter_api_key: Some("super_secret_key".to_string()),
            groq_api_key: None,
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("WEBTOOLS_SERVER_NAME", "custom-name");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "custom-name");
        unsafe {
            std::env::remove_var("WEBTOOLS_SERVER_NAME");
        }
    }
}
