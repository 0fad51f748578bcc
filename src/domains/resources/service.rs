//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read requests,
//! including `color://{value}` template resolution.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::collections::HashMap;
use tracing::info;

use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::core::config::ResourcesConfig;
use crate::domains::tools::ToolRegistry;
use crate::domains::tools::definitions::color::{ColorReport, model};

/// Service for managing and accessing resources.
///
/// This service maintains a registry of available resources and handles
/// resource listing and reading operations.
pub struct ResourceService {
    /// Configuration for the resources domain.
    #[allow(dead_code)]
    config: ResourcesConfig,

    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: HashMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Dynamic content that requires computation.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone)]
pub enum DynamicResourceType {
    /// Server information (name, version, tool inventory).
    ServerInfo,
}

impl ResourceService {
    /// Create a new ResourceService with the given configuration.
    pub fn new(config: ResourcesConfig) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            config,
            resources: HashMap::new(),
            templates: Vec::new(),
        };

        // Register all resources and templates from registry
        service.register_from_registry();
        service.register_templates_from_registry();

        service
    }

    /// Register all resources from the registry.
    fn register_from_registry(&mut self) {
        info!("Registering resources from registry");
        for entry in get_all_resources() {
            self.register_resource(entry);
        }
    }

    /// Register all resource templates from the registry.
    fn register_templates_from_registry(&mut self) {
        info!("Registering resource templates from registry");
        self.templates = get_all_resource_templates();
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    ///
    /// Registered URIs are served from the registry; `color://{value}` URIs
    /// are resolved on the fly.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let Some(entry) = self.resources.get(uri) else {
            if let Some(value) = uri.strip_prefix("color://") {
                return self.resolve_color(uri, value);
            }
            return Err(ResourceError::not_found(uri));
        };

        let content = match &entry.content {
            ResourceContent::Text(text) => ResourceContents::text(text, uri),
            ResourceContent::Dynamic(dynamic_type) => {
                self.resolve_dynamic_content(uri, dynamic_type)?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    /// Resolve dynamic resource content.
    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: &DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::ServerInfo => {
                let info = serde_json::json!({
                    "server": "webtools-mcp-server",
                    "version": env!("CARGO_PKG_VERSION"),
                    "tool_count": ToolRegistry::get_all_tools().len(),
                });

                Ok(ResourceContents::text(
                    serde_json::to_string_pretty(&info)
                        .map_err(|e| ResourceError::internal(e.to_string()))?,
                    uri,
                ))
            }
        }
    }

    /// Resolve a `color://{value}` URI into a full color report.
    fn resolve_color(&self, uri: &str, value: &str) -> Result<ReadResourceResult, ResourceError> {
        let parsed = model::parse(value)
            .map_err(|e| ResourceError::invalid_uri(format!("{}: {}", uri, e)))?;
        let report = ColorReport::build(value, parsed);

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| ResourceError::internal(e.to_string()))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(json, uri)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ResourceService {
        ResourceService::new(ResourcesConfig::default())
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = service();
        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 3);
    }

    #[tokio::test]
    async fn test_read_existing_resource() {
        let result = service().read_resource("webtools://docs/readme").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_read_server_info_reports_tool_count() {
        let result = service()
            .read_resource("webtools://server/info")
            .await
            .unwrap();
        let ResourceContents::TextResourceContents { text, .. } = &result.contents[0] else {
            panic!("Expected text contents");
        };
        let info: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(info["tool_count"], 13);
    }

    #[tokio::test]
    async fn test_read_color_template() {
        let result = service().read_resource("color://dodgerblue").await.unwrap();
        let ResourceContents::TextResourceContents { text, .. } = &result.contents[0] else {
            panic!("Expected text contents");
        };
        let report: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(report["hex"], "#1e90ff");
    }

    #[tokio::test]
    async fn test_read_invalid_color_template() {
        let result = service().read_resource("color://not-a-color").await;
        assert!(matches!(result, Err(ResourceError::InvalidUri(_))));
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let result = service().read_resource("webtools://server/nonexistent").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
