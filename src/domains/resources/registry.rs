//! Resource Registry - central registration of all resources.
//!
//! This module provides dynamic resource registration without modifying service.rs.
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, ResourceTemplate};

use super::definitions::{
    DocsReadmeResource, NamedColorsResource, ResourceDefinition, ServerInfoResource,
};
use super::service::ResourceEntry;

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Get all registered resources as ResourceEntries.
///
/// This is the central place where all resources are registered.
/// When adding a new resource, add it here.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<ServerInfoResource>(),
        build_resource::<NamedColorsResource>(),
        build_resource::<DocsReadmeResource>(),
    ]
}

/// Get all registered resource templates.
///
/// Resource templates use URI templates (RFC 6570) to describe
/// parameterized resources that clients can fill in.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        // Any parseable color as a resource
        RawResourceTemplate {
            uri_template: "color://{value}".to_string(),
            name: "Color Report".to_string(),
            title: Some("Inspect a Color".to_string()),
            description: Some(
                "All representations of a color, e.g. color://dodgerblue or color://1e90ff"
                    .to_string(),
            ),
            mime_type: Some("application/json".to_string()),
        }
        .no_annotation(),
    ]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![
        ServerInfoResource::URI,
        NamedColorsResource::URI,
        DocsReadmeResource::URI,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 3);

        let uris: Vec<_> = resources
            .iter()
            .map(|r| r.resource.raw.uri.as_str())
            .collect();
        assert!(uris.contains(&"webtools://server/info"));
        assert!(uris.contains(&"webtools://colors/named"));
        assert!(uris.contains(&"webtools://docs/readme"));
    }

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].raw.uri_template, "color://{value}");
    }

    #[test]
    fn test_resource_uris_match_registry() {
        let uris = resource_uris();
        let registered = get_all_resources();
        assert_eq!(uris.len(), registered.len());
        for entry in registered {
            assert!(uris.contains(&entry.resource.raw.uri.as_str()));
        }
    }
}
