//! Tool Router - builds the rmcp ToolRouter from registry.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{
    AiPaletteTool, Base64Tool, ColorContrastTool, ColorConvertTool, ColorMixTool,
    ColorPaletteTool, CssBoxShadowTool, CssFilterTool, CssGradientTool, CssPatternTool,
    HtmlEntitiesTool, MarkdownHtmlTool, UrlCodecTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(AiPaletteTool::create_route(config.clone()))
        .with_route(Base64Tool::create_route())
        .with_route(ColorContrastTool::create_route())
        .with_route(ColorConvertTool::create_route())
        .with_route(ColorMixTool::create_route())
        .with_route(ColorPaletteTool::create_route())
        .with_route(CssBoxShadowTool::create_route())
        .with_route(CssFilterTool::create_route())
        .with_route(CssGradientTool::create_route())
        .with_route(CssPatternTool::create_route())
        .with_route(HtmlEntitiesTool::create_route())
        .with_route(MarkdownHtmlTool::create_route(config))
        .with_route(UrlCodecTool::create_route())
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let tools = router.list_all();
        assert_eq!(tools.len(), 13);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"color_convert"));
        assert!(names.contains(&"color_contrast"));
        assert!(names.contains(&"color_mix"));
        assert!(names.contains(&"color_palette"));
        assert!(names.contains(&"css_gradient"));
        assert!(names.contains(&"css_box_shadow"));
        assert!(names.contains(&"css_filter"));
        assert!(names.contains(&"css_pattern"));
        assert!(names.contains(&"text_html_entities"));
        assert!(names.contains(&"text_base64"));
        assert!(names.contains(&"text_url"));
        assert!(names.contains(&"ai_markdown_html"));
        assert!(names.contains(&"ai_palette"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let config = test_config();
        let registry = ToolRegistry::new(config.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(config);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
