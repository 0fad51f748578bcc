//! Usage guide resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

const README: &str = r#"# WebTools MCP Server

Web-developer utility tools over MCP.

## Tool families

- **color_*** - convert between hex/RGB/HSL/HSV/CMYK (`color_convert`), check
  WCAG contrast (`color_contrast`), blend colors (`color_mix`), and build
  harmony palettes (`color_palette`).
- **css_*** - generate gradients (`css_gradient`), layered box shadows
  (`css_box_shadow`), filter values (`css_filter`), and background patterns
  (`css_pattern`).
- **text_*** - HTML entities (`text_html_entities`), Base64 (`text_base64`),
  and URL percent-encoding (`text_url`).
- **ai_*** - Markdown to HTML via OpenRouter (`ai_markdown_html`) and themed
  palettes via Groq (`ai_palette`). These need WEBTOOLS_OPENROUTER_API_KEY /
  WEBTOOLS_GROQ_API_KEY.

## Resources

- `webtools://server/info` - server metadata and tool inventory
- `webtools://colors/named` - the CSS named-color table
- `color://{value}` - any parseable color, e.g. `color://dodgerblue` or
  `color://1e90ff`

Colors are accepted as hex (`#1e90ff`, short forms included), CSS keywords,
`rgb()`/`rgba()`, or `hsl()`/`hsla()`.
"#;

/// Static usage guide (markdown).
pub struct DocsReadmeResource;

impl ResourceDefinition for DocsReadmeResource {
    const URI: &'static str = "webtools://docs/readme";
    const NAME: &'static str = "Usage Guide";
    const DESCRIPTION: &'static str = "How to use the tools and resources on this server";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(README.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readme_metadata() {
        assert_eq!(DocsReadmeResource::URI, "webtools://docs/readme");
        assert_eq!(DocsReadmeResource::MIME_TYPE, "text/markdown");
    }

    #[test]
    fn test_readme_mentions_every_family() {
        for family in ["color_", "css_", "text_", "ai_"] {
            assert!(README.contains(family), "missing {family}");
        }
    }
}
