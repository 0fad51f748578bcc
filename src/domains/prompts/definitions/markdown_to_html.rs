//! Markdown conversion prompt definition.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Instructions for converting a Markdown document to HTML.
pub struct MarkdownToHtmlPrompt;

impl PromptDefinition for MarkdownToHtmlPrompt {
    const NAME: &'static str = "markdown_to_html";
    const DESCRIPTION: &'static str = "Instructions for converting Markdown to semantic HTML";

    fn template() -> &'static str {
        "Convert the following Markdown into clean, semantic HTML5. Use semantic elements where \
         they fit (article, section, figure), keep code blocks intact, and do not invent content.\
         {{#if fragment}} Return only a body fragment, without <html>, <head> or <body> tags.{{/if}}\
         \n\nMarkdown:\n{{markdown}}"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "markdown".to_string(),
                title: None,
                description: Some("The Markdown source to convert".to_string()),
                required: Some(true),
            },
            PromptArgument {
                name: "fragment".to_string(),
                title: None,
                description: Some(
                    "Set to any non-empty value to request a body fragment only".to_string(),
                ),
                required: Some(false),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_prompt_metadata() {
        assert_eq!(MarkdownToHtmlPrompt::NAME, "markdown_to_html");
        assert!(MarkdownToHtmlPrompt::template().contains("{{markdown}}"));

        let args = MarkdownToHtmlPrompt::arguments();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].name, "markdown");
        assert_eq!(args[0].required, Some(true));
    }
}
