//! CSS review prompt definition.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Review briefing for a CSS snippet.
pub struct CssReviewPrompt;

impl PromptDefinition for CssReviewPrompt {
    const NAME: &'static str = "css_review";
    const DESCRIPTION: &'static str = "Review briefing for a CSS snippet";

    fn template() -> &'static str {
        "Review the following CSS{{#if focus}} with a focus on {{focus}}{{/if}}. Point out \
         invalid or misspelled properties, redundant declarations, accessibility problems \
         (contrast, focus styles, motion), and simpler modern equivalents where they exist. \
         Suggest concrete replacements.\n\nCSS:\n{{css}}"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "css".to_string(),
                title: None,
                description: Some("The CSS snippet to review".to_string()),
                required: Some(true),
            },
            PromptArgument {
                name: "focus".to_string(),
                title: None,
                description: Some(
                    "Optional focus area, e.g. 'accessibility' or 'performance'".to_string(),
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
    fn test_css_review_metadata() {
        assert_eq!(CssReviewPrompt::NAME, "css_review");
        assert!(CssReviewPrompt::template().contains("{{css}}"));
        assert_eq!(CssReviewPrompt::arguments().len(), 2);
    }
}
