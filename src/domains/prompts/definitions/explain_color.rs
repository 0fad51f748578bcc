//! Color explainer prompt definition.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Explanation briefing for a single color value.
pub struct ExplainColorPrompt;

impl PromptDefinition for ExplainColorPrompt {
    const NAME: &'static str = "explain_color";
    const DESCRIPTION: &'static str = "Explanation briefing for a color value";

    fn template() -> &'static str {
        "Explain the color {{color}}{{#if audience}} for {{audience}}{{/if}}: name its hue \
         family, describe how it reads on light and dark backgrounds, suggest two or three \
         complementary pairings, and note any accessibility caveats when it is used for text."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "color".to_string(),
                title: None,
                description: Some("The color to explain, in any notation".to_string()),
                required: Some(true),
            },
            PromptArgument {
                name: "audience".to_string(),
                title: None,
                description: Some(
                    "Optional audience, e.g. 'designers' or 'beginners'".to_string(),
                ),
                required: Some(false),
            },
        ]
    }
}
