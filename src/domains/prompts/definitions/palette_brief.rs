//! Palette briefing prompt definition.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Briefing for generating a themed color palette.
pub struct PaletteBriefPrompt;

impl PromptDefinition for PaletteBriefPrompt {
    const NAME: &'static str = "palette_brief";
    const DESCRIPTION: &'static str =
        "Briefing for designing a themed UI color palette with accessibility checks";

    fn template() -> &'static str {
        "Design a color palette of {{#if count}}{{count}}{{else}}five{{/if}} colors for the \
         following theme: {{theme}}.{{#if mood}} The overall mood should be {{mood}}.{{/if}} \
         For each color, give a six-digit hex code, a short name, and the role it plays in a UI \
         (background, surface, accent, or text). Make sure every text/background pairing meets \
         WCAG AA contrast."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "theme".to_string(),
                title: None,
                description: Some("The theme to design for, e.g. 'autumn forest'".to_string()),
                required: Some(true),
            },
            PromptArgument {
                name: "count".to_string(),
                title: None,
                description: Some("Number of colors (default: five)".to_string()),
                required: Some(false),
            },
            PromptArgument {
                name: "mood".to_string(),
                title: None,
                description: Some("Optional mood, e.g. 'calm' or 'energetic'".to_string()),
                required: Some(false),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_brief_metadata() {
        assert_eq!(PaletteBriefPrompt::NAME, "palette_brief");
        assert!(!PaletteBriefPrompt::template().is_empty());

        let args = PaletteBriefPrompt::arguments();
        assert_eq!(args.len(), 3);
        assert_eq!(args[0].name, "theme");
        assert_eq!(args[0].required, Some(true));
        assert_eq!(args[1].required, Some(false));
    }
}
