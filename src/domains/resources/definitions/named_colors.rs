//! Named-color table resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;
use crate::domains::tools::definitions::color::named::NAMED_COLORS;

/// The CSS named-color table as JSON (keyword -> hex).
pub struct NamedColorsResource;

impl NamedColorsResource {
    /// Render the table as a JSON object, keywords in table order.
    fn to_json() -> String {
        let mut map = serde_json::Map::new();
        for (keyword, value) in NAMED_COLORS {
            map.insert(
                (*keyword).to_string(),
                serde_json::Value::String(format!("#{:06x}", value)),
            );
        }
        serde_json::Value::Object(map).to_string()
    }
}

impl ResourceDefinition for NamedColorsResource {
    const URI: &'static str = "webtools://colors/named";
    const NAME: &'static str = "CSS Named Colors";
    const DESCRIPTION: &'static str = "All CSS color keywords with their hex values";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Text(Self::to_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_json_is_complete() {
        let json: serde_json::Value = serde_json::from_str(&NamedColorsResource::to_json()).unwrap();
        let map = json.as_object().unwrap();
        assert_eq!(map.len(), NAMED_COLORS.len());
        assert_eq!(map["rebeccapurple"], "#663399");
        assert_eq!(map["black"], "#000000");
    }
}
