//! Structured JSON export.

use serde_json::{json, Map, Value};

use crate::models::ColorGroup;

/// Renders a color group as a pretty-printed JSON document.
///
/// The document has the form `{ "base": hex, "shades": { "<level>": { "hex",
/// "hsl" } } }` with shade keys in scale order. An empty shade list yields
/// an empty `shades` object.
#[must_use]
pub fn generate_json(group: &ColorGroup) -> String {
    let mut shades = Map::new();
    for shade in &group.shades {
        shades.insert(
            shade.level.to_string(),
            json!({ "hex": shade.hex, "hsl": shade.hsl }),
        );
    }

    let document = json!({
        "base": group.base_color,
        "shades": shades,
    });

    // A map of plain strings always serializes
    serde_json::to_string_pretty(&document).expect("serializing a string map cannot fail")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RgbColor;
    use crate::palette::generate_shades;

    #[test]
    fn test_document_parses_with_base_and_shades() {
        let base = RgbColor::new(239, 68, 68);
        let group = ColorGroup::new("Error", base, generate_shades(base));
        let document: Value = serde_json::from_str(&generate_json(&group)).unwrap();

        assert_eq!(document["base"], "#EF4444");

        let shades = document["shades"].as_object().expect("shades object");
        assert_eq!(shades.len(), 10);
        assert_eq!(shades["50"]["hex"], group.shades[0].hex);
        assert_eq!(shades["50"]["hsl"], group.shades[0].hsl);
    }

    #[test]
    fn test_shade_keys_in_sequence_order() {
        let base = RgbColor::new(6, 182, 212);
        let group = ColorGroup::new("Info", base, generate_shades(base));
        let document: Value = serde_json::from_str(&generate_json(&group)).unwrap();

        let keys: Vec<&String> = document["shades"]
            .as_object()
            .expect("shades object")
            .keys()
            .collect();
        assert_eq!(
            keys,
            vec!["50", "200", "300", "400", "500", "600", "700", "800", "900", "1000"]
        );
    }

    #[test]
    fn test_empty_scale() {
        let group = ColorGroup::new("Error", RgbColor::new(239, 68, 68), Vec::new());
        let document: Value = serde_json::from_str(&generate_json(&group)).unwrap();

        assert_eq!(document["base"], "#EF4444");
        assert!(document["shades"].as_object().expect("object").is_empty());
    }
}
