//! Tailwind configuration export.

use serde_json::{Map, Value};

use crate::models::ColorGroup;

use super::variables::variable_prefix;

/// Renders a color group as a Tailwind `module.exports` block extending the
/// theme colors.
///
/// The shade scale is built as an ordered JSON object keyed by scale level
/// and serialized in a single pass, then embedded into the surrounding
/// configuration shell. The embedded object is syntactically valid JSON.
#[must_use]
pub fn generate_tailwind_config(group: &ColorGroup) -> String {
    let mut scale = Map::new();
    for shade in &group.shades {
        scale.insert(shade.level.to_string(), Value::String(shade.hex.clone()));
    }

    let mut colors = Map::new();
    colors.insert(variable_prefix(&group.title), Value::Object(scale));

    // A map of plain strings always serializes
    let rendered = serde_json::to_string_pretty(&Value::Object(colors))
        .expect("serializing a string map cannot fail");

    format!(
        "module.exports = {{\n  theme: {{\n    extend: {{\n      colors: {rendered}\n    }}\n  }}\n}}"
    )
}
