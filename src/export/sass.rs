//! Sass variable export.

use crate::models::ColorGroup;

use super::variables::VariableDocument;

/// Renders a color group as Sass variable declarations.
///
/// Emits `$<prefix>-base` followed by one `$<prefix>-<level>` declaration
/// per shade, one per line in scale order.
#[must_use]
pub fn generate_sass_variables(group: &ColorGroup) -> String {
    VariableDocument::from_group(group).to_sass()
}
