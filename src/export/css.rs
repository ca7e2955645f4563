//! CSS custom property export.

use crate::models::ColorGroup;

use super::variables::VariableDocument;

/// Renders a color group as a `:root` block of CSS custom properties.
///
/// The block contains `--<prefix>-base` for the base color followed by one
/// `--<prefix>-<level>` property per shade, in scale order. An empty shade
/// list yields a block containing only the base property.
///
/// # Examples
///
/// ```
/// use shadegen::export::generate_css_variables;
/// use shadegen::models::{ColorGroup, RgbColor};
/// use shadegen::palette::generate_shades;
///
/// let base = RgbColor::new(59, 130, 246);
/// let group = ColorGroup::new("Primary", base, generate_shades(base));
/// let css = generate_css_variables(&group);
/// assert!(css.contains("--primary-base: #3B82F6;"));
/// ```
#[must_use]
pub fn generate_css_variables(group: &ColorGroup) -> String {
    VariableDocument::from_group(group).to_css()
}
