//! Shared building blocks for variable-style exports.
//!
//! The CSS and Sass renderers differ only in line syntax, so both are
//! serializations of the same ordered key/value document built here.

use crate::models::ColorGroup;

/// Derives a variable-name prefix from a group title.
///
/// Lowercases the title and collapses runs of characters that are invalid
/// in variable names into single dashes. Titles are never rejected; a title
/// with no usable characters falls back to `"color"`.
///
/// # Examples
///
/// ```
/// use shadegen::export::variable_prefix;
///
/// assert_eq!(variable_prefix("Primary"), "primary");
/// assert_eq!(variable_prefix("Brand Blue"), "brand-blue");
/// ```
#[must_use]
pub fn variable_prefix(title: &str) -> String {
    let mut prefix = String::with_capacity(title.len());
    let mut last_was_dash = false;

    for ch in title.trim().to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            prefix.push(ch);
            last_was_dash = false;
        } else if !last_was_dash && !prefix.is_empty() {
            prefix.push('-');
            last_was_dash = true;
        }
    }

    while prefix.ends_with('-') {
        prefix.pop();
    }

    if prefix.is_empty() {
        "color".to_string()
    } else {
        prefix
    }
}

/// An ordered variable document: a prefix plus key/value entries.
///
/// Entries render in insertion order in every output syntax.
#[derive(Debug, Clone)]
pub struct VariableDocument {
    prefix: String,
    entries: Vec<(String, String)>,
}

impl VariableDocument {
    /// Creates an empty document with a prefix derived from the title.
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            prefix: variable_prefix(title),
            entries: Vec::new(),
        }
    }

    /// Builds the standard document for a color group: the base color
    /// followed by one entry per shade, keyed by scale level.
    #[must_use]
    pub fn from_group(group: &ColorGroup) -> Self {
        let mut document = Self::new(&group.title);
        document.push("base", &group.base_color);
        for shade in &group.shades {
            document.push(shade.level.to_string(), &shade.hex);
        }
        document
    }

    /// Appends a key/value entry.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Serializes as a `:root { ... }` block of CSS custom properties.
    #[must_use]
    pub fn to_css(&self) -> String {
        if self.entries.is_empty() {
            return String::from(":root {\n}");
        }

        let lines: Vec<String> = self
            .entries
            .iter()
            .map(|(key, value)| format!("  --{}-{}: {};", self.prefix, key, value))
            .collect();

        format!(":root {{\n{}\n}}", lines.join("\n"))
    }

    /// Serializes as Sass variable declarations, one per line.
    #[must_use]
    pub fn to_sass(&self) -> String {
        let lines: Vec<String> = self
            .entries
            .iter()
            .map(|(key, value)| format!("${}-{}: {};", self.prefix, key, value))
            .collect();

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_lowercases() {
        assert_eq!(variable_prefix("Primary"), "primary");
        assert_eq!(variable_prefix("ERROR"), "error");
    }

    #[test]
    fn test_prefix_sanitizes_invalid_characters() {
        assert_eq!(variable_prefix("Brand Blue"), "brand-blue");
        assert_eq!(variable_prefix("Brand / Blue!"), "brand-blue");
        assert_eq!(variable_prefix("  padded  "), "padded");
    }

    #[test]
    fn test_prefix_never_rejects() {
        assert_eq!(variable_prefix(""), "color");
        assert_eq!(variable_prefix("!!!"), "color");
    }

    #[test]
    fn test_css_rendering_order() {
        let mut document = VariableDocument::new("Primary");
        document.push("base", "#3B82F6");
        document.push("50", "#E7F0FE");

        let css = document.to_css();
        assert_eq!(
            css,
            ":root {\n  --primary-base: #3B82F6;\n  --primary-50: #E7F0FE;\n}"
        );
    }

    #[test]
    fn test_sass_rendering() {
        let mut document = VariableDocument::new("Primary");
        document.push("base", "#3B82F6");

        assert_eq!(document.to_sass(), "$primary-base: #3B82F6;");
    }

    #[test]
    fn test_empty_document_is_well_formed() {
        let document = VariableDocument::new("Primary");
        assert_eq!(document.to_css(), ":root {\n}");
        assert_eq!(document.to_sass(), "");
    }
}
