//! Export format selection and dispatch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::ColorGroup;

use super::{
    generate_css_variables, generate_json, generate_sass_variables, generate_tailwind_config,
};

/// The supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Tailwind theme extension (`module.exports` block)
    Tailwind,
    /// CSS custom properties in a `:root` block
    #[default]
    Css,
    /// Sass variable declarations
    Sass,
    /// Structured JSON document
    Json,
}

impl ExportFormat {
    /// All formats in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Tailwind, Self::Css, Self::Sass, Self::Json]
    }

    /// Renders a color group in this format.
    #[must_use]
    pub fn render(self, group: &ColorGroup) -> String {
        match self {
            Self::Tailwind => generate_tailwind_config(group),
            Self::Css => generate_css_variables(group),
            Self::Sass => generate_sass_variables(group),
            Self::Json => generate_json(group),
        }
    }

    /// File extension used when writing this format to disk.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Tailwind => "js",
            Self::Css => "css",
            Self::Sass => "scss",
            Self::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "tailwind" => Ok(Self::Tailwind),
            "css" => Ok(Self::Css),
            "sass" => Ok(Self::Sass),
            "json" => Ok(Self::Json),
            _ => Err(format!(
                "Invalid format '{value}'. Must be 'tailwind', 'css', 'sass', or 'json'"
            )),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tailwind => "tailwind",
            Self::Css => "css",
            Self::Sass => "sass",
            Self::Json => "json",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RgbColor;
    use crate::palette::generate_shades;

    #[test]
    fn test_from_str_valid() {
        assert_eq!("tailwind".parse::<ExportFormat>(), Ok(ExportFormat::Tailwind));
        assert_eq!("CSS".parse::<ExportFormat>(), Ok(ExportFormat::Css));
        assert_eq!("sass".parse::<ExportFormat>(), Ok(ExportFormat::Sass));
        assert_eq!("json".parse::<ExportFormat>(), Ok(ExportFormat::Json));
    }

    #[test]
    fn test_from_str_invalid() {
        let result = "less".parse::<ExportFormat>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid format 'less'"));
    }

    #[test]
    fn test_display_roundtrip() {
        for format in ExportFormat::all() {
            assert_eq!(format.to_string().parse::<ExportFormat>(), Ok(format));
        }
    }

    #[test]
    fn test_extension() {
        assert_eq!(ExportFormat::Tailwind.extension(), "js");
        assert_eq!(ExportFormat::Css.extension(), "css");
        assert_eq!(ExportFormat::Sass.extension(), "scss");
        assert_eq!(ExportFormat::Json.extension(), "json");
    }

    #[test]
    fn test_serde_lowercase_names() {
        assert_eq!(serde_json::to_string(&ExportFormat::Sass).unwrap(), "\"sass\"");
        assert_eq!(
            serde_json::from_str::<ExportFormat>("\"tailwind\"").unwrap(),
            ExportFormat::Tailwind
        );
    }

    #[test]
    fn test_all_formats_render_same_levels() {
        let base = RgbColor::new(59, 130, 246);
        let group = ColorGroup::new("Primary", base, generate_shades(base));

        // Every renderer must emit the same level labels in the same order
        for format in ExportFormat::all() {
            let output = format.render(&group);
            for shade in &group.shades {
                assert!(
                    output.contains(&shade.level.to_string()),
                    "{format} output missing level {}",
                    shade.level
                );
            }
        }
    }
}
