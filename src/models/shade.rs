//! Shade and color group models for palette generation.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{HslColor, RgbColor};

/// A single shade within a color scale.
///
/// A shade's `hex` and `hsl` fields always denote the same color: both are
/// derived from the same whole-number HSL components, so re-converting the
/// `hsl` string yields the stored hex exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shade {
    /// Scale level (50, 200, 300, ... 1000)
    pub level: u16,
    /// Hex color code (e.g. "#EF4444")
    pub hex: String,
    /// CSS hsl() string for the same color (e.g. "hsl(0, 84%, 60%)")
    pub hsl: String,
}

impl Shade {
    /// Convert this shade to an `RgbColor`.
    pub fn to_rgb(&self) -> Result<RgbColor> {
        RgbColor::from_hex(&self.hex)
    }

    /// Parse this shade's stored hsl() string.
    pub fn to_hsl(&self) -> Result<HslColor> {
        HslColor::parse(&self.hsl)
    }
}

/// A named color group: a base color together with its derived shade scale.
///
/// Groups are constructed fresh for each export call and have no lifecycle
/// beyond it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorGroup {
    /// Display title of the group (e.g. "Primary")
    pub title: String,
    /// Base color hex the scale was derived from
    pub base_color: String,
    /// Shades ordered from lightest to darkest
    pub shades: Vec<Shade>,
}

impl ColorGroup {
    /// Creates a group from a title, base color, and its shade scale.
    #[must_use]
    pub fn new(title: impl Into<String>, base: RgbColor, shades: Vec<Shade>) -> Self {
        Self {
            title: title.into(),
            base_color: base.to_hex(),
            shades,
        }
    }
}
